use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use std::time::Duration;

use crate::error::WindowError;

// ---------------------------------------------------------------------------
// TimeUnit
// ---------------------------------------------------------------------------

/// Unit keyword accepted in window clauses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeUnit {
    Milliseconds,
    Seconds,
    Minutes,
    Hours,
    Days,
}

impl TimeUnit {
    pub const ALL: [TimeUnit; 5] = [
        TimeUnit::Milliseconds,
        TimeUnit::Seconds,
        TimeUnit::Minutes,
        TimeUnit::Hours,
        TimeUnit::Days,
    ];

    pub fn millis_per_unit(self) -> u64 {
        match self {
            Self::Milliseconds => 1,
            Self::Seconds => 1_000,
            Self::Minutes => 60_000,
            Self::Hours => 3_600_000,
            Self::Days => 86_400_000,
        }
    }

    /// Canonical upper-case plural keyword, e.g. `SECONDS`.
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Milliseconds => "MILLISECONDS",
            Self::Seconds => "SECONDS",
            Self::Minutes => "MINUTES",
            Self::Hours => "HOURS",
            Self::Days => "DAYS",
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

impl FromStr for TimeUnit {
    type Err = anyhow::Error;

    /// Singular and plural forms, case-insensitive.
    fn from_str(s: &str) -> anyhow::Result<Self> {
        let upper = s.trim().to_ascii_uppercase();
        let unit = match upper.as_str() {
            "MILLISECOND" | "MILLISECONDS" => Self::Milliseconds,
            "SECOND" | "SECONDS" => Self::Seconds,
            "MINUTE" | "MINUTES" => Self::Minutes,
            "HOUR" | "HOURS" => Self::Hours,
            "DAY" | "DAYS" => Self::Days,
            _ => anyhow::bail!(
                "unknown time unit {s:?} (expected MILLISECONDS/SECONDS/MINUTES/HOURS/DAYS)"
            ),
        };
        Ok(unit)
    }
}

// ---------------------------------------------------------------------------
// DurationValue
// ---------------------------------------------------------------------------

/// A length of time written as `<magnitude> <UNIT>`.
///
/// Equality, ordering and hashing use the normalized millisecond value, so
/// `5 SECONDS` and `5000 MILLISECONDS` compare equal. The comparison is done
/// on a widened integer and never saturates.
#[derive(Debug, Clone, Copy)]
pub struct DurationValue {
    magnitude: u64,
    unit: TimeUnit,
}

impl DurationValue {
    pub const fn new(magnitude: u64, unit: TimeUnit) -> Self {
        Self { magnitude, unit }
    }

    pub const fn millis(magnitude: u64) -> Self {
        Self::new(magnitude, TimeUnit::Milliseconds)
    }

    pub const fn seconds(magnitude: u64) -> Self {
        Self::new(magnitude, TimeUnit::Seconds)
    }

    pub const fn minutes(magnitude: u64) -> Self {
        Self::new(magnitude, TimeUnit::Minutes)
    }

    pub const fn hours(magnitude: u64) -> Self {
        Self::new(magnitude, TimeUnit::Hours)
    }

    pub const fn days(magnitude: u64) -> Self {
        Self::new(magnitude, TimeUnit::Days)
    }

    pub fn magnitude(&self) -> u64 {
        self.magnitude
    }

    pub fn unit(&self) -> TimeUnit {
        self.unit
    }

    pub fn is_zero(&self) -> bool {
        self.magnitude == 0
    }

    /// Normalize to milliseconds. Fails instead of wrapping when the value
    /// does not fit in a `u64`.
    pub fn to_millis(&self) -> Result<u64, WindowError> {
        self.magnitude
            .checked_mul(self.unit.millis_per_unit())
            .ok_or(WindowError::DurationOverflow {
                magnitude: self.magnitude,
                unit: self.unit,
            })
    }

    pub fn to_std(&self) -> Result<Duration, WindowError> {
        self.to_millis().map(Duration::from_millis)
    }

    fn exact_millis(&self) -> u128 {
        u128::from(self.magnitude) * u128::from(self.unit.millis_per_unit())
    }
}

impl PartialEq for DurationValue {
    fn eq(&self, other: &Self) -> bool {
        self.exact_millis() == other.exact_millis()
    }
}

impl Eq for DurationValue {}

impl Hash for DurationValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.exact_millis().hash(state);
    }
}

impl PartialOrd for DurationValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DurationValue {
    fn cmp(&self, other: &Self) -> Ordering {
        self.exact_millis().cmp(&other.exact_millis())
    }
}

impl fmt::Display for DurationValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.magnitude, self.unit)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
