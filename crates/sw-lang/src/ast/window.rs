use std::fmt;

use crate::duration::DurationValue;
use crate::error::WindowError;

// ---------------------------------------------------------------------------
// WindowKind
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WindowKind {
    Tumbling,
    Hopping,
    Session,
}

impl fmt::Display for WindowKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Tumbling => "TUMBLING",
            Self::Hopping => "HOPPING",
            Self::Session => "SESSION",
        })
    }
}

// ---------------------------------------------------------------------------
// Variants
// ---------------------------------------------------------------------------

/// `TUMBLING ( SIZE <n> <UNIT> )`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TumblingWindow {
    size: DurationValue,
}

impl TumblingWindow {
    pub fn new(size: DurationValue) -> Self {
        Self { size }
    }

    pub fn size(&self) -> DurationValue {
        self.size
    }

    pub fn validate(&self) -> Result<(), WindowError> {
        self.size.to_millis()?;
        require_positive("size", self.size)
    }
}

impl fmt::Display for TumblingWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TUMBLING ( SIZE {} )", self.size)
    }
}

/// `HOPPING ( SIZE <n> <UNIT> , ADVANCE BY <n> <UNIT> )`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HoppingWindow {
    size: DurationValue,
    advance: DurationValue,
}

impl HoppingWindow {
    pub fn new(size: DurationValue, advance: DurationValue) -> Self {
        Self { size, advance }
    }

    pub fn size(&self) -> DurationValue {
        self.size
    }

    pub fn advance(&self) -> DurationValue {
        self.advance
    }

    /// Overflow is checked on both durations before either is checked for
    /// zero. The advance may not exceed the size.
    pub fn validate(&self) -> Result<(), WindowError> {
        let size_ms = self.size.to_millis()?;
        let advance_ms = self.advance.to_millis()?;
        require_positive("size", self.size)?;
        require_positive("advance", self.advance)?;
        if advance_ms > size_ms {
            return Err(WindowError::InvalidAdvance {
                size_ms,
                advance_ms,
            });
        }
        Ok(())
    }
}

impl fmt::Display for HoppingWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "HOPPING ( SIZE {} , ADVANCE BY {} )",
            self.size, self.advance
        )
    }
}

/// `SESSION ( <n> <UNIT> )`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionWindow {
    inactivity_gap: DurationValue,
}

impl SessionWindow {
    pub fn new(inactivity_gap: DurationValue) -> Self {
        Self { inactivity_gap }
    }

    pub fn inactivity_gap(&self) -> DurationValue {
        self.inactivity_gap
    }

    pub fn validate(&self) -> Result<(), WindowError> {
        self.inactivity_gap.to_millis()?;
        require_positive("gap", self.inactivity_gap)
    }
}

impl fmt::Display for SessionWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SESSION ( {} )", self.inactivity_gap)
    }
}

fn require_positive(field: &'static str, d: DurationValue) -> Result<(), WindowError> {
    if d.is_zero() {
        return Err(WindowError::InvalidWindowSize { field });
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// WindowSpec
// ---------------------------------------------------------------------------

/// The closed set of window kinds a GROUP BY aggregation can be windowed by.
///
/// Variants of different kinds never compare equal; variants of the same
/// kind compare by normalized durations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WindowSpec {
    Tumbling(TumblingWindow),
    Hopping(HoppingWindow),
    Session(SessionWindow),
}

impl WindowSpec {
    pub fn tumbling(size: DurationValue) -> Self {
        Self::Tumbling(TumblingWindow::new(size))
    }

    pub fn hopping(size: DurationValue, advance: DurationValue) -> Self {
        Self::Hopping(HoppingWindow::new(size, advance))
    }

    pub fn session(inactivity_gap: DurationValue) -> Self {
        Self::Session(SessionWindow::new(inactivity_gap))
    }

    pub fn kind(&self) -> WindowKind {
        match self {
            Self::Tumbling(_) => WindowKind::Tumbling,
            Self::Hopping(_) => WindowKind::Hopping,
            Self::Session(_) => WindowKind::Session,
        }
    }

    pub fn validate(&self) -> Result<(), WindowError> {
        match self {
            Self::Tumbling(w) => w.validate(),
            Self::Hopping(w) => w.validate(),
            Self::Session(w) => w.validate(),
        }
    }

    /// The duration that bounds a single window: size, or gap for sessions.
    pub fn extent(&self) -> (&'static str, DurationValue) {
        match self {
            Self::Tumbling(w) => ("size", w.size()),
            Self::Hopping(w) => ("size", w.size()),
            Self::Session(w) => ("gap", w.inactivity_gap()),
        }
    }

    /// Stable surface-syntax rendering, used in plan diffs and golden files.
    pub fn canonical_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for WindowSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tumbling(w) => fmt::Display::fmt(w, f),
            Self::Hopping(w) => fmt::Display::fmt(w, f),
            Self::Session(w) => fmt::Display::fmt(w, f),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
