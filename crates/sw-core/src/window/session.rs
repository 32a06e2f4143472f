use std::fmt;

/// Session windows: a key's window stays open while records keep arriving
/// within `inactivity_gap_ms` of each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionWindows {
    inactivity_gap_ms: u64,
}

impl SessionWindows {
    pub fn with_inactivity_gap(inactivity_gap_ms: u64) -> Self {
        Self { inactivity_gap_ms }
    }

    pub fn inactivity_gap_ms(&self) -> u64 {
        self.inactivity_gap_ms
    }

    /// Whether a record at `next_start_ms` extends a session whose last
    /// record was at `prev_end_ms`.
    pub fn should_merge(&self, prev_end_ms: u64, next_start_ms: u64) -> bool {
        next_start_ms <= prev_end_ms.saturating_add(self.inactivity_gap_ms)
    }
}

impl fmt::Display for SessionWindows {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SessionWindows(gap={}ms)", self.inactivity_gap_ms)
    }
}
