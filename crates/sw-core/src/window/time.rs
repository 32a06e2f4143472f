use std::fmt;

/// Half-open `[start_ms, end_ms)` bounds of one window instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WindowBounds {
    pub start_ms: u64,
    pub end_ms: u64,
}

impl WindowBounds {
    pub fn contains(&self, timestamp_ms: u64) -> bool {
        self.start_ms <= timestamp_ms && timestamp_ms < self.end_ms
    }
}

impl fmt::Display for WindowBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start_ms, self.end_ms)
    }
}

// ---------------------------------------------------------------------------
// TimeWindows
// ---------------------------------------------------------------------------

/// Fixed-size windows aligned to the epoch.
///
/// `advance == size` gives tumbling windows; a smaller advance gives
/// overlapping hopping windows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeWindows {
    size_ms: u64,
    advance_ms: u64,
}

impl TimeWindows {
    /// Tumbling windows of `size_ms`.
    pub fn of(size_ms: u64) -> Self {
        Self {
            size_ms,
            advance_ms: size_ms,
        }
    }

    pub fn advance_by(self, advance_ms: u64) -> Self {
        Self { advance_ms, ..self }
    }

    pub fn size_ms(&self) -> u64 {
        self.size_ms
    }

    pub fn advance_ms(&self) -> u64 {
        self.advance_ms
    }

    pub fn is_tumbling(&self) -> bool {
        self.size_ms == self.advance_ms
    }

    /// Upper bound on the number of windows a single record falls into.
    pub fn max_windows_per_record(&self) -> u64 {
        if self.advance_ms == 0 {
            return 0;
        }
        self.size_ms.div_ceil(self.advance_ms)
    }

    /// All windows whose bounds contain `timestamp_ms`, earliest first.
    /// A zero advance describes no windows.
    pub fn windows_for(&self, timestamp_ms: u64) -> Vec<WindowBounds> {
        if self.advance_ms == 0 || self.size_ms == 0 {
            return Vec::new();
        }
        let earliest = timestamp_ms
            .saturating_add(self.advance_ms)
            .saturating_sub(self.size_ms);
        let mut start = earliest / self.advance_ms * self.advance_ms;

        let mut windows = Vec::new();
        while start <= timestamp_ms {
            let bounds = WindowBounds {
                start_ms: start,
                end_ms: start.saturating_add(self.size_ms),
            };
            if bounds.contains(timestamp_ms) {
                windows.push(bounds);
            }
            match start.checked_add(self.advance_ms) {
                Some(next) => start = next,
                None => break,
            }
        }
        windows
    }
}

impl fmt::Display for TimeWindows {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "TimeWindows(size={}ms, advance={}ms)",
            self.size_ms, self.advance_ms
        )
    }
}
