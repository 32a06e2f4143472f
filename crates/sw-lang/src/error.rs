use crate::duration::TimeUnit;

/// Configuration error raised while validating a window clause.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WindowError {
    #[error("invalid window size: {field} must be greater than zero")]
    InvalidWindowSize { field: &'static str },
    #[error("invalid advance: {advance_ms}ms exceeds window size {size_ms}ms")]
    InvalidAdvance { size_ms: u64, advance_ms: u64 },
    #[error("duration overflow: {magnitude} {unit} exceeds the millisecond range")]
    DurationOverflow { magnitude: u64, unit: TimeUnit },
    #[error("window {field} {millis}ms exceeds the configured maximum of {max_ms}ms")]
    ExceedsLimit {
        field: &'static str,
        millis: u64,
        max_ms: u64,
    },
}
