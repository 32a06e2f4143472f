mod session;
mod time;

pub use session::SessionWindows;
pub use time::{TimeWindows, WindowBounds};

use std::fmt;

/// Window descriptor handed to the grouped-stream engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WindowDescriptor {
    /// Fixed-boundary windows (tumbling or hopping).
    Time(TimeWindows),
    /// Per-key windows sized by record arrival.
    Session(SessionWindows),
}

impl WindowDescriptor {
    pub fn is_session(&self) -> bool {
        matches!(self, Self::Session(_))
    }
}

impl fmt::Display for WindowDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Time(w) => fmt::Display::fmt(w, f),
            Self::Session(w) => fmt::Display::fmt(w, f),
        }
    }
}
