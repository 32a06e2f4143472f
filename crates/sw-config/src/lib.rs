pub mod check;
pub mod logging;
pub mod swin;
pub mod types;

pub use check::CheckConfig;
pub use logging::{LogFormat, LoggingConfig};
pub use swin::SwinConfig;
pub use types::HumanDuration;
