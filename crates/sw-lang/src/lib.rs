pub mod ast;
mod checker;
pub mod duration;
mod error;
pub mod explain;
pub mod parse_utils;
mod parser;
pub mod visitor;

pub use checker::{CheckError, CheckOptions, Severity, check_window, check_window_with, has_errors};
pub use duration::{DurationValue, TimeUnit};
pub use error::WindowError;
pub use explain::{WindowExplanation, explain_window};
pub use parser::parse_window;
pub use visitor::WindowVisitor;
