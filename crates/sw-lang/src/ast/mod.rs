mod expression;
mod location;
mod window;

pub use expression::*;
pub use location::*;
pub use window::*;
