pub mod error;
pub mod lower;
pub mod materialized;
pub mod planner;
pub mod stream;
pub mod window;

pub use lower::{LowerError, WindowedAggregation, lower, lower_window};
pub use materialized::{Materialized, StoreKind};
pub use planner::plan_windowed_aggregate;
pub use stream::{Aggregator, GroupedStream, Initializer, SerdeType};
pub use window::{SessionWindows, TimeWindows, WindowBounds, WindowDescriptor};
