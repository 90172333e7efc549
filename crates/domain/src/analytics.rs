pub mod aggregate;
pub mod reduce;

pub use aggregate::{FileAggregator, ParsedLog};
pub use reduce::Reducer;
