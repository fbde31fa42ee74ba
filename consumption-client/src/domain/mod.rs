pub mod bucket;
pub mod reading;
pub mod series;

pub use bucket::TimeBucket;
pub use reading::Reading;
pub use series::{AggregationResult, Series};
