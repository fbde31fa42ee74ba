pub mod aggregate;
pub mod domain;
pub mod error;

pub use aggregate::{aggregate, validate_reading};
pub use domain::{AggregationResult, Reading, Series, TimeBucket};
pub use error::{InvalidReadingError, InvalidReason};
