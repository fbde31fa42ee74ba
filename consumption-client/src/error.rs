use crate::domain::Reading;

/// A record that cannot be aggregated. Aggregation stops at the first one.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[error(
    "invalid reading at position {index} (meter {meter:?}, location {location:?}): {reason}",
    meter = .reading.meter,
    location = .reading.location
)]
pub struct InvalidReadingError {
    /// Position of the record in the input sequence.
    pub index: usize,
    pub reading: Reading,
    pub reason: InvalidReason,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum InvalidReason {
    #[error("date is missing")]
    MissingDate,
    #[error("date {0:?} is not a calendar date")]
    UnparseableDate(String),
    #[error("consumption {0} is not a finite number")]
    NonFiniteConsumption(f64),
    #[error("consumption {0} must be non-negative")]
    NegativeConsumption(f64),
}
