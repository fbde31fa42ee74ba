use std::collections::HashMap;

use crate::domain::{AggregationResult, Reading, Series, TimeBucket};
use crate::error::{InvalidReadingError, InvalidReason};

/// Validation of a single `Reading`, returning the bucket it belongs to.
///
/// Rules:
/// - consumption must be finite and non-negative.
/// - date must be present and parse as a calendar date.
pub fn validate_reading(
    index: usize,
    reading: &Reading,
) -> Result<TimeBucket, InvalidReadingError> {
    let reject = |reason| InvalidReadingError {
        index,
        reading: reading.clone(),
        reason,
    };

    if !reading.consumption.is_finite() {
        return Err(reject(InvalidReason::NonFiniteConsumption(reading.consumption)));
    }

    if reading.consumption < 0.0 {
        return Err(reject(InvalidReason::NegativeConsumption(reading.consumption)));
    }

    let date = reading.calendar_date().map_err(reject)?;
    Ok(TimeBucket::from_date(date))
}

/// Sum consumption by location and calendar month.
///
/// Buckets and locations keep the order in which they first appear in
/// `readings`. Every series has one value per bucket; pairs with no readings
/// are `0.0`. The first invalid record fails the whole call.
pub fn aggregate(readings: &[Reading]) -> Result<AggregationResult, InvalidReadingError> {
    let keys = readings
        .iter()
        .enumerate()
        .map(|(index, reading)| validate_reading(index, reading))
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| {
            tracing::warn!(index = e.index, reason = %e.reason, "rejecting reading batch");
            e
        })?;

    let mut buckets: Vec<TimeBucket> = Vec::new();
    let mut bucket_index: HashMap<TimeBucket, usize> = HashMap::new();
    let mut locations: Vec<&str> = Vec::new();
    let mut location_index: HashMap<&str, usize> = HashMap::new();
    let mut cells: Vec<(usize, usize, f64)> = Vec::with_capacity(readings.len());

    for (reading, bucket) in readings.iter().zip(keys) {
        let col = *bucket_index.entry(bucket).or_insert_with(|| {
            buckets.push(bucket);
            buckets.len() - 1
        });
        let row = *location_index
            .entry(reading.location.as_str())
            .or_insert_with(|| {
                locations.push(reading.location.as_str());
                locations.len() - 1
            });
        cells.push((row, col, reading.consumption));
    }

    let mut values = vec![vec![0.0_f64; buckets.len()]; locations.len()];
    for (row, col, consumption) in cells {
        values[row][col] += consumption;
    }

    let series = locations
        .into_iter()
        .zip(values)
        .map(|(location, values)| Series {
            location: location.to_string(),
            values,
        })
        .collect::<Vec<_>>();

    tracing::debug!(
        readings = readings.len(),
        buckets = buckets.len(),
        series = series.len(),
        "aggregated readings"
    );

    Ok(AggregationResult::new(buckets, series))
}
