use super::bucket::TimeBucket;

/// One location's consumption, aligned with `AggregationResult::categories`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Series {
    pub location: String,
    pub values: Vec<f64>,
}

impl Series {
    pub fn total(&self) -> f64 {
        self.values.iter().sum()
    }
}

/// Chart-ready matrix produced by [`crate::aggregate`].
///
/// Fields are private so the alignment between `categories` and every
/// `Series::values` cannot be broken after construction.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AggregationResult {
    categories: Vec<String>,
    #[cfg_attr(feature = "serde", serde(skip))]
    buckets: Vec<TimeBucket>,
    series: Vec<Series>,
}

impl AggregationResult {
    pub(crate) fn new(buckets: Vec<TimeBucket>, series: Vec<Series>) -> Self {
        let categories = buckets.iter().map(TimeBucket::label).collect();
        Self {
            categories,
            buckets,
            series,
        }
    }

    /// Display labels, one per bucket, in first-occurrence order.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Bucket keys behind `categories`, index for index.
    pub fn buckets(&self) -> &[TimeBucket] {
        &self.buckets
    }

    pub fn series(&self) -> &[Series] {
        &self.series
    }

    pub fn series_for(&self, location: &str) -> Option<&Series> {
        self.series.iter().find(|s| s.location == location)
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty() && self.series.is_empty()
    }

    pub fn into_parts(self) -> (Vec<String>, Vec<Series>) {
        (self.categories, self.series)
    }
}
