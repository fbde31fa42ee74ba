use std::fmt;

use time::{Date, Month};

/// Calendar month a reading falls into.
///
/// Equality and hashing use the `(year, month)` pair. The display label drops
/// the century, so distinct buckets can share a label (`Apr 25` for both
/// 1925 and 2025); never compare buckets by label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimeBucket {
    year: i32,
    month: Month,
}

impl TimeBucket {
    pub fn new(year: i32, month: Month) -> Self {
        Self { year, month }
    }

    pub fn from_date(date: Date) -> Self {
        Self::new(date.year(), date.month())
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> Month {
        self.month
    }

    /// Abbreviated month plus two-digit year, e.g. `Apr 25`.
    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl From<Date> for TimeBucket {
    fn from(date: Date) -> Self {
        Self::from_date(date)
    }
}

impl fmt::Display for TimeBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // `Month` displays its full English name; every name is at least three ASCII chars.
        let name = self.month.to_string();
        write!(f, "{} {:02}", &name[..3], self.year.rem_euclid(100))
    }
}
