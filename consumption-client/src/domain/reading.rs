use time::{
    format_description::well_known::Rfc3339, macros::format_description, Date, OffsetDateTime,
};

use crate::error::InvalidReason;

/// One raw consumption measurement as supplied by the caller.
///
/// `date` is kept as text: it is only interpreted during aggregation, where
/// a blank or malformed value rejects the whole batch. Accepted forms are
/// `YYYY-MM-DD` and RFC3339 timestamps.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Reading {
    /// Not used for grouping.
    pub meter: String,
    pub location: String,
    pub consumption: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub date: String,
}

impl Reading {
    pub fn new(
        meter: impl Into<String>,
        location: impl Into<String>,
        consumption: f64,
        date: impl Into<String>,
    ) -> Self {
        Self {
            meter: meter.into(),
            location: location.into(),
            consumption,
            date: date.into(),
        }
    }

    /// Calendar date of the reading.
    ///
    /// Timestamps keep the date as seen in their own offset; no conversion to
    /// UTC or local time happens, so `2025-05-01T00:30:00+02:00` is a May reading.
    pub fn calendar_date(&self) -> Result<Date, InvalidReason> {
        let raw = self.date.trim();
        if raw.is_empty() {
            return Err(InvalidReason::MissingDate);
        }

        if let Ok(date) = Date::parse(raw, format_description!("[year]-[month]-[day]")) {
            return Ok(date);
        }

        OffsetDateTime::parse(raw, &Rfc3339)
            .map(|ts| ts.date())
            .map_err(|_| InvalidReason::UnparseableDate(raw.to_string()))
    }
}
