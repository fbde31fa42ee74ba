pub mod chart;
pub mod config;
pub mod observability;
pub mod sample;

pub use chart::{ChartData, ChartPayload};
pub use config::ChartConfig;

use anyhow::Context;
use consumption_client::{aggregate, Reading};

/// Aggregate `readings` and shape them into a chart payload.
///
/// An invalid reading is logged and returned; no payload is built.
pub fn run(readings: &[Reading], cfg: &ChartConfig) -> anyhow::Result<ChartPayload> {
    let result = aggregate(readings)
        .map_err(|e| {
            tracing::error!(error = %e, "reading batch rejected, no chart emitted");
            e
        })
        .context("readings could not be aggregated")?;

    tracing::info!(
        readings = readings.len(),
        categories = result.categories().len(),
        series = result.series().len(),
        "aggregated consumption"
    );

    Ok(ChartPayload::new(&result, cfg))
}
