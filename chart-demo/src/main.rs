use anyhow::Result;
use chart_demo::{config::ChartConfig, observability, sample};

fn main() -> Result<()> {
    observability::init_tracing();

    let cfg = ChartConfig::load()?;

    let readings = sample::readings()?;
    let payload = chart_demo::run(&readings, &cfg)?;

    let json = serde_json::to_string_pretty(&payload)?;
    println!("{json}");

    Ok(())
}
