use anyhow::Context;
use consumption_client::Reading;

/// Readings shipped with the demo: three meters over two locations, April to June 2025.
const SAMPLE_READINGS: &str = r#"[
    { "meter": "m1", "location": "l1", "consumption": 1000, "date": "2025-04-01" },
    { "meter": "m2", "location": "l1", "consumption": 800, "date": "2025-04-01" },
    { "meter": "m3", "location": "l2", "consumption": 500, "date": "2025-04-01" },
    { "meter": "m1", "location": "l1", "consumption": 800, "date": "2025-05-01" },
    { "meter": "m2", "location": "l1", "consumption": 1000, "date": "2025-05-01" },
    { "meter": "m3", "location": "l2", "consumption": 700, "date": "2025-05-01" },
    { "meter": "m1", "location": "l1", "consumption": 800, "date": "2025-06-01" },
    { "meter": "m2", "location": "l1", "consumption": 1000, "date": "2025-06-01" },
    { "meter": "m3", "location": "l2", "consumption": 700, "date": "2025-06-01" }
]"#;

/// Decode a JSON array of reading records.
pub fn from_json(contents: &str) -> anyhow::Result<Vec<Reading>> {
    serde_json::from_str(contents).context("readings must be a JSON array of reading records")
}

pub fn readings() -> anyhow::Result<Vec<Reading>> {
    from_json(SAMPLE_READINGS)
}
