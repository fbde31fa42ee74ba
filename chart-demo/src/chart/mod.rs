use consumption_client::AggregationResult;
use serde::Serialize;

use crate::config::ChartConfig;

/// One plotted line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dataset {
    pub label: String,
    pub data: Vec<f64>,
    pub fill: bool,
}

/// Labels and datasets in the shape line-chart widgets consume.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

impl ChartData {
    pub fn from_aggregation(result: &AggregationResult, cfg: &ChartConfig) -> Self {
        let datasets = result
            .series()
            .iter()
            .map(|s| Dataset {
                label: format!("{}{}", cfg.series_label_prefix, s.location),
                data: s.values.clone(),
                fill: cfg.fill,
            })
            .collect();

        Self {
            labels: result.categories().to_vec(),
            datasets,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Legend {
    pub display: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Plugins {
    pub legend: Legend,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartOptions {
    pub responsive: bool,
    pub plugins: Plugins,
}

/// Complete payload: chart type, data and options.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPayload {
    #[serde(rename = "type")]
    pub chart_type: String,
    pub data: ChartData,
    pub options: ChartOptions,
}

impl ChartPayload {
    pub fn new(result: &AggregationResult, cfg: &ChartConfig) -> Self {
        Self {
            chart_type: cfg.chart_type.clone(),
            data: ChartData::from_aggregation(result, cfg),
            options: ChartOptions {
                responsive: cfg.responsive,
                plugins: Plugins {
                    legend: Legend {
                        display: cfg.legend_display,
                    },
                },
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample;
    use consumption_client::aggregate;
    use serde_json::json;

    #[test]
    fn datasets_follow_series_order() {
        let result = aggregate(&sample::readings().unwrap()).unwrap();
        let data = ChartData::from_aggregation(&result, &ChartConfig::default());

        assert_eq!(data.labels, ["Apr 25", "May 25", "Jun 25"]);
        assert_eq!(
            data.datasets,
            vec![
                Dataset {
                    label: "Location l1".to_string(),
                    data: vec![1800.0, 1800.0, 1800.0],
                    fill: true,
                },
                Dataset {
                    label: "Location l2".to_string(),
                    data: vec![500.0, 700.0, 700.0],
                    fill: true,
                },
            ]
        );
    }

    #[test]
    fn config_drives_labels_and_options() {
        let cfg = ChartConfig {
            series_label_prefix: String::new(),
            fill: false,
            chart_type: "bar".to_string(),
            responsive: false,
            legend_display: false,
        };
        let result = aggregate(&sample::readings().unwrap()).unwrap();
        let payload = ChartPayload::new(&result, &cfg);

        assert_eq!(payload.chart_type, "bar");
        assert_eq!(payload.data.datasets[1].label, "l2");
        assert!(payload.data.datasets.iter().all(|d| !d.fill));
        assert!(!payload.options.responsive);
        assert!(!payload.options.plugins.legend.display);
    }

    #[test]
    fn serializes_to_widget_payload() {
        let result = aggregate(&sample::readings().unwrap()[..3]).unwrap();
        let payload = ChartPayload::new(&result, &ChartConfig::default());

        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({
                "type": "line",
                "data": {
                    "labels": ["Apr 25"],
                    "datasets": [
                        { "label": "Location l1", "data": [1800.0], "fill": true },
                        { "label": "Location l2", "data": [500.0], "fill": true }
                    ]
                },
                "options": {
                    "responsive": true,
                    "plugins": { "legend": { "display": true } }
                }
            })
        );
    }

    #[test]
    fn empty_aggregation_gives_empty_chart() {
        let result = aggregate(&[]).unwrap();
        let data = ChartData::from_aggregation(&result, &ChartConfig::default());
        assert!(data.labels.is_empty());
        assert!(data.datasets.is_empty());
    }
}
