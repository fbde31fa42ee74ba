use anyhow::Context;
use serde::Deserialize;
use std::{fs, path::Path};

pub const CONFIG_ENV: &str = "CHART_DEMO_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "chart-demo.toml";

/// Presentation settings for the emitted chart payload.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChartConfig {
    /// Prepended to each location to form its dataset label.
    pub series_label_prefix: String,
    pub fill: bool,
    pub chart_type: String,
    pub responsive: bool,
    pub legend_display: bool,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            series_label_prefix: "Location ".to_string(),
            fill: true,
            chart_type: "line".to_string(),
            responsive: true,
            legend_display: true,
        }
    }
}

impl ChartConfig {
    /// Resolve the config from `CHART_DEMO_CONFIG`, then `chart-demo.toml`, then defaults.
    ///
    /// A file named by the env var must exist.
    pub fn load() -> anyhow::Result<Self> {
        use std::env;

        match env::var(CONFIG_ENV) {
            Ok(path) => Self::from_file(path),
            Err(_) if Path::new(DEFAULT_CONFIG_PATH).is_file() => {
                Self::from_file(DEFAULT_CONFIG_PATH)
            }
            Err(_) => {
                tracing::debug!("no chart config found, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read chart config {}", path.display()))?;
        let cfg = Self::from_toml_str(&contents)
            .with_context(|| format!("invalid chart config {}", path.display()))?;
        tracing::info!(path = %path.display(), "loaded chart config");
        Ok(cfg)
    }

    pub fn from_toml_str(contents: &str) -> anyhow::Result<Self> {
        let cfg: ChartConfig = toml::from_str(contents)?;
        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_document_gives_defaults() {
        assert_eq!(ChartConfig::from_toml_str("").unwrap(), ChartConfig::default());
    }

    #[test]
    fn partial_document_overrides_only_named_keys() {
        let cfg = ChartConfig::from_toml_str(
            r#"
            series_label_prefix = "Site "
            fill = false
            "#,
        )
        .unwrap();

        assert_eq!(cfg.series_label_prefix, "Site ");
        assert!(!cfg.fill);
        assert_eq!(cfg.chart_type, "line");
        assert!(cfg.responsive);
        assert!(cfg.legend_display);
    }

    #[test]
    fn rejects_wrong_types_and_unknown_keys() {
        assert!(ChartConfig::from_toml_str("fill = \"yes\"").is_err());
        assert!(ChartConfig::from_toml_str("colour = \"red\"").is_err());
    }

    #[test]
    fn reads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "legend_display = false").unwrap();

        let cfg = ChartConfig::from_file(file.path()).unwrap();
        assert!(!cfg.legend_display);
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = ChartConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
        assert!(err.to_string().contains("failed to read chart config"));
    }
}
