//! Application configuration

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default name of the export file
pub const DEFAULT_EXPORT_PATH: &str = "sentiment_analysis_results.txt";

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Export settings
    pub export: ExportSettings,
    /// Chart rendering settings
    pub chart: ChartSettings,
    /// Polarity analyzer settings
    pub analyzer: AnalyzerSettings,
    /// Logging settings
    pub logging: LoggingSettings,
}

/// Where results are written
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportSettings {
    /// Export file, overwritten on every export
    pub path: PathBuf,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_EXPORT_PATH),
        }
    }
}

/// Terminal chart settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartSettings {
    /// Width of the longest bar, in cells
    pub width: usize,
    /// Pie radius, in rows
    pub radius: usize,
    /// Wait for Enter after each chart
    pub pause: bool,
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            width: 40,
            radius: 8,
            pause: true,
        }
    }
}

/// Lexicon analyzer settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerSettings {
    /// Number of tokens after a negation that get inverted
    pub negation_window: usize,
}

impl Default for AnalyzerSettings {
    fn default() -> Self {
        Self { negation_window: 3 }
    }
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Log level (debug, info, warn, error)
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

/// Load configuration from file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig, ConfigError> {
    let content = std::fs::read_to_string(path.as_ref())
        .map_err(|e| ConfigError::FileError(e.to_string()))?;

    match extension(path.as_ref()) {
        "json" => serde_json::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string())),
        "toml" => toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string())),
        ext => Err(ConfigError::UnsupportedFormat(ext.to_string())),
    }
}

fn extension(path: &Path) -> &str {
    path.extension().and_then(|e| e.to_str()).unwrap_or("")
}

/// Configuration error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File I/O error
    #[error("File error: {0}")]
    FileError(String),
    /// Parse error
    #[error("Parse error: {0}")]
    ParseError(String),
    /// Unsupported format
    #[error("Unsupported config format: {0}")]
    UnsupportedFormat(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.export.path, PathBuf::from(DEFAULT_EXPORT_PATH));
        assert!(config.chart.pause);
        assert_eq!(config.analyzer.negation_window, 3);
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_load_toml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[export]\npath = \"out.txt\"\n\n[chart]\npause = false\n\n[analyzer]\nnegation_window = 2\n",
        )
        .unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.export.path, PathBuf::from("out.txt"));
        assert!(!config.chart.pause);
        assert_eq!(config.chart.width, 40);
        assert_eq!(config.analyzer.negation_window, 2);
    }

    #[test]
    fn test_invalid_toml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[chart\nwidth = ").unwrap();

        assert!(matches!(load_config(&path), Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "chart": { "width": 10 } }"#).unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.chart.width, 10);
        assert_eq!(config.chart.radius, 8);
        assert_eq!(config.export.path, PathBuf::from(DEFAULT_EXPORT_PATH));
    }

    #[test]
    fn test_unsupported_format() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.ini");
        std::fs::write(&path, "").unwrap();

        assert!(matches!(
            load_config(&path),
            Err(ConfigError::UnsupportedFormat(ext)) if ext == "ini"
        ));
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            load_config("/definitely/not/here.toml"),
            Err(ConfigError::FileError(_))
        ));
    }
}
