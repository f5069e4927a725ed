//! Configuration file support
//!
//! Settings are read from TOML. Every section is optional and falls back to
//! the detector defaults; command-line flags override whatever is loaded.

use std::fs;
use std::path::Path;

use palscan_core::{defaults, Config};
use serde::{Deserialize, Serialize};

use crate::error::CliError;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
pub struct CliConfig {
    /// Detection configuration
    #[serde(default)]
    pub detection: DetectionConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Performance configuration
    #[serde(default)]
    pub performance: PerformanceConfig,
}

/// Detection-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct DetectionConfig {
    /// Minimum palindrome length in characters
    pub min_length: usize,

    /// Scan window in characters
    pub max_window: usize,

    /// Count spaces when re-checking refined matches
    pub include_spaces: bool,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            min_length: defaults::MIN_LENGTH,
            max_window: defaults::MAX_WINDOW,
            include_spaces: defaults::INCLUDE_SPACES,
        }
    }
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub default_format: String,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: "text".to_string(),
            pretty_json: true,
        }
    }
}

/// Performance-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq, Default)]
#[serde(default)]
pub struct PerformanceConfig {
    /// Number of worker threads for multi-file runs (0 = auto)
    pub worker_threads: usize,
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, CliError> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::ConfigError(format!("{}: {}", path.display(), e)))?;
        toml::from_str(&content)
            .map_err(|e| CliError::ConfigError(format!("{}: {}", path.display(), e)))
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self, CliError> {
        toml::from_str(content).map_err(|e| CliError::ConfigError(e.to_string()))
    }

    /// Build the validated detector configuration
    pub fn detector_config(&self) -> Result<Config, CliError> {
        Config::builder()
            .min_length(self.detection.min_length)
            .max_window(self.detection.max_window)
            .include_spaces(self.detection.include_spaces)
            .build()
            .map_err(CliError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults_match_core() {
        let config = CliConfig::default();
        assert_eq!(config.detector_config().unwrap(), Config::default());
        assert_eq!(config.output.default_format, "text");
        assert_eq!(config.performance.worker_threads, 0);
    }

    #[test]
    fn test_partial_toml() {
        let config = CliConfig::from_toml(
            r#"
            [detection]
            min_length = 5
            "#,
        )
        .unwrap();

        assert_eq!(config.detection.min_length, 5);
        assert_eq!(config.detection.max_window, defaults::MAX_WINDOW);
        assert!(!config.detection.include_spaces);
        assert_eq!(config.output, OutputConfig::default());
    }

    #[test]
    fn test_full_toml() {
        let config = CliConfig::from_toml(
            r#"
            [detection]
            min_length = 4
            max_window = 30
            include_spaces = true

            [output]
            default_format = "json"
            pretty_json = false

            [performance]
            worker_threads = 2
            "#,
        )
        .unwrap();

        let detector_config = config.detector_config().unwrap();
        assert_eq!(detector_config.min_length(), 4);
        assert_eq!(detector_config.max_window(), 30);
        assert!(detector_config.include_spaces());
        assert_eq!(config.output.default_format, "json");
        assert!(!config.output.pretty_json);
        assert_eq!(config.performance.worker_threads, 2);
    }

    #[test]
    fn test_invalid_toml() {
        let result = CliConfig::from_toml("[detection\nmin_length = ");
        assert!(matches!(result, Err(CliError::ConfigError(_))));
    }

    #[test]
    fn test_invalid_detection_values() {
        let config = CliConfig::from_toml(
            r#"
            [detection]
            min_length = 10
            max_window = 5
            "#,
        )
        .unwrap();
        assert!(matches!(
            config.detector_config(),
            Err(CliError::ConfigError(_))
        ));
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[detection]\ninclude_spaces = true").unwrap();

        let config = CliConfig::from_file(file.path()).unwrap();
        assert!(config.detection.include_spaces);
    }

    #[test]
    fn test_from_missing_file() {
        let err = CliConfig::from_file(Path::new("/nonexistent/palscan.toml")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/palscan.toml"));
    }
}
