//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// File not found or inaccessible
    FileNotFound(String),
    /// Invalid file pattern
    InvalidPattern(String),
    /// Configuration error
    ConfigError(String),
    /// Detection error from core
    DetectionError(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::FileNotFound(path) => write!(f, "File not found: {path}"),
            CliError::InvalidPattern(pattern) => write!(f, "Invalid file pattern: {pattern}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::DetectionError(msg) => write!(f, "Detection error: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

impl From<palscan_core::Error> for CliError {
    fn from(err: palscan_core::Error) -> Self {
        match err {
            palscan_core::Error::Configuration(msg) => CliError::ConfigError(msg),
            other => CliError::DetectionError(other.to_string()),
        }
    }
}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_not_found_error_display() {
        let error = CliError::FileNotFound("test.txt".to_string());
        assert_eq!(error.to_string(), "File not found: test.txt");
    }

    #[test]
    fn test_invalid_pattern_error_display() {
        let error = CliError::InvalidPattern("[invalid".to_string());
        assert_eq!(error.to_string(), "Invalid file pattern: [invalid");
    }

    #[test]
    fn test_config_error_display() {
        let error = CliError::ConfigError("invalid format".to_string());
        assert_eq!(error.to_string(), "Configuration error: invalid format");
    }

    #[test]
    fn test_detection_error_display() {
        let error = CliError::DetectionError("invalid UTF-8".to_string());
        assert_eq!(error.to_string(), "Detection error: invalid UTF-8");
    }

    #[test]
    fn test_from_core_configuration_error() {
        let core = palscan_core::Error::Configuration("min_length must be greater than 0".into());
        let error = CliError::from(core);
        assert!(matches!(error, CliError::ConfigError(_)));
        assert!(error.to_string().contains("min_length"));
    }

    #[test]
    fn test_from_core_input_error() {
        let core = palscan_core::Error::InvalidInput("bad bytes".into());
        let error = CliError::from(core);
        assert!(matches!(error, CliError::DetectionError(_)));
    }

    #[test]
    fn test_cli_result_type_alias() {
        let success: CliResult<String> = Ok("test".to_string());
        assert!(success.is_ok());

        let failure: CliResult<String> = Err(anyhow::anyhow!("test error"));
        assert!(failure
            .as_ref()
            .unwrap_err()
            .to_string()
            .contains("test error"));
    }

    #[test]
    fn test_error_with_special_characters() {
        let error = CliError::FileNotFound("回文/test 文件.txt".to_string());
        assert_eq!(error.to_string(), "File not found: 回文/test 文件.txt");
    }
}
