//! Configuration API for palindrome detection

use serde::Serialize;

use crate::api::Error;

/// Default configuration constants
pub mod defaults {
    /// Default minimum palindrome length in characters
    pub const MIN_LENGTH: usize = 3;

    /// Default scan window in characters
    pub const MAX_WINDOW: usize = 60;

    /// Spaces are separators unless asked otherwise
    pub const INCLUDE_SPACES: bool = false;

    /// Smallest minimum length offered to interactive users
    pub const USER_MIN_LENGTH: usize = 3;

    /// Largest minimum length offered to interactive users
    pub const USER_MAX_LENGTH: usize = MAX_WINDOW;
}

/// Detection configuration
///
/// Lengths are counted in characters. Fields are read-only once built; use
/// [`ConfigBuilder`] to obtain a validated value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Config {
    pub(crate) min_length: usize,
    pub(crate) max_window: usize,
    pub(crate) include_spaces: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            min_length: defaults::MIN_LENGTH,
            max_window: defaults::MAX_WINDOW,
            include_spaces: defaults::INCLUDE_SPACES,
        }
    }
}

impl Config {
    /// Create a configuration builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Minimum palindrome length
    pub fn min_length(&self) -> usize {
        self.min_length
    }

    /// Maximum window scanned from each start position
    pub fn max_window(&self) -> usize {
        self.max_window
    }

    /// Whether spaces count as characters in the final palindrome check
    pub fn include_spaces(&self) -> bool {
        self.include_spaces
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), Error> {
        if self.min_length == 0 {
            return Err(Error::Configuration(
                "min_length must be greater than 0".into(),
            ));
        }

        if self.max_window < self.min_length {
            return Err(Error::Configuration(format!(
                "max_window ({}) must be at least min_length ({})",
                self.max_window, self.min_length
            )));
        }

        Ok(())
    }
}

/// Fluent builder for configuration
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    min_length: Option<usize>,
    max_window: Option<usize>,
    include_spaces: Option<bool>,
}

impl ConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the minimum palindrome length
    pub fn min_length(mut self, chars: usize) -> Self {
        self.min_length = Some(chars);
        self
    }

    /// Set the scan window
    pub fn max_window(mut self, chars: usize) -> Self {
        self.max_window = Some(chars);
        self
    }

    /// Count spaces as characters when re-checking refined matches
    pub fn include_spaces(mut self, include: bool) -> Self {
        self.include_spaces = Some(include);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config, Error> {
        let mut config = Config::default();

        if let Some(min_length) = self.min_length {
            config.min_length = min_length;
        }

        if let Some(max_window) = self.max_window {
            config.max_window = max_window;
        }

        if let Some(include_spaces) = self.include_spaces {
            config.include_spaces = include_spaces;
        }

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.min_length(), 3);
        assert_eq!(config.max_window(), 60);
        assert!(!config.include_spaces());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_overrides() {
        let config = Config::builder()
            .min_length(5)
            .max_window(20)
            .include_spaces(true)
            .build()
            .unwrap();

        assert_eq!(config.min_length(), 5);
        assert_eq!(config.max_window(), 20);
        assert!(config.include_spaces());
    }

    #[test]
    fn test_zero_min_length_rejected() {
        let result = Config::builder().min_length(0).build();
        assert!(matches!(result, Err(Error::Configuration(_))));
    }

    #[test]
    fn test_window_below_min_length_rejected() {
        let err = Config::builder()
            .min_length(10)
            .max_window(5)
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("max_window (5)"));
    }

    #[test]
    fn test_window_equal_to_min_length_allowed() {
        assert!(Config::builder().min_length(7).max_window(7).build().is_ok());
    }
}
