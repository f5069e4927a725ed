//! Validate command implementation

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use crate::config::CliConfig;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the configuration file to validate
    #[arg(short, long, value_name = "FILE", required = true)]
    pub config: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating configuration: {}", self.config.display());

        match Self::check(&self.config) {
            Ok(config) => {
                println!("✓ Configuration is valid!");
                println!("  Minimum length: {}", config.detection.min_length);
                println!("  Scan window: {}", config.detection.max_window);
                println!("  Include spaces: {}", config.detection.include_spaces);
                println!("  Output format: {}", config.output.default_format);
                Ok(())
            }
            Err(e) => {
                println!("✗ Configuration is invalid!");
                println!("  Error: {e}");
                Err(anyhow::anyhow!("Validation failed: {}", e))
            }
        }
    }

    /// Load the file and check every setting the detector will see
    fn check(path: &std::path::Path) -> Result<CliConfig> {
        use crate::commands::detect::OutputFormat;
        use clap::ValueEnum;

        let config = CliConfig::from_file(path)?;
        config.detector_config()?;
        OutputFormat::from_str(&config.output.default_format, true)
            .map_err(|_| anyhow::anyhow!("unknown output format '{}'", config.output.default_format))?;

        Ok(config)
    }
}
