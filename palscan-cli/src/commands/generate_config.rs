//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use palscan_core::defaults;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        if self.output.exists() && !self.force {
            anyhow::bail!(
                "{} already exists (use --force to overwrite)",
                self.output.display()
            );
        }

        println!("Generating configuration template...");
        println!("  Output file: {}", self.output.display());

        fs::write(&self.output, Self::template())
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the configuration file to adjust detection settings");
        println!("2. Validate your configuration:");
        println!("   palscan validate --config {}", self.output.display());
        println!("3. Use it for detection:");
        println!(
            "   palscan detect -i input.txt --config {}",
            self.output.display()
        );

        Ok(())
    }

    /// Template configuration content
    pub fn template() -> String {
        format!(
            r#"# palscan configuration

[detection]
# Shortest palindrome reported, in characters
min_length = {min_length}

# Characters examined from each start position; palindromes longer than
# this are never found
max_window = {max_window}

# When true, spaces must mirror too: "step on no pets" passes,
# "was it a car or a cat i saw" does not
include_spaces = {include_spaces}

[output]
# One of: text, json, markdown
default_format = "text"

# Indent JSON output
pretty_json = true

[performance]
# Worker threads for parallel multi-file scans (0 = all cores)
worker_threads = 0
"#,
            min_length = defaults::MIN_LENGTH,
            max_window = defaults::MAX_WINDOW,
            include_spaces = defaults::INCLUDE_SPACES,
        )
    }
}
