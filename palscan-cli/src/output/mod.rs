//! Output formatting module

use anyhow::Result;
use palscan_core::Output;

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output the palindromes found in one source
    fn format_result(&mut self, source: &str, output: &Output) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;
