//! Markdown output formatter

use super::OutputFormatter;
use anyhow::Result;
use palscan_core::Output;
use std::io::Write;

/// Markdown formatter - a heading and numbered list per source
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    palindrome_count: usize,
    source_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            palindrome_count: 0,
            source_count: 0,
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_result(&mut self, source: &str, output: &Output) -> Result<()> {
        self.source_count += 1;
        self.palindrome_count += output.len();

        writeln!(self.writer, "## {}", source)?;
        writeln!(self.writer)?;
        for (i, m) in output.matches.iter().enumerate() {
            writeln!(self.writer, "{}. {} ({})", i + 1, m.text, m.length)?;
        }
        if output.is_empty() {
            writeln!(self.writer, "*No palindromes found*")?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer, "---")?;
        writeln!(
            self.writer,
            "*Total palindromes: {} in {} source(s)*",
            self.palindrome_count, self.source_count
        )?;
        self.writer.flush()?;
        Ok(())
    }
}
