//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use palscan_core::Output;
use std::io::Write;

/// Plain text formatter - count, timing, then one palindrome per line
pub struct TextFormatter<W: Write> {
    writer: W,
    show_source: bool,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            show_source: false,
        }
    }

    /// Print a header naming each source before its report
    pub fn with_source_headers(mut self, show: bool) -> Self {
        self.show_source = show;
        self
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_result(&mut self, source: &str, output: &Output) -> Result<()> {
        if self.show_source {
            writeln!(self.writer, "==> {} <==", source)?;
        }
        write!(self.writer, "{}", output.report())?;
        if self.show_source {
            writeln!(self.writer)?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
