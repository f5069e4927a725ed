//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use palscan_core::{Output, RefinedMatch};
use serde::Serialize;
use std::io::Write;

/// JSON formatter - outputs one record per source as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    results: Vec<SourceResult>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize)]
pub struct SourceResult {
    /// Where the text came from
    pub source: String,
    /// Detection time in milliseconds
    pub elapsed_ms: f64,
    /// Number of palindromes found
    pub count: usize,
    /// Palindromes in scan order
    pub matches: Vec<RefinedMatch>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            results: Vec::new(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_result(&mut self, source: &str, output: &Output) -> Result<()> {
        self.results.push(SourceResult {
            source: source.to_string(),
            elapsed_ms: output.metadata.duration.as_secs_f64() * 1000.0,
            count: output.len(),
            matches: output.matches.clone(),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.results)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.results)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
