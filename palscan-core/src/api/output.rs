//! Output types for the detector

use std::fmt::Write as _;
use std::time::Duration;

use serde::Serialize;

use crate::domain::RefinedMatch;

/// Width of the rule printed under the report header
const REPORT_RULE_WIDTH: usize = 92;

/// Detection output with metadata
#[derive(Debug, Clone, Serialize)]
pub struct Output {
    /// Palindromes in scan order
    pub matches: Vec<RefinedMatch>,
    /// Detection metadata
    pub metadata: DetectionMetadata,
}

/// Metadata about one detection run
#[derive(Debug, Clone, Serialize)]
pub struct DetectionMetadata {
    /// Time spent inside the scan and refinement
    #[serde(serialize_with = "serialize_millis", rename = "elapsed_ms")]
    pub duration: Duration,
    /// Characters scanned after lower-casing
    pub chars_scanned: usize,
    /// Raw matches recorded before refinement
    pub raw_match_count: usize,
    /// Matches kept after refinement
    pub match_count: usize,
}

fn serialize_millis<S: serde::Serializer>(duration: &Duration, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_f64(duration.as_micros() as f64 / 1000.0)
}

impl Output {
    /// The matched strings without length metadata
    pub fn texts(&self) -> Vec<&str> {
        self.matches.iter().map(|m| m.text.as_str()).collect()
    }

    /// Number of palindromes found
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    /// Whether nothing was found
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Render the classic summary: count and timing, a rule, then one line
    /// per palindrome with its length.
    pub fn report(&self) -> String {
        let mut report = format!(
            "Number of Palindromes: {}      (Computation time: {} ms)\n{}\n",
            self.matches.len(),
            self.metadata.duration.as_millis(),
            "-".repeat(REPORT_RULE_WIDTH)
        );

        for m in &self.matches {
            // Writing into a String cannot fail
            let _ = writeln!(report, "{} ({})", m.text, m.length);
        }

        report
    }
}
