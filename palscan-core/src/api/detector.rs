//! Main palindrome detector implementation

use std::time::Instant;

use crate::api::{Config, DetectionMetadata, Input, Output, Result};
use crate::domain::{Matcher, RefinedMatch, Refiner};

/// Case-insensitive palindrome detector
///
/// Holds only the immutable configuration; every call builds its own
/// accumulator, so one detector can serve many threads.
#[derive(Debug, Clone)]
pub struct PalindromeDetector {
    config: Config,
    matcher: Matcher,
    refiner: Refiner,
}

/// Result of one scan before timing is attached
struct Scan {
    matches: Vec<RefinedMatch>,
    chars_scanned: usize,
    raw_match_count: usize,
}

impl PalindromeDetector {
    /// Create a detector with a validated configuration
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            config,
            matcher: Matcher::new(config.min_length, config.max_window),
            refiner: Refiner::new(config.min_length, config.include_spaces),
        })
    }

    /// Create a detector with the default window and a custom minimum length
    pub fn with_min_length(min_length: usize) -> Result<Self> {
        Self::new(Config::builder().min_length(min_length).build()?)
    }

    /// Get the current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Find every palindrome in `text`, in scan order
    pub fn find_all(&self, text: &str) -> Vec<String> {
        self.find_all_refined(text)
            .into_iter()
            .map(|m| m.text)
            .collect()
    }

    /// Find every palindrome in `text` together with its length
    pub fn find_all_refined(&self, text: &str) -> Vec<RefinedMatch> {
        self.scan(text).matches
    }

    /// Resolve `input`, scan it and report timing alongside the matches
    pub fn detect(&self, input: Input) -> Result<Output> {
        let text = input.into_text()?;

        let start = Instant::now();
        let scan = self.scan(&text);
        let duration = start.elapsed();

        log::info!(
            "found {} palindromes in {} characters ({:?})",
            scan.matches.len(),
            scan.chars_scanned,
            duration
        );

        let match_count = scan.matches.len();
        Ok(Output {
            matches: scan.matches,
            metadata: DetectionMetadata {
                duration,
                chars_scanned: scan.chars_scanned,
                raw_match_count: scan.raw_match_count,
                match_count,
            },
        })
    }

    /// Detect in a string (convenience method)
    pub fn detect_text(&self, text: &str) -> Result<Output> {
        self.detect(Input::from_text(text))
    }

    fn scan(&self, text: &str) -> Scan {
        let lowered = text.to_lowercase();
        let raws = self.matcher.find_all_raw(&lowered);
        let raw_match_count = raws.len();
        let matches = self.refiner.refine_all(raws.iter());

        log::debug!(
            "kept {} of {} raw matches after refinement",
            matches.len(),
            raw_match_count
        );

        Scan {
            matches,
            chars_scanned: lowered.chars().count(),
            raw_match_count,
        }
    }
}

impl Default for PalindromeDetector {
    fn default() -> Self {
        let config = Config::default();
        Self {
            config,
            matcher: Matcher::new(config.min_length, config.max_window),
            refiner: Refiner::new(config.min_length, config.include_spaces),
        }
    }
}
