//! Post-filter turning raw matches into display-ready results

use serde::{Deserialize, Serialize};

use super::matcher::is_palindrome;
use super::normalizer::collapse_and_trim;

/// A palindrome as reported to callers
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RefinedMatch {
    /// Trimmed text with interior separator runs collapsed to one space
    pub text: String,
    /// Length of `text` in characters
    pub length: usize,
}

impl RefinedMatch {
    /// Pair a refined string with its character count
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let length = text.chars().count();
        Self { text, length }
    }
}

/// Trim and collapse a raw match
pub fn refine_one(raw: &str) -> RefinedMatch {
    RefinedMatch::new(collapse_and_trim(raw))
}

/// Length and space-policy filter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Refiner {
    min_length: usize,
    include_spaces: bool,
}

impl Refiner {
    /// Create a refiner
    pub fn new(min_length: usize, include_spaces: bool) -> Self {
        Self {
            min_length,
            include_spaces,
        }
    }

    /// Whether a refined match survives the filter.
    ///
    /// When spaces count, the collapsed string itself must read the same
    /// backwards, so a raw match that only held up with its separators
    /// removed can be dropped here.
    pub fn accepts(&self, refined: &RefinedMatch) -> bool {
        refined.length >= self.min_length && (!self.include_spaces || is_palindrome(&refined.text))
    }

    /// Refine raw matches in order, keeping only accepted ones
    pub fn refine_all<I, S>(&self, raws: I) -> Vec<RefinedMatch>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        raws.into_iter()
            .map(|raw| refine_one(raw.as_ref()))
            .filter(|refined| self.accepts(refined))
            .collect()
    }
}
