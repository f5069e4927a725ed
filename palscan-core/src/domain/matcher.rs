//! Palindrome test and sliding window scan
//!
//! The scan visits every start position left to right. At each start it takes
//! a window of up to `max_window` characters and tries its prefixes from the
//! longest down to `min_length`; the first prefix whose stripped form reads
//! the same backwards is recorded and the remaining shorter prefixes are
//! skipped.
//!
//! Prefixes that already occur inside a recorded match are not re-tested.
//! This containment check works on the raw text, so it can also hide a
//! distinct palindrome that happens to be spelled inside an earlier match.

use super::normalizer::strip_punctuation_into;

/// True if `text` equals its own character reversal.
///
/// Comparison is exact per `char`; no case folding or normalization happens
/// here. The empty string is a palindrome.
#[inline]
pub fn is_palindrome(text: &str) -> bool {
    text.chars().eq(text.chars().rev())
}

/// Raw matches recorded during one scan, in discovery order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObservedSet {
    matches: Vec<String>,
}

impl ObservedSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether any recorded match contains `candidate` as a substring
    pub fn contains(&self, candidate: &str) -> bool {
        self.matches.iter().any(|recorded| recorded.contains(candidate))
    }

    /// Record a new raw match
    pub fn record(&mut self, raw: &str) {
        self.matches.push(raw.to_string());
    }

    /// Number of recorded matches
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    /// Whether nothing has been recorded
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Iterate recorded matches in discovery order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.matches.iter().map(String::as_str)
    }

    #[cfg(test)]
    pub(crate) fn as_slice(&self) -> &[String] {
        &self.matches
    }

    /// Consume the set, yielding the raw matches
    pub fn into_vec(self) -> Vec<String> {
        self.matches
    }
}

/// Window scanner over lower-cased text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Matcher {
    min_length: usize,
    max_window: usize,
}

impl Matcher {
    /// Create a scanner with the given prefix bounds (in characters)
    pub fn new(min_length: usize, max_window: usize) -> Self {
        Self {
            min_length,
            max_window,
        }
    }

    /// Shortest prefix length tried
    pub fn min_length(&self) -> usize {
        self.min_length
    }

    /// Longest window taken at each start position
    pub fn max_window(&self) -> usize {
        self.max_window
    }

    /// Try the prefixes of `window` from longest to `min_length`.
    ///
    /// Returns the first prefix that is not already observed and whose
    /// stripped form is a palindrome, after recording it in `observed`.
    pub fn scan_window<'a>(
        &self,
        window: &'a str,
        observed: &mut ObservedSet,
    ) -> Option<&'a str> {
        let ends: Vec<usize> = window
            .char_indices()
            .map(|(offset, ch)| offset + ch.len_utf8())
            .collect();
        if ends.len() < self.min_length {
            return None;
        }

        let mut stripped = String::with_capacity(window.len());
        for len in (self.min_length.max(1)..=ends.len()).rev() {
            let candidate = &window[..ends[len - 1]];
            if observed.contains(candidate) {
                continue;
            }

            strip_punctuation_into(candidate, &mut stripped);
            if is_palindrome(&stripped) {
                log::trace!("recorded raw match {candidate:?}");
                observed.record(candidate);
                return Some(candidate);
            }
        }

        None
    }

    /// Scan every start position of `text` and collect the raw matches.
    ///
    /// Text shorter than `min_length` characters yields an empty set.
    pub fn find_all_raw(&self, text: &str) -> ObservedSet {
        let mut observed = ObservedSet::new();

        let mut starts: Vec<usize> = text.char_indices().map(|(offset, _)| offset).collect();
        let char_count = starts.len();
        starts.push(text.len());

        if char_count < self.min_length {
            return observed;
        }

        for start in 0..=(char_count - self.min_length) {
            let end = start + (char_count - start).min(self.max_window);
            let window = &text[starts[start]..starts[end]];
            self.scan_window(window, &mut observed);
        }

        log::debug!(
            "scanned {} characters, recorded {} raw matches",
            char_count,
            observed.len()
        );
        observed
    }
}
