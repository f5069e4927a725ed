//! Separator glyph lookup with O(1) membership
//!
//! The set is fixed for the whole process. Characters in it are treated as
//! separators rather than content by both the palindrome test and the
//! display refinement.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Glyphs treated as separators, not content.
///
/// Hyphen-minus, tabs and line breaks are not in the set; they count as
/// ordinary characters.
pub const PUNCTUATION_CHARS: &[char] = &[
    ' ', '.', ',', '،', '、', '\'', '"', '‘', '’', '“', '”', ':', ';', '!', '?', '‹', '›', '«',
    '»', '‐', '_', '‒', '–', '—', '―', '\\', '/', '⁄', '|', '#', '~', '@',
];

static PUNCTUATION: LazyLock<PunctuationTable> =
    LazyLock::new(|| PunctuationTable::new(PUNCTUATION_CHARS.iter().copied()));

/// Fast separator lookup table
#[derive(Debug, Clone)]
pub struct PunctuationTable {
    /// ASCII lookup table for chars 0-127
    ascii_table: [bool; 128],
    /// Non-ASCII separators (quotes, dashes, CJK/Arabic commas)
    non_ascii: HashSet<char>,
}

impl PunctuationTable {
    /// Create from a list of separator characters
    pub fn new(chars: impl IntoIterator<Item = char>) -> Self {
        let mut ascii_table = [false; 128];
        let mut non_ascii = HashSet::new();

        for ch in chars {
            if ch.is_ascii() {
                ascii_table[ch as usize] = true;
            } else {
                non_ascii.insert(ch);
            }
        }

        Self {
            ascii_table,
            non_ascii,
        }
    }

    /// The process-wide table built from [`PUNCTUATION_CHARS`]
    pub fn global() -> &'static PunctuationTable {
        &PUNCTUATION
    }

    /// Check if character is a separator - hot path
    #[inline]
    pub fn contains(&self, ch: char) -> bool {
        if ch.is_ascii() {
            self.ascii_table[ch as usize]
        } else {
            self.non_ascii.contains(&ch)
        }
    }

    /// Number of distinct separators in the table
    pub fn len(&self) -> usize {
        self.ascii_table.iter().filter(|&&set| set).count() + self.non_ascii.len()
    }

    /// Whether the table has no separators at all
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Check a character against the process-wide separator set
#[inline]
pub fn is_punctuation(ch: char) -> bool {
    PUNCTUATION.contains(ch)
}
