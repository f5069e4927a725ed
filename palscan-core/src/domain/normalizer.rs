//! Punctuation normalization
//!
//! Two views of a candidate string: a fully stripped form used only for the
//! palindrome test, and a collapsed form used for display. Both preserve case.

use super::punctuation::is_punctuation;

/// Remove every separator character, leaving the content glyphs contiguous
pub fn strip_punctuation(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    strip_punctuation_into(text, &mut result);
    result
}

/// Strip separators into a supplied buffer so the scan loop can reuse it
pub fn strip_punctuation_into(text: &str, buffer: &mut String) {
    buffer.clear();
    buffer.extend(text.chars().filter(|&ch| !is_punctuation(ch)));
}

/// Drop leading and trailing separators and collapse each interior run of
/// separators into a single space.
///
/// Empty and all-separator inputs yield an empty string.
pub fn collapse_and_trim(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut pending_space = false;

    for ch in text.chars() {
        if is_punctuation(ch) {
            // Leading separators never open a gap
            pending_space = !result.is_empty();
        } else {
            if pending_space {
                result.push(' ');
                pending_space = false;
            }
            result.push(ch);
        }
    }

    // A trailing run leaves `pending_space` set and is simply dropped
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_removes_all_separators() {
        assert_eq!(
            strip_punctuation("a man, a plan, a canal: panama"),
            "amanaplanacanalpanama"
        );
        assert_eq!(strip_punctuation("«¿qué?»"), "¿qué");
        assert_eq!(strip_punctuation("   "), "");
        assert_eq!(strip_punctuation(""), "");
    }

    #[test]
    fn test_strip_preserves_case() {
        assert_eq!(strip_punctuation("No 'X' In Nixon"), "NoXInNixon");
    }

    #[test]
    fn test_strip_into_reuses_buffer() {
        let mut buffer = String::from("stale contents");
        strip_punctuation_into("a.b.c", &mut buffer);
        assert_eq!(buffer, "abc");

        strip_punctuation_into("", &mut buffer);
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_collapse_interior_runs() {
        assert_eq!(
            collapse_and_trim("a man, a plan, a canal: panama"),
            "a man a plan a canal panama"
        );
        assert_eq!(collapse_and_trim("was it a car — or a cat"), "was it a car or a cat");
        assert_eq!(collapse_and_trim("x@@@y"), "x y");
    }

    #[test]
    fn test_collapse_trims_edges() {
        assert_eq!(collapse_and_trim(", level."), "level");
        assert_eq!(collapse_and_trim("“noon”"), "noon");
        assert_eq!(collapse_and_trim("  a  b  "), "a b");
    }

    #[test]
    fn test_collapse_all_punctuation_is_empty() {
        assert_eq!(collapse_and_trim(""), "");
        assert_eq!(collapse_and_trim(" "), "");
        assert_eq!(collapse_and_trim(",.;:!?"), "");
        assert_eq!(collapse_and_trim("—«»—"), "");
    }

    #[test]
    fn test_collapse_keeps_content_glyphs() {
        // Hyphen-minus and newlines are not separators
        assert_eq!(collapse_and_trim("re-er"), "re-er");
        assert_eq!(collapse_and_trim("a\nb"), "a\nb");
    }
}
