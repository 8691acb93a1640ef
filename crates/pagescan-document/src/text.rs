//! Text normalization and truncation policies.
//!
//! All lengths are measured in characters (Unicode scalar values), never bytes.
//! Two truncation policies exist side by side: a hard cut used for short
//! descriptions, and a word-preserving cut used for longer content bodies.

/// Marker appended to display text that was shortened by [`ellipsize`].
pub const ELLIPSIS: &str = "...";

/// Collapses every whitespace run (including newlines) to a single space and trims the ends.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Returns the first `max` characters of `text`, cutting hard at the limit.
pub fn truncate_chars(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((idx, _)) => text[..idx].to_string(),
        None => text.to_string(),
    }
}

/// Truncates `text` to at most `max` characters without splitting a word.
///
/// Text within the limit is returned unchanged. Otherwise the hard-cut prefix
/// is backed off to its last space; a prefix without any space is kept as-is.
/// A `max` of zero disables truncation.
pub fn truncate_at_space(text: &str, max: usize) -> String {
    if max == 0 {
        return text.to_string();
    }
    let Some((idx, _)) = text.char_indices().nth(max) else {
        return text.to_string();
    };
    let prefix = &text[..idx];
    match prefix.rfind(' ') {
        Some(space) => prefix[..space].to_string(),
        None => prefix.to_string(),
    }
}

/// Shortens display text to `max` characters, appending [`ELLIPSIS`] when anything was cut.
pub fn ellipsize(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        format!("{}{ELLIPSIS}", truncate_chars(text, max))
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapse_handles_newlines_and_tabs() {
        assert_eq!(
            collapse_whitespace("  Getting\n\tstarted   with  AI \n"),
            "Getting started with AI"
        );
    }

    #[test]
    fn collapse_of_blank_is_empty() {
        assert_eq!(collapse_whitespace(" \n\t "), "");
    }

    #[test]
    fn hard_truncation_caps_exactly() {
        let text = "x".repeat(250);
        assert_eq!(truncate_chars(&text, 220).chars().count(), 220);
        assert_eq!(truncate_chars("short", 220), "short");
    }

    #[test]
    fn hard_truncation_counts_characters_not_bytes() {
        assert_eq!(truncate_chars("héllo wörld", 4), "héll");
    }

    #[test]
    fn space_truncation_backs_off_to_word_boundary() {
        assert_eq!(truncate_at_space("alpha beta gamma", 12), "alpha beta");
        assert_eq!(truncate_at_space("alpha beta gamma", 11), "alpha beta");
        assert_eq!(truncate_at_space("alpha beta gamma", 10), "alpha");
    }

    #[test]
    fn space_truncation_leaves_short_text() {
        assert_eq!(truncate_at_space("alpha beta", 10), "alpha beta");
        assert_eq!(truncate_at_space("alpha beta", 50), "alpha beta");
    }

    #[test]
    fn space_truncation_without_space_keeps_hard_prefix() {
        assert_eq!(truncate_at_space("abcdefghij", 4), "abcd");
    }

    #[test]
    fn space_truncation_zero_means_unlimited() {
        let text = "word ".repeat(2000);
        assert_eq!(truncate_at_space(&text, 0), text);
    }

    #[test]
    fn space_truncation_never_ends_mid_word() {
        let text = "lorem ipsum dolor sit amet ".repeat(80);
        let cut = truncate_at_space(text.trim(), 1500);
        assert!(cut.chars().count() <= 1500);
        assert!(text.contains(&format!("{cut} ")));
        assert!(!cut.ends_with(' '));
    }

    #[test]
    fn ellipsize_marks_long_text() {
        let long = "a".repeat(120);
        let shown = ellipsize(&long, 100);
        assert_eq!(shown.chars().count(), 103);
        assert!(shown.ends_with(ELLIPSIS));
        assert_eq!(ellipsize("Intro", 100), "Intro");
    }
}
