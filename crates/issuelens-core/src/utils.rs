// SPDX-License-Identifier: Apache-2.0

//! Text utility functions.

/// Returns the first `max_chars` characters of `text`.
///
/// Counts Unicode scalar values, not bytes, so a multi-byte character is never
/// split. This is a hard cutoff: no suffix is added and word boundaries are
/// ignored.
///
/// # Examples
///
/// ```
/// use issuelens_core::utils::truncate_chars;
///
/// assert_eq!(truncate_chars("hello", 3), "hel");
/// assert_eq!(truncate_chars("héllo", 2), "hé");
/// assert_eq!(truncate_chars("hi", 10), "hi");
/// ```
#[must_use]
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Truncates text for display, appending "..." when shortened.
///
/// The suffix is included in the max length calculation.
///
/// # Examples
///
/// ```
/// use issuelens_core::utils::truncate;
///
/// assert_eq!(truncate("Hello", 10), "Hello");
///
/// let result = truncate("This is a very long title that exceeds the limit", 20);
/// assert!(result.ends_with("..."));
/// assert_eq!(result.chars().count(), 20);
/// ```
#[must_use]
pub fn truncate(text: &str, max_len: usize) -> String {
    const SUFFIX: &str = "...";
    if text.chars().count() <= max_len {
        text.to_string()
    } else {
        let kept = truncate_chars(text, max_len.saturating_sub(SUFFIX.len()));
        format!("{kept}{SUFFIX}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_chars_exact_length_unchanged() {
        let text = "a".repeat(8000);
        assert_eq!(truncate_chars(&text, 8000).len(), 8000);
    }

    #[test]
    fn test_truncate_chars_cuts_to_limit() {
        let text = "b".repeat(10_000);
        assert_eq!(truncate_chars(&text, 8000).chars().count(), 8000);
    }

    #[test]
    fn test_truncate_chars_multibyte() {
        let text = "日本語のテキスト";
        assert_eq!(truncate_chars(text, 3), "日本語");
    }

    #[test]
    fn test_truncate_chars_zero() {
        assert_eq!(truncate_chars("abc", 0), "");
    }

    #[test]
    fn test_truncate_short_text_unchanged() {
        assert_eq!(truncate("short", 10), "short");
    }

    #[test]
    fn test_truncate_adds_ellipsis() {
        let result = truncate("abcdefghij", 8);
        assert_eq!(result, "abcde...");
    }
}
