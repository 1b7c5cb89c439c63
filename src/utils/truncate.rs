//! Truncation Utilities
//!
//! Shortens display text on character boundaries so CJK and Latin summaries
//! are cut by visible length rather than bytes.

use std::borrow::Cow;

const ELLIPSIS: char = '…';

/// Keep at most `max_chars` characters, ending in an ellipsis when cut.
/// Trailing whitespace before the ellipsis is dropped.
pub fn truncate_text(content: &str, max_chars: usize) -> Cow<'_, str> {
    if content.chars().count() <= max_chars {
        return Cow::Borrowed(content);
    }
    if max_chars == 0 {
        return Cow::Borrowed("");
    }

    let keep = max_chars - 1;
    let cut = content
        .char_indices()
        .nth(keep)
        .map(|(idx, _)| idx)
        .unwrap_or(content.len());

    let mut truncated = content[..cut].trim_end().to_string();
    truncated.push(ELLIPSIS);
    Cow::Owned(truncated)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_untouched() {
        assert!(matches!(truncate_text("short", 10), Cow::Borrowed("short")));
        assert_eq!(truncate_text("exactly", 7), "exactly");
    }

    #[test]
    fn test_truncates_with_ellipsis() {
        assert_eq!(truncate_text("hello world", 6), "hello…");
        assert_eq!(truncate_text("hello world", 7), "hello…");
    }

    #[test]
    fn test_respects_char_boundaries() {
        let text = "香港餐廳搜尋應用程式";
        let out = truncate_text(text, 5);
        assert_eq!(out, "香港餐廳…");
        assert_eq!(out.chars().count(), 5);
    }

    #[test]
    fn test_zero_budget() {
        assert_eq!(truncate_text("anything", 0), "");
    }
}
