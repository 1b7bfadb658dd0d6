//! Derived display text (thread titles and descriptions).

/// Marker appended when text is cut short.
pub const ELLIPSIS: &str = "...";

/// Maximum characters kept when a title is seeded from the first message.
pub const TITLE_MAX_CHARS: usize = 30;

/// Maximum characters kept when a description is taken from a bot reply.
pub const DESCRIPTION_MAX_CHARS: usize = 50;

/// Keeps the first `max_chars` characters of `text`, appending [`ELLIPSIS`]
/// only when something was cut.
///
/// Counts Unicode scalar values, so multi-byte characters are never split.
pub fn truncate_with_marker(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}{ELLIPSIS}", &text[..cut]),
        None => text.to_string(),
    }
}

/// Title derived from the first message sent in a thread.
pub fn derive_title(message: &str) -> String {
    truncate_with_marker(message, TITLE_MAX_CHARS)
}

/// Thread description derived from the latest bot reply.
pub fn derive_description(reply: &str) -> String {
    truncate_with_marker(reply, DESCRIPTION_MAX_CHARS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_is_untouched() {
        assert_eq!(derive_title("Hello world"), "Hello world");
    }

    #[test]
    fn test_exact_limit_has_no_marker() {
        let text = "a".repeat(TITLE_MAX_CHARS);
        assert_eq!(derive_title(&text), text);
    }

    #[test]
    fn test_one_over_limit_gets_marker() {
        let text = "a".repeat(TITLE_MAX_CHARS + 1);
        let title = derive_title(&text);
        assert_eq!(title, format!("{}...", "a".repeat(TITLE_MAX_CHARS)));
    }

    #[test]
    fn test_truncation_law_for_titles_and_descriptions() {
        for len in 0..120 {
            let text: String = "x".repeat(len);

            let title = derive_title(&text);
            let title_cut = len > TITLE_MAX_CHARS;
            assert_eq!(title.ends_with(ELLIPSIS), title_cut, "title len {len}");
            assert_eq!(
                title.trim_end_matches(ELLIPSIS).chars().count(),
                len.min(TITLE_MAX_CHARS)
            );

            let description = derive_description(&text);
            let description_cut = len > DESCRIPTION_MAX_CHARS;
            assert_eq!(
                description.ends_with(ELLIPSIS),
                description_cut,
                "description len {len}"
            );
            assert_eq!(
                description.trim_end_matches(ELLIPSIS).chars().count(),
                len.min(DESCRIPTION_MAX_CHARS)
            );
        }
    }

    #[test]
    fn test_multibyte_characters_are_not_split() {
        let text = "é".repeat(40);
        let title = derive_title(&text);
        assert_eq!(title, format!("{}...", "é".repeat(30)));
    }
}
