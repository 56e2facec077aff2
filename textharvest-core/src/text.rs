//! Text normalization
//!
//! Extracted PDF text arrives with arbitrary line breaks, tabs and runs of
//! spaces. Everything downstream expects a single line with single spaces,
//! capped to a fixed number of characters.

/// Default cap on the number of characters kept per document.
pub const DEFAULT_MAX_CHARS: usize = 6000;

/// Unicode whitespace plus the ASCII information separators U+001C..U+001F,
/// which some PDF producers emit between words and lines.
pub fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Collapse every separator run to a single space and trim both ends.
pub fn normalize_whitespace(raw: &str) -> String {
    raw.split(is_separator)
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Keep the first `max_chars` characters of `text`.
///
/// Counts Unicode scalar values, so multi-byte text is never cut inside a
/// character.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => &text[..byte_index],
        None => text,
    }
}

/// Normalize then truncate.
pub fn normalize_and_truncate(raw: &str, max_chars: usize) -> String {
    let normalized = normalize_whitespace(raw);
    truncate_chars(&normalized, max_chars).to_string()
}
