//! Length-capped excerpts for display and citation.

/// Truncate text to at most `max_chars` characters, appending an ellipsis
/// marker when anything was cut. Operates on characters, not bytes, so
/// multi-byte text never splits mid-character.
pub fn excerpt(text: &str, max_chars: usize) -> String {
    let mut chars = text.char_indices();
    match chars.nth(max_chars) {
        None => text.to_string(),
        Some((byte_index, _)) => format!("{}...", &text[..byte_index]),
    }
}
