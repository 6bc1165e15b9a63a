const MAX_ERROR_LENGTH: usize = 2_000;

pub fn truncate_error(error: &str) -> String {
    truncate_chars(error, MAX_ERROR_LENGTH)
}

/// Cut `text` to at most `max_chars` characters, marking the cut with "...".
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}
