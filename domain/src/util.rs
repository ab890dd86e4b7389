//! Shared utility functions.

/// Truncate a string to approximately `max_bytes`, appending "..." when
/// anything was cut. Never splits a UTF-8 character boundary.
pub fn truncate_str(s: &str, max_bytes: usize) -> String {
    if s.len() <= max_bytes {
        return s.to_string();
    }
    let mut end = max_bytes;
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &s[..end])
}
