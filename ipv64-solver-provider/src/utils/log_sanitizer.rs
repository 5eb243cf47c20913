//! Log sanitization utilities
//!
//! Keeps bearer tokens out of the logs entirely and bounds how much of a
//! response body a debug log may carry.

/// Maximum number of bytes of a response body to include in debug logs.
const BODY_LOG_LIMIT: usize = 256;

/// Truncate a response body for logging.
///
/// Bodies within the limit pass through unchanged; longer ones are cut at a
/// char boundary and suffixed with the total size.
pub(crate) fn truncate_for_log(s: &str) -> String {
    if s.len() <= BODY_LOG_LIMIT {
        return s.to_string();
    }
    let mut end = BODY_LOG_LIMIT;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}... [truncated, total {} bytes]", &s[..end], s.len())
}

/// Mask a secret so only its last four characters remain visible.
///
/// Short secrets are masked completely.
pub(crate) fn mask_secret(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    if chars.len() <= 4 {
        return "****".to_string();
    }
    let suffix: String = chars[chars.len() - 4..].iter().collect();
    format!("****{suffix}")
}
