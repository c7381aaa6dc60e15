//! Shared text and URL normalization helpers.

/// Trim an optional string and drop empty values.
///
/// # Returns
/// `None` when the input is missing or whitespace-only; otherwise the trimmed
/// string.
pub fn normalize_optional_nonempty(value: Option<String>) -> Option<String> {
    value.and_then(|raw| {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Trim whitespace and every trailing `/` from a base URL.
pub fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

/// Return `true` when `id` looks like a snowflake: at least
/// [`SNOWFLAKE_MIN_DIGITS`](crate::constants::SNOWFLAKE_MIN_DIGITS) ASCII digits
/// and nothing else.
pub fn is_snowflake(id: &str) -> bool {
    id.len() >= crate::constants::SNOWFLAKE_MIN_DIGITS && id.bytes().all(|b| b.is_ascii_digit())
}
