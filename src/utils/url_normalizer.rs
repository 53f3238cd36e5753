//! Long URL sanitization.
//!
//! Ensures every stored URL carries a protocol scheme so redirects produce an
//! absolute `Location`.

/// Scheme prepended to URLs that lack one.
pub const DEFAULT_SCHEME: &str = "http://";

/// Errors that can occur during URL sanitization.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum UrlSanitizationError {
    #[error("URL is required")]
    Empty,
}

/// Sanitizes a long URL before it is stored.
///
/// # Rules
///
/// 1. **Whitespace**: Leading and trailing whitespace is trimmed
/// 2. **Empty input**: Rejected
/// 3. **Scheme**: `http://` is prepended unless the URL already starts with
///    `http://` or `https://` (case-insensitive)
///
/// Everything else, including host case and query strings, is preserved.
///
/// # Errors
///
/// Returns [`UrlSanitizationError::Empty`] for empty or whitespace-only input.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(sanitize_url("example.com").unwrap(), "http://example.com");
/// assert_eq!(sanitize_url("https://example.com").unwrap(), "https://example.com");
/// ```
pub fn sanitize_url(input: &str) -> Result<String, UrlSanitizationError> {
    let trimmed = input.trim();

    if trimmed.is_empty() {
        return Err(UrlSanitizationError::Empty);
    }

    if has_http_scheme(trimmed) {
        Ok(trimmed.to_string())
    } else {
        Ok(format!("{DEFAULT_SCHEME}{trimmed}"))
    }
}

fn has_http_scheme(url: &str) -> bool {
    ["http://", "https://"].iter().any(|scheme| {
        url.get(..scheme.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme))
    })
}
