//! Short code value type.

use serde::Serialize;
use std::fmt;

/// Characters allowed in URL-safe base64 output, padding included.
const URL_SAFE_ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_=";

/// Compact token substituted for a long URL.
///
/// A `ShortCode` is opaque: it is not guaranteed unique when produced by a
/// generator. Uniqueness is established by
/// [`crate::application::services::LinkService`] before the code is stored.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ShortCode(String);

impl ShortCode {
    /// Wraps a raw code without checking its alphabet.
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns true if every character belongs to the URL-safe base64 alphabet.
    pub fn is_url_safe(&self) -> bool {
        !self.0.is_empty() && self.0.chars().all(|c| URL_SAFE_ALPHABET.contains(c))
    }
}

impl fmt::Display for ShortCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ShortCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ShortCode {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_inner() {
        let code = ShortCode::new("abc123");
        assert_eq!(code.to_string(), "abc123");
        assert_eq!(code.as_str(), "abc123");
        assert_eq!(code.len(), 6);
    }

    #[test]
    fn test_url_safe_alphabet() {
        assert!(ShortCode::new("aZ09-_==").is_url_safe());
        assert!(!ShortCode::new("abc/123").is_url_safe());
        assert!(!ShortCode::new("abc+123").is_url_safe());
        assert!(!ShortCode::new("").is_url_safe());
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let json = serde_json::to_string(&ShortCode::new("xyz789")).unwrap();
        assert_eq!(json, "\"xyz789\"");
    }
}
