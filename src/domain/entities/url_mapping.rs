//! URL mapping entity.

use chrono::{DateTime, Utc};

/// A persisted mapping from a short code to its long URL.
///
/// Mappings live until explicitly deleted; there is no expiry.
#[derive(Debug, Clone)]
pub struct UrlMapping {
    pub id: i64,
    pub short_code: String,
    pub long_url: String,
    pub created_at: DateTime<Utc>,
}

impl UrlMapping {
    /// Creates a new UrlMapping instance.
    pub fn new(id: i64, short_code: String, long_url: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            short_code,
            long_url,
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mapping_creation() {
        let now = Utc::now();
        let mapping = UrlMapping::new(
            1,
            "abc123".to_string(),
            "https://example.com".to_string(),
            now,
        );

        assert_eq!(mapping.id, 1);
        assert_eq!(mapping.short_code, "abc123");
        assert_eq!(mapping.long_url, "https://example.com");
        assert_eq!(mapping.created_at, now);
    }
}
