//! DTOs for link shortening endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to shorten a single URL.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The original URL. A missing scheme is filled in with `http://`.
    #[validate(length(min = 1, message = "URL is required"))]
    pub url: String,
}

/// Response carrying the fully-qualified short URL.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub short_url: String,
}
