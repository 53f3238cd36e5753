//! Core domain entities.
//!
//! - [`ShortCode`] - Opaque token standing in for a long URL
//! - [`UrlMapping`] - A persisted short code to long URL mapping

pub mod short_code;
pub mod url_mapping;

pub use short_code::ShortCode;
pub use url_mapping::UrlMapping;
