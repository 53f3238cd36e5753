//! Business logic services for the application layer.

pub mod link_service;
pub mod uniqueness;

pub use link_service::{DEFAULT_MAX_ATTEMPTS, DynLinkService, LinkService, LinkServiceSettings};
pub use uniqueness::UniquenessValidator;
