//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations by coordinating the generator,
//! the uniqueness check and storage. Services consume domain traits and
//! provide a clean API for HTTP handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::link_service::LinkService`] - Short link creation, resolution and deletion
//! - [`services::uniqueness::UniquenessValidator`] - Candidate code checks
//!
//! Failures are reported as [`error::ShortenError`].

pub mod error;
pub mod services;

pub use error::ShortenError;
