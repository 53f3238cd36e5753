//! Domain layer containing business entities and contracts.
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Storage trait definitions
//! - [`generator`] - Short code generator trait
//! - [`context`] - Request-scoped operation context
//!
//! The domain layer has no dependencies on the presentation layer. Traits are
//! implemented by the infrastructure and utility modules.

pub mod context;
pub mod entities;
pub mod generator;
pub mod repositories;
