//! Storage contract for short code to long URL mappings.

use crate::domain::context::OperationContext;
use async_trait::async_trait;
use std::time::Duration;

/// Errors reported by a [`UrlRepository`] implementation.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The short code is already mapped. Raised by the storage-level
    /// uniqueness constraint when two writers race for the same code.
    #[error("short code `{0}` is already mapped")]
    Conflict(String),

    #[error("storage operation timed out after {0:?}")]
    Timeout(Duration),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Repository interface for URL mappings.
///
/// Implementations must be safe for concurrent use; callers share a single
/// instance across all in-flight requests and apply no locking of their own.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUrlRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::InMemoryUrlRepository`] - In-process map
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Stores a new mapping.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Conflict`] if `short_code` is already mapped.
    async fn save_url(
        &self,
        ctx: &OperationContext,
        long_url: &str,
        short_code: &str,
    ) -> Result<(), StorageError>;

    /// Looks up the long URL for a short code.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(url))` if found
    /// - `Ok(None)` if not found
    ///
    /// A transport or query failure is always an `Err`, never `Ok(None)`.
    async fn get_url(
        &self,
        ctx: &OperationContext,
        short_code: &str,
    ) -> Result<Option<String>, StorageError>;

    /// Deletes a mapping.
    ///
    /// Returns `Ok(true)` if a mapping was removed, `Ok(false)` if none existed.
    async fn delete_url(&self, ctx: &OperationContext, short_code: &str)
    -> Result<bool, StorageError>;

    /// Checks that the backing store is reachable.
    async fn ping(&self, ctx: &OperationContext) -> Result<(), StorageError>;
}
