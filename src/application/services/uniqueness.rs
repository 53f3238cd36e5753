//! Uniqueness check for candidate short codes.

use std::sync::Arc;

use crate::domain::context::OperationContext;
use crate::domain::repositories::{StorageError, UrlRepository};
use tracing::debug;

/// Checks candidate codes against storage.
///
/// A failed lookup is returned as an error rather than read as "absent", so a
/// transient storage fault can never let a taken code through.
pub struct UniquenessValidator<R: UrlRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: UrlRepository + ?Sized> UniquenessValidator<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Returns `true` if no mapping exists for `code`.
    ///
    /// # Errors
    ///
    /// Propagates any [`StorageError`] from the lookup.
    pub async fn is_unique(
        &self,
        ctx: &OperationContext,
        code: &str,
    ) -> Result<bool, StorageError> {
        let existing = self.repository.get_url(ctx, code).await?;

        debug!(
            request_id = ctx.request_id(),
            short_code = code,
            taken = existing.is_some(),
            "Checked code uniqueness"
        );

        Ok(existing.is_none())
    }
}

impl<R: UrlRepository + ?Sized> Clone for UniquenessValidator<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockUrlRepository;

    #[tokio::test]
    async fn test_absent_code_is_unique() {
        let mut repo = MockUrlRepository::new();
        repo.expect_get_url()
            .withf(|_, code| code == "abc123")
            .times(1)
            .returning(|_, _| Ok(None));

        let validator = UniquenessValidator::new(Arc::new(repo));

        let unique = validator
            .is_unique(&OperationContext::new("t"), "abc123")
            .await
            .unwrap();

        assert!(unique);
    }

    #[tokio::test]
    async fn test_mapped_code_is_taken() {
        let mut repo = MockUrlRepository::new();
        repo.expect_get_url()
            .times(1)
            .returning(|_, _| Ok(Some("https://example.com".to_string())));

        let validator = UniquenessValidator::new(Arc::new(repo));

        let unique = validator
            .is_unique(&OperationContext::new("t"), "abc123")
            .await
            .unwrap();

        assert!(!unique);
    }

    #[tokio::test]
    async fn test_lookup_failure_is_not_treated_as_unique() {
        let mut repo = MockUrlRepository::new();
        repo.expect_get_url()
            .times(1)
            .returning(|_, _| Err(StorageError::Database(sqlx::Error::PoolTimedOut)));

        let validator = UniquenessValidator::new(Arc::new(repo));

        let result = validator
            .is_unique(&OperationContext::new("t"), "abc123")
            .await;

        assert!(matches!(result, Err(StorageError::Database(_))));
    }
}
