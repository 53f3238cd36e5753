//! In-memory implementation of the URL repository.

use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

use crate::domain::context::OperationContext;
use crate::domain::repositories::{StorageError, UrlRepository};

/// In-process repository backed by a `DashMap`.
///
/// DashMap shards its locks, so concurrent requests touching different codes
/// do not block each other. Inserts go through the entry API, which makes the
/// uniqueness check and the write a single step.
///
/// Contents are lost on restart. Used by tests and by `STORAGE_BACKEND=memory`.
#[derive(Debug, Default)]
pub struct InMemoryUrlRepository {
    storage: DashMap<String, String>,
}

impl InMemoryUrlRepository {
    pub fn new() -> Self {
        Self {
            storage: DashMap::new(),
        }
    }

    /// Number of stored mappings.
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }
}

#[async_trait]
impl UrlRepository for InMemoryUrlRepository {
    async fn save_url(
        &self,
        _ctx: &OperationContext,
        long_url: &str,
        short_code: &str,
    ) -> Result<(), StorageError> {
        match self.storage.entry(short_code.to_string()) {
            Entry::Occupied(_) => Err(StorageError::Conflict(short_code.to_string())),
            Entry::Vacant(slot) => {
                slot.insert(long_url.to_string());
                Ok(())
            }
        }
    }

    async fn get_url(
        &self,
        _ctx: &OperationContext,
        short_code: &str,
    ) -> Result<Option<String>, StorageError> {
        Ok(self.storage.get(short_code).map(|url| url.value().clone()))
    }

    async fn delete_url(
        &self,
        _ctx: &OperationContext,
        short_code: &str,
    ) -> Result<bool, StorageError> {
        Ok(self.storage.remove(short_code).is_some())
    }

    async fn ping(&self, _ctx: &OperationContext) -> Result<(), StorageError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> OperationContext {
        OperationContext::new("test")
    }

    #[tokio::test]
    async fn test_save_and_get() {
        let repo = InMemoryUrlRepository::new();

        repo.save_url(&ctx(), "https://example.com", "abc123")
            .await
            .unwrap();

        let url = repo.get_url(&ctx(), "abc123").await.unwrap();
        assert_eq!(url.as_deref(), Some("https://example.com"));
        assert_eq!(repo.len(), 1);
    }

    #[tokio::test]
    async fn test_get_nonexistent() {
        let repo = InMemoryUrlRepository::new();

        let url = repo.get_url(&ctx(), "nope").await.unwrap();
        assert!(url.is_none());
    }

    #[tokio::test]
    async fn test_save_conflict_keeps_first_mapping() {
        let repo = InMemoryUrlRepository::new();

        repo.save_url(&ctx(), "https://first.com", "abc123")
            .await
            .unwrap();
        let err = repo
            .save_url(&ctx(), "https://second.com", "abc123")
            .await
            .unwrap_err();

        assert!(matches!(err, StorageError::Conflict(code) if code == "abc123"));
        let url = repo.get_url(&ctx(), "abc123").await.unwrap();
        assert_eq!(url.as_deref(), Some("https://first.com"));
    }

    #[tokio::test]
    async fn test_delete_existing() {
        let repo = InMemoryUrlRepository::new();
        repo.save_url(&ctx(), "https://example.com", "abc123")
            .await
            .unwrap();

        assert!(repo.delete_url(&ctx(), "abc123").await.unwrap());
        assert!(repo.get_url(&ctx(), "abc123").await.unwrap().is_none());
        assert!(repo.is_empty());
    }

    #[tokio::test]
    async fn test_delete_nonexistent() {
        let repo = InMemoryUrlRepository::new();

        assert!(!repo.delete_url(&ctx(), "nope").await.unwrap());
    }

    #[tokio::test]
    async fn test_concurrent_saves_of_same_code() {
        let repo = std::sync::Arc::new(InMemoryUrlRepository::new());

        let handles: Vec<_> = (0..16)
            .map(|i| {
                let repo = repo.clone();
                tokio::spawn(async move {
                    repo.save_url(&OperationContext::new("t"), &format!("https://{i}.com"), "same")
                        .await
                })
            })
            .collect();

        let mut successes = 0;
        for handle in handles {
            if handle.await.unwrap().is_ok() {
                successes += 1;
            }
        }

        assert_eq!(successes, 1);
        assert_eq!(repo.len(), 1);
    }
}
