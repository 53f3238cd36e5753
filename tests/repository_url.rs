use shortener::domain::context::OperationContext;
use shortener::domain::repositories::{StorageError, UrlRepository};
use shortener::infrastructure::persistence::PgUrlRepository;
use sqlx::PgPool;
use std::sync::Arc;
use std::time::Duration;

fn ctx() -> OperationContext {
    OperationContext::new("test").with_query_timeout(Some(Duration::from_secs(5)))
}

#[sqlx::test]
#[ignore = "requires a running PostgreSQL instance (DATABASE_URL)"]
async fn test_save_and_get_url(pool: PgPool) {
    let repo = PgUrlRepository::new(Arc::new(pool));

    repo.save_url(&ctx(), "https://example.com", "abc123")
        .await
        .unwrap();

    let url = repo.get_url(&ctx(), "abc123").await.unwrap();
    assert_eq!(url.as_deref(), Some("https://example.com"));
}

#[sqlx::test]
#[ignore = "requires a running PostgreSQL instance (DATABASE_URL)"]
async fn test_get_missing_url(pool: PgPool) {
    let repo = PgUrlRepository::new(Arc::new(pool));

    let url = repo.get_url(&ctx(), "missing").await.unwrap();
    assert!(url.is_none());
}

#[sqlx::test]
#[ignore = "requires a running PostgreSQL instance (DATABASE_URL)"]
async fn test_duplicate_code_is_conflict(pool: PgPool) {
    let repo = PgUrlRepository::new(Arc::new(pool));

    repo.save_url(&ctx(), "https://first.com", "dup")
        .await
        .unwrap();
    let err = repo
        .save_url(&ctx(), "https://second.com", "dup")
        .await
        .unwrap_err();

    assert!(matches!(err, StorageError::Conflict(code) if code == "dup"));

    let url = repo.get_url(&ctx(), "dup").await.unwrap();
    assert_eq!(url.as_deref(), Some("https://first.com"));
}

#[sqlx::test]
#[ignore = "requires a running PostgreSQL instance (DATABASE_URL)"]
async fn test_find_mapping_and_count(pool: PgPool) {
    let repo = PgUrlRepository::new(Arc::new(pool));

    repo.save_url(&ctx(), "https://a.com", "a1").await.unwrap();
    repo.save_url(&ctx(), "https://b.com", "b1").await.unwrap();

    let mapping = repo.find_mapping(&ctx(), "b1").await.unwrap().unwrap();
    assert_eq!(mapping.short_code.as_str(), "b1");
    assert_eq!(mapping.long_url, "https://b.com");

    assert_eq!(repo.count(&ctx()).await.unwrap(), 2);
}

#[sqlx::test]
#[ignore = "requires a running PostgreSQL instance (DATABASE_URL)"]
async fn test_delete_url(pool: PgPool) {
    let repo = PgUrlRepository::new(Arc::new(pool));

    repo.save_url(&ctx(), "https://example.com", "gone")
        .await
        .unwrap();

    assert!(repo.delete_url(&ctx(), "gone").await.unwrap());
    assert!(!repo.delete_url(&ctx(), "gone").await.unwrap());
    assert!(repo.get_url(&ctx(), "gone").await.unwrap().is_none());
}

#[sqlx::test]
#[ignore = "requires a running PostgreSQL instance (DATABASE_URL)"]
async fn test_ping(pool: PgPool) {
    let repo = PgUrlRepository::new(Arc::new(pool));

    repo.ping(&ctx()).await.unwrap();
}

#[sqlx::test]
#[ignore = "requires a running PostgreSQL instance (DATABASE_URL)"]
async fn test_save_is_not_cut_short_by_query_deadline(pool: PgPool) {
    let repo = PgUrlRepository::new(Arc::new(pool));
    let tight = OperationContext::new("test").with_query_timeout(Some(Duration::from_nanos(1)));

    repo.save_url(&tight, "https://example.com", "tight1")
        .await
        .unwrap();

    let url = repo.get_url(&ctx(), "tight1").await.unwrap();
    assert_eq!(url.as_deref(), Some("https://example.com"));
}
