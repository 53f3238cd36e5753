//! PostgreSQL implementation of the URL repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use std::future::Future;
use std::sync::Arc;
use tracing::{debug, error};

use crate::domain::context::OperationContext;
use crate::domain::entities::UrlMapping;
use crate::domain::repositories::{StorageError, UrlRepository};
use crate::utils::db_error::is_unique_violation_on_code;

#[derive(Debug, FromRow)]
struct UrlRow {
    id: i64,
    short_url: String,
    long_url: String,
    created_at: DateTime<Utc>,
}

impl From<UrlRow> for UrlMapping {
    fn from(row: UrlRow) -> Self {
        UrlMapping::new(row.id, row.short_url, row.long_url, row.created_at)
    }
}

/// PostgreSQL repository for URL mappings.
///
/// Uses SQLx prepared statements for SQL injection protection. The
/// `urls_short_url_key` constraint backs the uniqueness guarantee; a violation
/// is reported as [`StorageError::Conflict`].
pub struct PgUrlRepository {
    pool: Arc<PgPool>,
}

impl PgUrlRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    /// Fetches the full mapping row for a short code.
    pub async fn find_mapping(
        &self,
        ctx: &OperationContext,
        short_code: &str,
    ) -> Result<Option<UrlMapping>, StorageError> {
        let row = with_deadline(
            ctx,
            sqlx::query_as::<_, UrlRow>(
                "SELECT id, short_url, long_url, created_at FROM urls WHERE short_url = $1",
            )
            .bind(short_code)
            .fetch_optional(self.pool.as_ref()),
        )
        .await?;

        Ok(row.map(UrlMapping::from))
    }

    /// Counts stored mappings.
    pub async fn count(&self, ctx: &OperationContext) -> Result<i64, StorageError> {
        with_deadline(
            ctx,
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM urls").fetch_one(self.pool.as_ref()),
        )
        .await
    }
}

/// Runs a query, bounded by the context's query timeout when one is set.
async fn with_deadline<T, F>(ctx: &OperationContext, query: F) -> Result<T, StorageError>
where
    F: Future<Output = Result<T, sqlx::Error>>,
{
    match ctx.query_timeout() {
        Some(limit) => tokio::time::timeout(limit, query)
            .await
            .map_err(|_| StorageError::Timeout(limit))?
            .map_err(StorageError::from),
        None => query.await.map_err(StorageError::from),
    }
}

#[async_trait]
impl UrlRepository for PgUrlRepository {
    async fn save_url(
        &self,
        ctx: &OperationContext,
        long_url: &str,
        short_code: &str,
    ) -> Result<(), StorageError> {
        debug!(
            request_id = ctx.request_id(),
            short_code, long_url, "Saving URL to database"
        );

        // No query deadline on the insert: a timeout can fire after the row has
        // committed. Pool acquisition is still bounded by DB_CONNECT_TIMEOUT.
        let result = sqlx::query("INSERT INTO urls (long_url, short_url) VALUES ($1, $2)")
            .bind(long_url)
            .bind(short_code)
            .execute(self.pool.as_ref())
            .await
            .map_err(StorageError::from);

        match result {
            Ok(_) => Ok(()),
            Err(StorageError::Database(e)) if is_unique_violation_on_code(&e) => {
                Err(StorageError::Conflict(short_code.to_string()))
            }
            Err(e) => {
                error!(request_id = ctx.request_id(), error = %e, "Failed to save URL");
                Err(e)
            }
        }
    }

    async fn get_url(
        &self,
        ctx: &OperationContext,
        short_code: &str,
    ) -> Result<Option<String>, StorageError> {
        let long_url = with_deadline(
            ctx,
            sqlx::query_scalar::<_, String>("SELECT long_url FROM urls WHERE short_url = $1")
                .bind(short_code)
                .fetch_optional(self.pool.as_ref()),
        )
        .await
        .inspect_err(|e| {
            error!(request_id = ctx.request_id(), error = %e, "Failed to get URL");
        })?;

        debug!(
            request_id = ctx.request_id(),
            short_code,
            found = long_url.is_some(),
            "Looked up URL"
        );

        Ok(long_url)
    }

    async fn delete_url(
        &self,
        ctx: &OperationContext,
        short_code: &str,
    ) -> Result<bool, StorageError> {
        let result = with_deadline(
            ctx,
            sqlx::query("DELETE FROM urls WHERE short_url = $1")
                .bind(short_code)
                .execute(self.pool.as_ref()),
        )
        .await
        .inspect_err(|e| {
            error!(request_id = ctx.request_id(), error = %e, "Failed to delete URL");
        })?;

        Ok(result.rows_affected() > 0)
    }

    async fn ping(&self, ctx: &OperationContext) -> Result<(), StorageError> {
        with_deadline(
            ctx,
            sqlx::query("SELECT 1").execute(self.pool.as_ref()),
        )
        .await?;

        Ok(())
    }
}
