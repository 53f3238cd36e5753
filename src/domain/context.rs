//! Per-operation context passed from the HTTP boundary down to storage.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

static NEXT_REQUEST_ID: AtomicU64 = AtomicU64::new(1);

/// Opaque request-scoped context.
///
/// The core never inspects the deadline itself; it only hands the context to
/// [`crate::domain::repositories::UrlRepository`] calls so storage can bound
/// query time and tag its logs with the request id.
#[derive(Debug, Clone)]
pub struct OperationContext {
    request_id: String,
    query_timeout: Option<Duration>,
}

impl OperationContext {
    /// Creates a context with the given request id.
    pub fn new(request_id: impl Into<String>) -> Self {
        Self {
            request_id: request_id.into(),
            query_timeout: None,
        }
    }

    /// Creates a context with a process-local sequential request id.
    pub fn generated() -> Self {
        let id = NEXT_REQUEST_ID.fetch_add(1, Ordering::Relaxed);
        Self::new(format!("req-{id}"))
    }

    /// Sets the per-query deadline that storage should apply.
    pub fn with_query_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.query_timeout = timeout;
        self
    }

    pub fn request_id(&self) -> &str {
        &self.request_id
    }

    pub fn query_timeout(&self) -> Option<Duration> {
        self.query_timeout
    }
}

impl Default for OperationContext {
    fn default() -> Self {
        Self::generated()
    }
}
