//! Shared application state injected into every handler.

use std::sync::Arc;
use std::time::Duration;

use crate::application::services::DynLinkService;

#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<DynLinkService>,
    /// Deadline attached to each request's [`crate::domain::context::OperationContext`].
    pub query_timeout: Option<Duration>,
}

impl AppState {
    pub fn new(link_service: Arc<DynLinkService>, query_timeout: Option<Duration>) -> Self {
        Self {
            link_service,
            query_timeout,
        }
    }
}
