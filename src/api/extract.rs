//! Request extractors shared by handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use std::convert::Infallible;

use crate::domain::context::OperationContext;
use crate::state::AppState;

/// Header carrying a caller-supplied request id.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Longest caller-supplied request id that is accepted verbatim.
const MAX_REQUEST_ID_LEN: usize = 128;

/// Builds an [`OperationContext`] for the current request.
///
/// Uses `X-Request-Id` when present and printable, otherwise assigns a
/// process-local id. The query deadline comes from [`AppState`].
impl FromRequestParts<AppState> for OperationContext {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let supplied = parts
            .headers
            .get(REQUEST_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|id| !id.is_empty() && id.len() <= MAX_REQUEST_ID_LEN);

        let ctx = match supplied {
            Some(id) => OperationContext::new(id),
            None => OperationContext::generated(),
        };

        Ok(ctx.with_query_timeout(state.query_timeout))
    }
}
