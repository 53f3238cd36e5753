//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};

use crate::domain::context::OperationContext;
use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Response
///
/// 302 Found with the stored long URL in `Location`.
///
/// # Errors
///
/// - 404 Not Found if the short code doesn't exist
/// - 500 Internal Server Error if storage fails
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
    ctx: OperationContext,
) -> Result<impl IntoResponse, AppError> {
    let long_url = state.link_service.resolve(&ctx, &code).await?;

    Ok((StatusCode::FOUND, [(header::LOCATION, long_url)]))
}
