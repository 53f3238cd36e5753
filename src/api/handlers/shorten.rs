//! Handler for link shortening endpoint.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::domain::context::OperationContext;
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short URL for a long URL.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com" }
/// ```
///
/// # Response
///
/// ```json
/// { "short_url": "http://localhost:8080/AbCd-_12" }
/// ```
///
/// # Errors
///
/// - 400 Bad Request if the body is malformed or `url` is empty
/// - 500 Internal Server Error on generator or storage failure
pub async fn shorten_handler(
    State(state): State<AppState>,
    ctx: OperationContext,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<Json<ShortenResponse>, AppError> {
    let Json(payload) = payload.map_err(|rejection| {
        tracing::warn!(
            request_id = ctx.request_id(),
            error = %rejection.body_text(),
            "Invalid request body"
        );
        AppError::bad_request(
            "Invalid request body",
            json!({ "reason": rejection.body_text() }),
        )
    })?;

    payload.validate()?;

    let code = state.link_service.shorten(&ctx, &payload.url).await?;

    Ok(Json(ShortenResponse {
        short_url: state.link_service.short_url(&code),
    }))
}
