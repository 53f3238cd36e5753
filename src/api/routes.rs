//! API route configuration.

use crate::api::handlers::{health_handler, redirect_handler, shorten_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Public routes.
///
/// # Endpoints
///
/// - `POST /shorten` - Create a short URL
/// - `GET  /health`  - Storage health check
/// - `GET  /{code}`  - Redirect to the stored long URL
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/health", get(health_handler))
        .route("/{code}", get(redirect_handler))
}
