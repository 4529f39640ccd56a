//! API route configuration.

use crate::api::handlers::{create_link_handler, resolve_handler};
use crate::state::AppState;
use axum::{Router, routing::post};

/// API routes, nested under `/api`.
///
/// # Endpoints
///
/// - `POST /links`   - Create a short link
/// - `POST /resolve` - Resolve a slug and record the click
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/links", post(create_link_handler))
        .route("/resolve", post(resolve_handler))
}
