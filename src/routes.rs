//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /health`       - Liveness check
//! - `POST /api/links`    - Create a short link
//! - `POST /api/resolve`  - Resolve a slug and record the click
//! - `GET  /{slug}`       - Tracking page (two-phase redirect, phase one)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{health_handler, tracker_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api::routes::routes())
        .route("/{slug}", get(tracker_handler))
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
