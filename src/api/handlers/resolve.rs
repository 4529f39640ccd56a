//! Handler for the redirect resolution endpoint.

use axum::{
    Json,
    extract::{ConnectInfo, State},
    http::HeaderMap,
};
use serde_json::Value;
use std::net::SocketAddr;
use validator::Validate;

use crate::api::dto::resolve::{ResolveRequest, ResolveResponse};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::request_meta::{client_country, client_ip};

/// Resolves a slug, records the click, and returns the destination URL.
///
/// # Endpoint
///
/// `POST /api/resolve`
///
/// Called by the tracker page with `{slug, browserData}`. The client IP
/// and country are derived from the request context here; the telemetry
/// payload has no say in them.
///
/// # Responses
///
/// - `200 {longUrl}`: one click log appended, counter incremented
/// - `400`: missing slug or browser data
/// - `404`: unknown slug (no click log is written)
/// - `500`: store failure during lookup
pub async fn resolve_handler(
    State(state): State<AppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    headers: HeaderMap,
    Json(payload): Json<ResolveRequest>,
) -> Result<Json<ResolveResponse>, AppError> {
    payload.validate()?;

    let ip = client_ip(&headers, Some(addr.ip()), state.behind_proxy);
    let country = client_country(&headers);

    let long_url = state
        .redirect_service
        .resolve(
            payload.slug.as_deref().unwrap_or_default(),
            payload.browser_data.unwrap_or(Value::Null),
            ip,
            country,
        )
        .await?;

    Ok(Json(ResolveResponse { long_url }))
}
