//! Handler for the link creation endpoint.

use axum::{Json, extract::State, http::StatusCode};
use validator::Validate;

use crate::api::dto::create_link::{CreateLinkRequest, CreateLinkResponse};
use crate::domain::entities::LinkPreview;
use crate::error::AppError;
use crate::state::AppState;

/// Creates a new short link.
///
/// # Endpoint
///
/// `POST /api/links`
///
/// # Request Body
///
/// ```json
/// {
///   "longUrl": "https://example.com",
///   "customSlug": "promo",          // optional
///   "ownerId": "u1",
///   "tenantId": "a1",
///   "title": "Sale",                // optional preview fields
///   "description": "...",
///   "imageUrl": "https://example.com/cover.png"
/// }
/// ```
///
/// # Responses
///
/// - `201 {slug, longUrl}`: exactly one new link record exists
/// - `400`: missing fields, invalid URL, or invalid slug format
/// - `409`: slug already in use (globally, for any owner)
/// - `500`: store failure; nothing was committed
pub async fn create_link_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateLinkRequest>,
) -> Result<(StatusCode, Json<CreateLinkResponse>), AppError> {
    payload.validate()?;

    let preview = LinkPreview {
        title: payload.title,
        description: payload.description,
        image_url: payload.image_url,
    };

    let link = state
        .link_service
        .create_link(
            payload.long_url.unwrap_or_default(),
            payload.custom_slug,
            payload.owner_id.unwrap_or_default(),
            payload.tenant_id.unwrap_or_default(),
            preview,
        )
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateLinkResponse {
            slug: link.slug,
            long_url: link.long_url,
        }),
    ))
}
