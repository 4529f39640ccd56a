//! Handler for the tracking page; phase one of the two-phase redirect.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::error;

use crate::error::AppError;
use crate::state::AppState;
use crate::utils::slug::is_url_safe_slug;

/// Template for the tracker page.
///
/// Renders `templates/tracker.html`: social-preview meta tags when the
/// link is known, and the script that collects browser telemetry, POSTs
/// it to `/api/resolve`, and navigates to the returned destination.
#[derive(Template, WebTemplate)]
#[template(path = "tracker.html")]
pub struct TrackerTemplate {
    pub slug: String,
    pub page_title: String,
    pub og_title: String,
    pub og_description: String,
    pub og_image: Option<String>,
    pub has_preview: bool,
}

/// Serves the tracking page for a slug.
///
/// # Endpoint
///
/// `GET /{slug}`
///
/// A blank slug redirects to the root. A slug outside the URL-safe
/// charset cannot exist (and is interpolated into the page script), so it
/// gets a 404 without a store lookup. A failed preview lookup degrades to
/// a tag-less page; the redirect must still be attempted, so the page is
/// served regardless.
pub async fn tracker_handler(Path(slug): Path<String>, State(state): State<AppState>) -> Response {
    let slug = slug.trim().to_string();

    if slug.is_empty() {
        return (StatusCode::FOUND, [(header::LOCATION, "/")]).into_response();
    }

    if !is_url_safe_slug(&slug) {
        return AppError::not_found("Link not found", json!({ "slug": slug })).into_response();
    }

    let link = match state.link_service.get_by_slug(&slug).await {
        Ok(link) => link,
        Err(e) => {
            error!(%slug, error = %e, "preview lookup failed, serving tracker without tags");
            None
        }
    };

    let template = match link {
        Some(link) => {
            let og_title = link
                .preview
                .title
                .unwrap_or_else(|| "Shared Link".to_string());
            TrackerTemplate {
                slug,
                page_title: og_title.clone(),
                og_title,
                og_description: link
                    .preview
                    .description
                    .unwrap_or_else(|| "Click to view this link.".to_string()),
                og_image: link.preview.image_url,
                has_preview: true,
            }
        }
        None => TrackerTemplate {
            slug,
            page_title: "Redirecting...".to_string(),
            og_title: String::new(),
            og_description: String::new(),
            og_image: None,
            has_preview: false,
        },
    };

    template.into_response()
}
