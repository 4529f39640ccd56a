//! Link creation and retrieval service.

use std::sync::Arc;

use crate::domain::entities::{Link, LinkPreview, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::slug::{generate_slug, validate_custom_slug};
use crate::utils::url_validator::validate_absolute_url;
use serde_json::json;

/// How many generated-slug reservations to attempt before giving up.
const MAX_GENERATE_ATTEMPTS: usize = 5;

/// Service for creating and retrieving shortened links.
///
/// Validation happens entirely before the first store access, so a
/// rejected request never leaves a partial write behind. Slug uniqueness
/// is not checked here; reservation is a single atomic store operation,
/// and this service reacts to its conflict outcome instead of pre-reading.
pub struct LinkService {
    links: Arc<dyn LinkRepository>,
}

impl LinkService {
    /// Creates a new link service.
    pub fn new(links: Arc<dyn LinkRepository>) -> Self {
        Self { links }
    }

    /// Creates a short link for the given owner partition.
    ///
    /// # Slug Resolution
    ///
    /// - A custom slug is validated and reserved in a single attempt; a
    ///   conflict is surfaced to the caller as a user-facing error.
    /// - Without a custom slug, a random 6-character slug is generated
    ///   and reservation is retried on conflict, up to
    ///   [`MAX_GENERATE_ATTEMPTS`] times.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if:
    /// - `long_url`, `owner_id`, or `tenant_id` is blank
    /// - `long_url` (or the preview image URL) is not an absolute HTTP(S) URL
    /// - the custom slug is malformed
    ///
    /// Returns [`AppError::Conflict`] if the custom slug is already in use
    /// (by any owner; slugs are globally unique).
    ///
    /// Returns [`AppError::Internal`] on store errors, or when generated
    /// slugs keep colliding past the attempt cap.
    pub async fn create_link(
        &self,
        long_url: String,
        custom_slug: Option<String>,
        owner_id: String,
        tenant_id: String,
        preview: LinkPreview,
    ) -> Result<Link, AppError> {
        if long_url.trim().is_empty() || owner_id.trim().is_empty() || tenant_id.trim().is_empty()
        {
            return Err(AppError::bad_request(
                "Missing required fields",
                json!({ "required": ["longUrl", "ownerId", "tenantId"] }),
            ));
        }

        validate_absolute_url(&long_url).map_err(|e| {
            AppError::bad_request("Invalid URL format", json!({ "reason": e.to_string() }))
        })?;

        if let Some(image_url) = preview.image_url.as_deref() {
            validate_absolute_url(image_url).map_err(|e| {
                AppError::bad_request(
                    "Invalid preview image URL",
                    json!({ "reason": e.to_string() }),
                )
            })?;
        }

        match custom_slug {
            Some(slug) => {
                validate_custom_slug(&slug)?;

                let new_link = NewLink {
                    slug: slug.clone(),
                    long_url,
                    owner_id,
                    tenant_id,
                    preview,
                };

                match self.links.create_if_absent(new_link).await {
                    Err(AppError::Conflict { .. }) => Err(AppError::conflict(
                        "This custom slug is already in use. Please choose another.",
                        json!({ "slug": slug }),
                    )),
                    other => other,
                }
            }
            None => {
                self.create_with_generated_slug(long_url, owner_id, tenant_id, preview)
                    .await
            }
        }
    }

    /// Retrieves a link by its slug, with no side effects.
    ///
    /// Used by the tracker page to source preview metadata.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    pub async fn get_by_slug(&self, slug: &str) -> Result<Option<Link>, AppError> {
        self.links.find_by_slug(slug).await
    }

    /// Reserves a generated slug, regenerating on conflict.
    ///
    /// Bounded so a shrinking free-slug space cannot spin forever.
    async fn create_with_generated_slug(
        &self,
        long_url: String,
        owner_id: String,
        tenant_id: String,
        preview: LinkPreview,
    ) -> Result<Link, AppError> {
        for _ in 0..MAX_GENERATE_ATTEMPTS {
            let new_link = NewLink {
                slug: generate_slug(),
                long_url: long_url.clone(),
                owner_id: owner_id.clone(),
                tenant_id: tenant_id.clone(),
                preview: preview.clone(),
            };

            match self.links.create_if_absent(new_link).await {
                Ok(link) => return Ok(link),
                Err(AppError::Conflict { .. }) => continue,
                Err(e) => return Err(e),
            }
        }

        Err(AppError::internal(
            "Failed to reserve a generated slug",
            json!({ "reason": "slug space exhausted", "attempts": MAX_GENERATE_ATTEMPTS }),
        ))
    }
}
