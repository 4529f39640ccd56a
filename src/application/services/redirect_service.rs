//! Redirect resolution and click accounting service.

use std::sync::Arc;

use chrono::Utc;
use serde_json::{Value, json};
use tracing::error;

use crate::domain::entities::NewClickLog;
use crate::domain::repositories::{ClickLogRepository, LinkRepository};
use crate::error::AppError;

/// Service that resolves a slug to its destination and accounts the click.
///
/// Per resolved redirect it appends exactly one click log and increments
/// the link's counter exactly once. The two writes are independent: both
/// are always attempted, and a failure in either is logged operationally
/// while the destination is still returned; a lost click record is an
/// acceptable degradation, a failed redirect is not.
pub struct RedirectService {
    links: Arc<dyn LinkRepository>,
    click_logs: Arc<dyn ClickLogRepository>,
}

impl RedirectService {
    /// Creates a new redirect service.
    pub fn new(links: Arc<dyn LinkRepository>, click_logs: Arc<dyn ClickLogRepository>) -> Self {
        Self { links, click_logs }
    }

    /// Resolves `slug` and returns the destination URL.
    ///
    /// `payload` is the tracker page's telemetry object, stored opaquely.
    /// `ip` and `country` must come from the request context; network
    /// facts are never taken from the client payload, and the log
    /// timestamp is assigned here, server-side.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for a blank slug or null payload,
    /// [`AppError::NotFound`] for an unknown slug, and
    /// [`AppError::Internal`] when the lookup itself fails.
    pub async fn resolve(
        &self,
        slug: &str,
        payload: Value,
        ip: String,
        country: String,
    ) -> Result<String, AppError> {
        if slug.trim().is_empty() || payload.is_null() {
            return Err(AppError::bad_request(
                "Missing slug or browser data",
                json!({ "required": ["slug", "browserData"] }),
            ));
        }

        let link = self
            .links
            .find_by_slug(slug)
            .await?
            .ok_or_else(|| AppError::not_found("Link not found", json!({ "slug": slug })))?;

        let log = NewClickLog::new(
            link.slug.clone(),
            link.long_url.clone(),
            ip,
            country,
            payload,
            Utc::now(),
        );

        if let Err(e) = self
            .click_logs
            .append(&link.owner_id, &link.tenant_id, log)
            .await
        {
            error!(slug = %link.slug, error = %e, "failed to append click log");
        }

        if let Err(e) = self.links.increment_click_count(&link.slug).await {
            error!(slug = %link.slug, error = %e, "failed to increment click count");
        }

        Ok(link.long_url)
    }
}
