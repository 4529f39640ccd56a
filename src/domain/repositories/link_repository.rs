//! Repository trait for link data access.

use crate::domain::entities::{Link, NewLink};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the authoritative slug → destination mapping.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Reserves `new_link.slug` and writes the record in one atomic step.
    ///
    /// The existence check and the write must not have a window in which
    /// two concurrent reservations of the same slug can both succeed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the slug is already reserved
    /// by any owner, in any tenant, since slugs are globally unique.
    ///
    /// Returns [`AppError::Internal`] on store errors; nothing is
    /// committed in that case.
    async fn create_if_absent(&self, new_link: NewLink) -> Result<Link, AppError>;

    /// Resolves a slug over the unpartitioned union of all tenants' links.
    ///
    /// The caller does not know which partition owns the slug; the lookup
    /// is a single global index query.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Link))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Link>, AppError>;

    /// Adds 1 to the link's click counter as a single atomic operation.
    ///
    /// Must be a store-side atomic add, never an application-level
    /// read-modify-write, so concurrent clicks on the same slug cannot
    /// lose increments.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    async fn increment_click_count(&self, slug: &str) -> Result<(), AppError>;
}
