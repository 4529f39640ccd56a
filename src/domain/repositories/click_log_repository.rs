//! Repository trait for the append-only click analytics log.

use crate::domain::entities::NewClickLog;
use crate::error::AppError;
use async_trait::async_trait;

/// Append-only store of per-click analytics records.
///
/// Records are partitioned by `(tenant_id, owner_id)`; the partition of
/// the link that was resolved. There is no uniqueness constraint and the
/// core requires no read path.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgClickLogRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClickLogRepository: Send + Sync {
    /// Appends one click record under the given owner partition.
    ///
    /// Independent of any Link Store mutation: it neither blocks nor is
    /// blocked by counter increments.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    async fn append(
        &self,
        owner_id: &str,
        tenant_id: &str,
        log: NewClickLog,
    ) -> Result<(), AppError>;
}
