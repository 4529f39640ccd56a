//! PostgreSQL implementation of the click log repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::NewClickLog;
use crate::domain::repositories::ClickLogRepository;
use crate::error::AppError;

/// Append-only PostgreSQL store for click analytics records.
///
/// The telemetry payload lands in a JSONB column untouched; partition
/// columns `(tenant_id, owner_id)` mirror the owning link's partition.
pub struct PgClickLogRepository {
    pool: Arc<PgPool>,
}

impl PgClickLogRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ClickLogRepository for PgClickLogRepository {
    async fn append(
        &self,
        owner_id: &str,
        tenant_id: &str,
        log: NewClickLog,
    ) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO click_logs
                (tenant_id, owner_id, slug, redirected_to, ip_address, country, payload, logged_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(tenant_id)
        .bind(owner_id)
        .bind(&log.slug)
        .bind(&log.redirected_to)
        .bind(&log.ip_address)
        .bind(&log.country)
        .bind(&log.payload)
        .bind(log.timestamp)
        .execute(self.pool.as_ref())
        .await?;

        Ok(())
    }
}
