//! PostgreSQL implementation of the link repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Link, LinkPreview, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// PostgreSQL repository for link storage and retrieval.
///
/// `slug` is the table's primary key, which gives both guarantees the
/// core needs from one constraint: global uniqueness (reservation is a
/// plain INSERT whose unique violation maps to a conflict) and a global
/// index for cross-tenant lookup.
pub struct PgLinkRepository {
    pool: Arc<PgPool>,
}

impl PgLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct LinkRow {
    slug: String,
    long_url: String,
    owner_id: String,
    tenant_id: String,
    click_count: i64,
    created_at: DateTime<Utc>,
    title: Option<String>,
    description: Option<String>,
    image_url: Option<String>,
}

impl From<LinkRow> for Link {
    fn from(row: LinkRow) -> Self {
        Link::new(
            row.slug,
            row.long_url,
            row.owner_id,
            row.tenant_id,
            row.click_count,
            row.created_at,
            LinkPreview {
                title: row.title,
                description: row.description,
                image_url: row.image_url,
            },
        )
    }
}

#[async_trait]
impl LinkRepository for PgLinkRepository {
    async fn create_if_absent(&self, new_link: NewLink) -> Result<Link, AppError> {
        // Single atomic statement: the primary key on slug makes the
        // existence check and the write indivisible. A unique violation
        // converts to AppError::Conflict in the sqlx error mapping.
        let row = sqlx::query_as::<_, LinkRow>(
            r#"
            INSERT INTO links (slug, long_url, owner_id, tenant_id, title, description, image_url)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING slug, long_url, owner_id, tenant_id, click_count, created_at,
                      title, description, image_url
            "#,
        )
        .bind(&new_link.slug)
        .bind(&new_link.long_url)
        .bind(&new_link.owner_id)
        .bind(&new_link.tenant_id)
        .bind(&new_link.preview.title)
        .bind(&new_link.preview.description)
        .bind(&new_link.preview.image_url)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Link>, AppError> {
        let row = sqlx::query_as::<_, LinkRow>(
            r#"
            SELECT slug, long_url, owner_id, tenant_id, click_count, created_at,
                   title, description, image_url
            FROM links
            WHERE slug = $1
            "#,
        )
        .bind(slug)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Link::from))
    }

    async fn increment_click_count(&self, slug: &str) -> Result<(), AppError> {
        // Atomic add on the store side; never read-modify-write here.
        sqlx::query("UPDATE links SET click_count = click_count + 1 WHERE slug = $1")
            .bind(slug)
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }
}
