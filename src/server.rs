//! HTTP server initialization and runtime setup.
//!
//! Handles database connections, migrations, service construction, and
//! the Axum server lifecycle.

use crate::application::services::{LinkService, RedirectService};
use crate::config::Config;
use crate::infrastructure::persistence::{PgClickLogRepository, PgLinkRepository};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool
/// - Embedded migrations
/// - Repositories and services
/// - Axum HTTP server (with connect-info for client IP derivation)
///
/// # Errors
///
/// Returns an error if the database connection, migration run, server
/// bind, or server runtime fails.
pub async fn run(config: Config) -> Result<()> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect(&config.database_url)
        .await?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations").run(&pool).await?;
    tracing::info!("Migrations applied");

    let pool = Arc::new(pool);
    let link_repository = Arc::new(PgLinkRepository::new(pool.clone()));
    let click_log_repository = Arc::new(PgClickLogRepository::new(pool));

    let link_service = Arc::new(LinkService::new(link_repository.clone()));
    let redirect_service = Arc::new(RedirectService::new(link_repository, click_log_repository));

    let state = AppState::new(link_service, redirect_service, config.behind_proxy);

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .await?;

    Ok(())
}
