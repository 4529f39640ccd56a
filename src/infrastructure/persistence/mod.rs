//! PostgreSQL repository implementations.
//!
//! Concrete implementations of the domain repository traits. Queries are
//! runtime-bound (`sqlx::query`/`query_as`) so the crate builds without a
//! live database.
//!
//! # Repositories
//!
//! - [`PgLinkRepository`] - Link reservation, lookup, click counting
//! - [`PgClickLogRepository`] - Append-only click log

pub mod pg_click_log_repository;
pub mod pg_link_repository;

pub use pg_click_log_repository::PgClickLogRepository;
pub use pg_link_repository::PgLinkRepository;
