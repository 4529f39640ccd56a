//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; concrete
//! implementations live in `crate::infrastructure::persistence`. Mock
//! implementations are auto-generated via `mockall` for testing.
//!
//! # Available Repositories
//!
//! - [`LinkRepository`] - Slug reservation, global lookup, atomic click counting
//! - [`ClickLogRepository`] - Append-only click analytics log

pub mod click_log_repository;
pub mod link_repository;

pub use click_log_repository::ClickLogRepository;
pub use link_repository::LinkRepository;

#[cfg(test)]
pub use click_log_repository::MockClickLogRepository;
#[cfg(test)]
pub use link_repository::MockLinkRepository;
