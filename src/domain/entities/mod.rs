//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without business logic.
//!
//! # Entity Types
//!
//! - [`Link`] - A shortened URL mapping with its click counter
//! - [`NewClickLog`] - A per-click analytics record
//!
//! Creation inputs use separate structs (`NewLink`, `NewClickLog`) so the
//! store owns the server-assigned fields.

pub mod click_log;
pub mod link;

pub use click_log::NewClickLog;
pub use link::{Link, LinkPreview, NewLink};
