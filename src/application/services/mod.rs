//! Application services orchestrating the core pipelines.
//!
//! - [`LinkService`] - Validation and slug reservation for link creation
//! - [`RedirectService`] - Slug resolution and click accounting

pub mod link_service;
pub mod redirect_service;

pub use link_service::LinkService;
pub use redirect_service::RedirectService;
