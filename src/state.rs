//! Shared application state injected into all handlers.
//!
//! Store clients are constructed once at startup and passed in; never
//! reached through process-wide globals.

use std::sync::Arc;

use crate::application::services::{LinkService, RedirectService};

#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService>,
    pub redirect_service: Arc<RedirectService>,
    /// When true, client IP extraction trusts X-Forwarded-For / X-Real-IP.
    /// Enable only behind a trusted reverse proxy.
    pub behind_proxy: bool,
}

impl AppState {
    pub fn new(
        link_service: Arc<LinkService>,
        redirect_service: Arc<RedirectService>,
        behind_proxy: bool,
    ) -> Self {
        Self {
            link_service,
            redirect_service,
            behind_proxy,
        }
    }
}
