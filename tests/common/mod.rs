#![allow(dead_code)]

//! Shared fixtures: in-memory repository implementations and test app
//! wiring. The stores satisfy the same atomicity contracts as the
//! Postgres implementations (insert-if-absent under one lock, increment
//! under one lock), so handler behavior can be exercised hermetically.

use async_trait::async_trait;
use axum::{Router, extract::ConnectInfo, routing::get};
use chrono::Utc;
use serde_json::json;
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use linktrack::api;
use linktrack::api::handlers::{health_handler, tracker_handler};
use linktrack::application::services::{LinkService, RedirectService};
use linktrack::domain::entities::{Link, NewClickLog, NewLink};
use linktrack::domain::repositories::{ClickLogRepository, LinkRepository};
use linktrack::error::AppError;
use linktrack::state::AppState;

/// In-memory link store with the same conflict and increment semantics
/// as the Postgres repository.
#[derive(Default)]
pub struct MemoryLinkRepository {
    links: Mutex<HashMap<String, Link>>,
}

impl MemoryLinkRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.links.lock().unwrap().len()
    }

    pub fn click_count(&self, slug: &str) -> Option<i64> {
        self.links.lock().unwrap().get(slug).map(|l| l.click_count)
    }

    /// Seeds a link directly, bypassing the creation service.
    pub fn seed(&self, new_link: NewLink) {
        let link = Link::new(
            new_link.slug.clone(),
            new_link.long_url,
            new_link.owner_id,
            new_link.tenant_id,
            0,
            Utc::now(),
            new_link.preview,
        );
        self.links.lock().unwrap().insert(new_link.slug, link);
    }
}

#[async_trait]
impl LinkRepository for MemoryLinkRepository {
    async fn create_if_absent(&self, new_link: NewLink) -> Result<Link, AppError> {
        let mut links = self.links.lock().unwrap();

        if links.contains_key(&new_link.slug) {
            return Err(AppError::conflict(
                "Unique constraint violation",
                json!({ "constraint": "links_pkey" }),
            ));
        }

        let link = Link::new(
            new_link.slug.clone(),
            new_link.long_url,
            new_link.owner_id,
            new_link.tenant_id,
            0,
            Utc::now(),
            new_link.preview,
        );
        links.insert(new_link.slug, link.clone());

        Ok(link)
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Link>, AppError> {
        Ok(self.links.lock().unwrap().get(slug).cloned())
    }

    async fn increment_click_count(&self, slug: &str) -> Result<(), AppError> {
        if let Some(link) = self.links.lock().unwrap().get_mut(slug) {
            link.click_count += 1;
        }
        Ok(())
    }
}

/// In-memory append-only click log with inspection helpers.
#[derive(Default)]
pub struct MemoryClickLogRepository {
    logs: Mutex<Vec<(String, String, NewClickLog)>>,
}

impl MemoryClickLogRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.logs.lock().unwrap().len()
    }

    /// Returns the last appended record as `(owner_id, tenant_id, log)`.
    pub fn last(&self) -> Option<(String, String, NewClickLog)> {
        self.logs.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl ClickLogRepository for MemoryClickLogRepository {
    async fn append(
        &self,
        owner_id: &str,
        tenant_id: &str,
        log: NewClickLog,
    ) -> Result<(), AppError> {
        self.logs
            .lock()
            .unwrap()
            .push((owner_id.to_string(), tenant_id.to_string(), log));
        Ok(())
    }
}

/// Builds an `AppState` over the given in-memory stores.
pub fn create_test_state(
    links: Arc<MemoryLinkRepository>,
    logs: Arc<MemoryClickLogRepository>,
    behind_proxy: bool,
) -> AppState {
    let link_service = Arc::new(LinkService::new(links.clone()));
    let redirect_service = Arc::new(RedirectService::new(links, logs));

    AppState::new(link_service, redirect_service, behind_proxy)
}

/// Full application router over the test state, with a fake peer address
/// injected so `ConnectInfo` extraction works without a real socket.
pub fn test_app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api::routes::routes())
        .route("/{slug}", get(tracker_handler))
        .with_state(state)
        .layer(MockConnectInfoLayer)
}

#[derive(Clone)]
pub struct MockConnectInfoLayer;

impl<S> tower::Layer<S> for MockConnectInfoLayer {
    type Service = MockConnectInfoService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        MockConnectInfoService { inner }
    }
}

#[derive(Clone)]
pub struct MockConnectInfoService<S> {
    inner: S,
}

impl<S, B> tower::Service<axum::http::Request<B>> for MockConnectInfoService<S>
where
    S: tower::Service<axum::http::Request<B>> + Clone + Send + 'static,
    S::Future: Send + 'static,
    B: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(
        &mut self,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: axum::http::Request<B>) -> Self::Future {
        let addr: SocketAddr = "127.0.0.1:12345".parse().unwrap();
        req.extensions_mut().insert(ConnectInfo(addr));
        self.inner.call(req)
    }
}
