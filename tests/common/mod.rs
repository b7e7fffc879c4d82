#![allow(dead_code)]

pub mod contract;

use axum::extract::ConnectInfo;
use kv_url_shortener::application::services::AuthService;
use kv_url_shortener::domain::audit_event::AuditEvent;
use kv_url_shortener::domain::entities::ItemFields;
use kv_url_shortener::infrastructure::persistence::MemoryItemRepository;
use kv_url_shortener::state::AppState;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::mpsc;
use tower::Layer;

pub const HOST: &str = "s.example.com";
pub const API_KEY: &str = "test-api-key";

pub fn item(param: &str, url: &str) -> ItemFields {
    ItemFields {
        param: param.to_string(),
        description: None,
        url: url.to_string(),
        count: 0,
        unavailable: false,
    }
}

pub fn disabled_item(param: &str, url: &str) -> ItemFields {
    ItemFields {
        unavailable: true,
        ..item(param, url)
    }
}

/// State over an in-memory store seeded with `items` under [`HOST`], accepting
/// [`API_KEY`].
pub fn create_test_state(
    items: Vec<ItemFields>,
) -> (AppState, Arc<MemoryItemRepository>, mpsc::Receiver<AuditEvent>) {
    create_test_state_with_keys(items, vec![API_KEY.to_string()])
}

pub fn create_test_state_with_keys(
    items: Vec<ItemFields>,
    api_keys: Vec<String>,
) -> (AppState, Arc<MemoryItemRepository>, mpsc::Receiver<AuditEvent>) {
    let (tx, rx) = mpsc::channel(100);
    let repo = Arc::new(MemoryItemRepository::with_items(HOST, items));

    let state = AppState::new(repo.clone(), AuthService::new(api_keys), tx);

    (state, repo, rx)
}

/// Drains every audit event queued so far.
pub fn drain(rx: &mut mpsc::Receiver<AuditEvent>) -> Vec<AuditEvent> {
    let mut events = Vec::new();
    while let Ok(event) = rx.try_recv() {
        events.push(event);
    }
    events
}

/// Inserts a fixed peer address, as `into_make_service_with_connect_info` would.
#[derive(Clone)]
pub struct MockConnectInfoLayer;

impl<S> Layer<S> for MockConnectInfoLayer {
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
