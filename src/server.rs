//! HTTP server initialization and runtime setup.
//!
//! Handles store selection, audit sink setup, worker spawning, and Axum
//! server lifecycle.

use crate::application::services::AuthService;
use crate::config::Config;
use crate::domain::audit_worker::run_audit_worker;
use crate::domain::repositories::ItemRepository;
use crate::infrastructure::audit::{AuditSink, DiscordWebhookSink, NullAuditSink};
use crate::infrastructure::persistence::{MemoryItemRepository, RedisItemRepository};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::signal;
use tokio::sync::mpsc;

/// Opens the item store selected by the configuration.
///
/// Redis when a URL is configured, otherwise the in-memory store.
///
/// # Errors
///
/// Returns an error if Redis is configured but unreachable. There is no
/// silent fallback: serving from memory would hide every stored item.
pub async fn open_store(config: &Config) -> Result<Arc<dyn ItemRepository>> {
    match &config.redis_url {
        Some(redis_url) => {
            let repo = RedisItemRepository::connect(redis_url, &config.kv_key_prefix)
                .await
                .context("Failed to connect to Redis item store")?;
            tracing::info!("Item store: Redis");
            Ok(Arc::new(repo))
        }
        None => {
            tracing::warn!("REDIS_URL not set; items are kept in memory and lost on restart");
            Ok(Arc::new(MemoryItemRepository::new()))
        }
    }
}

fn audit_sink(config: &Config) -> Result<Arc<dyn AuditSink>> {
    if config.webhooks.is_empty() {
        tracing::info!("Audit webhooks disabled (NullAuditSink)");
        return Ok(Arc::new(NullAuditSink::new()));
    }

    let sink = DiscordWebhookSink::new(
        config.webhooks.clone(),
        config.audit_utc_offset_hours,
        Duration::from_secs(config.webhook_timeout_seconds),
    )
    .context("Failed to build webhook client")?;
    tracing::info!("Audit webhooks enabled (Discord)");

    Ok(Arc::new(sink))
}

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Item store (Redis or in-memory)
/// - Audit sink (Discord webhooks or no-op)
/// - Background audit worker
/// - Axum HTTP server with graceful shutdown on Ctrl+C
///
/// # Errors
///
/// Returns an error if:
/// - The Redis store is configured but unreachable
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let repository = open_store(&config).await?;
    let sink = audit_sink(&config)?;

    let (audit_tx, audit_rx) = mpsc::channel(config.audit_queue_capacity);
    let worker = tokio::spawn(run_audit_worker(audit_rx, sink));
    tracing::info!("Audit worker started");

    if config.api_keys.is_empty() {
        tracing::warn!("API_KEYS is empty; every admin API request will be rejected");
    }

    let state = AppState::new(repository, AuthService::new(config.api_keys.clone()), audit_tx);

    let app = app_router(state);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid LISTEN address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    // The router held the last sender; the worker drains what is queued and exits.
    if tokio::time::timeout(Duration::from_secs(10), worker)
        .await
        .is_err()
    {
        tracing::warn!("Audit worker did not drain within 10s");
    }

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match signal::ctrl_c().await {
        Ok(()) => tracing::info!("Shutdown signal received"),
        Err(e) => tracing::warn!(
            "Failed to listen for Ctrl+C: {}. Proceeding with shutdown anyway.",
            e
        ),
    }
}
