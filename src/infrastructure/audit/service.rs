//! Audit sink trait and error types.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::audit_event::AuditEvent;

/// Errors that can occur while delivering an audit event.
#[derive(Debug, Error)]
pub enum AuditError {
    #[error("Webhook transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Webhook rejected delivery with status {0}")]
    Rejected(u16),
}

/// Result type for audit operations.
pub type AuditResult<T> = Result<T, AuditError>;

/// Destination for audit events.
///
/// Called only from the audit worker, never on the request path. Errors are
/// logged by the worker and otherwise ignored.
///
/// # Implementations
///
/// - [`crate::infrastructure::audit::DiscordWebhookSink`] - Discord webhook delivery
/// - [`crate::infrastructure::audit::NullAuditSink`] - discards everything
#[async_trait]
pub trait AuditSink: Send + Sync {
    /// Delivers a single event.
    async fn deliver(&self, event: &AuditEvent) -> AuditResult<()>;
}
