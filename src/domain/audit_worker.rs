use std::sync::Arc;
use tokio::sync::mpsc;

use crate::domain::audit_event::AuditEvent;
use crate::infrastructure::audit::AuditSink;

/// Drains the audit queue and hands each event to `sink`.
///
/// Delivery errors are logged and dropped. Returns once every sender is gone.
pub async fn run_audit_worker(mut rx: mpsc::Receiver<AuditEvent>, sink: Arc<dyn AuditSink>) {
    while let Some(event) = rx.recv().await {
        if let Err(e) = sink.deliver(&event).await {
            tracing::warn!(
                error = %e,
                method = %event.request.method,
                uri = %event.request.uri,
                "Audit delivery failed"
            );
        }
    }

    tracing::debug!("Audit worker stopped");
}
