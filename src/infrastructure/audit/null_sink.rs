//! No-op audit sink.

use super::service::{AuditResult, AuditSink};
use crate::domain::audit_event::AuditEvent;
use async_trait::async_trait;
use tracing::debug;

/// An audit sink that drops every event.
///
/// Used when no webhook URL is configured.
pub struct NullAuditSink;

impl NullAuditSink {
    pub fn new() -> Self {
        debug!("Using NullAuditSink (audit delivery disabled)");
        Self
    }
}

impl Default for NullAuditSink {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AuditSink for NullAuditSink {
    async fn deliver(&self, _event: &AuditEvent) -> AuditResult<()> {
        Ok(())
    }
}
