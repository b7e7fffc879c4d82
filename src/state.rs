use std::sync::Arc;
use tokio::sync::mpsc;

use crate::application::services::{AuthService, ItemService};
use crate::domain::audit_event::AuditEvent;
use crate::domain::repositories::ItemRepository;

/// Shared handles injected into every handler and middleware.
#[derive(Clone)]
pub struct AppState {
    pub item_service: Arc<ItemService<dyn ItemRepository>>,
    pub auth_service: Arc<AuthService>,
    pub audit_sender: mpsc::Sender<AuditEvent>,
}

impl AppState {
    pub fn new(
        repository: Arc<dyn ItemRepository>,
        auth_service: AuthService,
        audit_sender: mpsc::Sender<AuditEvent>,
    ) -> Self {
        Self {
            item_service: Arc::new(ItemService::new(repository)),
            auth_service: Arc::new(auth_service),
            audit_sender,
        }
    }

    /// Queues an audit event without waiting; drops it when the queue is full.
    pub fn emit_audit(&self, event: AuditEvent) {
        if let Err(e) = self.audit_sender.try_send(event) {
            tracing::debug!(error = %e, "Audit event dropped");
        }
    }
}
