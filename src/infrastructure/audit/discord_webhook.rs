//! Discord webhook delivery for audit events.

use async_trait::async_trait;
use chrono::{FixedOffset, Offset, Utc};
use std::time::Duration;
use tracing::debug;

use super::formatter::format_event;
use super::service::{AuditError, AuditResult, AuditSink};
use crate::domain::audit_event::{AuditEvent, AuditKind};

/// Webhook URLs per event category. Missing URLs disable that category.
#[derive(Debug, Clone, Default)]
pub struct WebhookTargets {
    /// Public requests answered with 2xx/3xx.
    pub access: Option<String>,
    /// Admin API requests.
    pub api: Option<String>,
    /// Public requests answered with anything else.
    pub others: Option<String>,
}

impl WebhookTargets {
    /// Returns true if no category has a URL.
    pub fn is_empty(&self) -> bool {
        self.access.is_none() && self.api.is_none() && self.others.is_none()
    }

    /// Picks the webhook URL for `event`, if its category is enabled.
    pub fn target_for(&self, event: &AuditEvent) -> Option<&str> {
        match event.kind {
            AuditKind::Access if event.is_error() => self.others.as_deref(),
            AuditKind::Access => self.access.as_deref(),
            AuditKind::Api { .. } => self.api.as_deref(),
        }
    }
}

/// Posts audit events to Discord webhooks as embeds.
pub struct DiscordWebhookSink {
    client: reqwest::Client,
    targets: WebhookTargets,
    offset: FixedOffset,
}

impl DiscordWebhookSink {
    /// Builds the sink and its HTTP client.
    ///
    /// `utc_offset_hours` controls the timezone of the footer timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`AuditError::Transport`] if the HTTP client cannot be built.
    pub fn new(targets: WebhookTargets, utc_offset_hours: i32, timeout: Duration) -> AuditResult<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;

        let offset = FixedOffset::east_opt(utc_offset_hours * 3600).unwrap_or_else(|| Utc.fix());

        Ok(Self {
            client,
            targets,
            offset,
        })
    }
}

#[async_trait]
impl AuditSink for DiscordWebhookSink {
    async fn deliver(&self, event: &AuditEvent) -> AuditResult<()> {
        let Some(url) = self.targets.target_for(event) else {
            return Ok(());
        };

        let payload = format_event(event, &self.offset);
        let response = self.client.post(url).json(&payload).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AuditError::Rejected(status.as_u16()));
        }

        debug!(status = status.as_u16(), "Audit event delivered");
        Ok(())
    }
}
