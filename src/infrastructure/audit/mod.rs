//! Audit delivery for request notifications.
//!
//! Provides an [`AuditSink`] trait with two implementations:
//! - [`DiscordWebhookSink`] - posts embeds to Discord webhooks
//! - [`NullAuditSink`] - no-op, used when no webhook is configured

mod discord_webhook;
pub mod formatter;
mod null_sink;
mod service;

pub use discord_webhook::{DiscordWebhookSink, WebhookTargets};
pub use null_sink::NullAuditSink;
pub use service::{AuditError, AuditResult, AuditSink};
