//! Discord webhook payload construction for audit events.

use chrono::FixedOffset;
use serde::Serialize;

use crate::domain::audit_event::{AuditEvent, AuditKind};

pub const COLOR_OK: u32 = 0x008000;
pub const COLOR_WARN: u32 = 0xffff00;
pub const COLOR_ERROR: u32 = 0xff0000;

/// Body of a Discord webhook `POST`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct WebhookContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    pub embeds: Vec<Embed>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Embed {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub description: String,
    pub color: u32,
    pub fields: Vec<EmbedField>,
    pub footer: EmbedFooter,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct EmbedFooter {
    pub text: String,
}

/// Formats the event timestamp as e.g. `Oct 15, 09:04:05` in `offset`.
pub fn format_timestamp(event: &AuditEvent, offset: &FixedOffset) -> String {
    event
        .timestamp
        .with_timezone(offset)
        .format("%b %-d, %H:%M:%S")
        .to_string()
}

/// Builds the webhook payload for `event`.
///
/// Public requests carry the path as message content and the user agent as a
/// field; admin requests are titled with the key check outcome and carry the
/// hashed key instead.
pub fn format_event(event: &AuditEvent, offset: &FixedOffset) -> WebhookContent {
    let request = &event.request;
    let footer = EmbedFooter {
        text: format!(
            "{} - {}",
            format_timestamp(event, offset),
            request.remote_addr.as_deref().unwrap_or("unknown")
        ),
    };

    match &event.kind {
        AuditKind::Access => WebhookContent {
            content: Some(request.path.clone()),
            embeds: vec![Embed {
                title: None,
                description: format!("[{}] {} - {}", request.method, request.uri, event.status),
                color: if event.is_error() { COLOR_WARN } else { COLOR_OK },
                fields: vec![EmbedField {
                    name: "User-Agent".to_string(),
                    value: request
                        .user_agent
                        .clone()
                        .unwrap_or_else(|| "Unknown".to_string()),
                }],
                footer,
            }],
        },
        AuditKind::Api {
            access,
            hashed_api_key,
        } => WebhookContent {
            content: None,
            embeds: vec![Embed {
                title: Some(access.to_string()),
                description: format!("[{}] {}", request.method, request.uri),
                color: if event.is_error() { COLOR_ERROR } else { COLOR_OK },
                fields: vec![EmbedField {
                    name: "Hashed API Key".to_string(),
                    value: hashed_api_key.clone(),
                }],
                footer,
            }],
        },
    }
}
