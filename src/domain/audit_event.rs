//! Audit event model for fire-and-forget request notifications.

use chrono::{DateTime, Utc};
use std::fmt;

/// Request metadata captured before the request is handed to a handler.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestMeta {
    pub method: String,
    /// Path and query as received.
    pub uri: String,
    pub path: String,
    pub remote_addr: Option<String>,
    pub user_agent: Option<String>,
}

/// Outcome of the API key check for an admin request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiAccess {
    Accessed,
    Unauthorized,
    Forbidden,
}

impl ApiAccess {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Accessed => "Accessed",
            Self::Unauthorized => "Unauthorized",
            Self::Forbidden => "Forbidden",
        }
    }
}

impl fmt::Display for ApiAccess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which surface produced the event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuditKind {
    /// Public redirect surface.
    Access,
    /// Administrative API, with the SHA-256 hex of the presented key
    /// (`"none"` when no key was sent).
    Api {
        access: ApiAccess,
        hashed_api_key: String,
    },
}

/// A completed request, queued for delivery to the audit sink.
///
/// Created by middleware and sent through a bounded channel to
/// [`crate::domain::audit_worker::run_audit_worker`]. Delivery is best-effort:
/// a full queue or a failing sink never affects the response.
#[derive(Debug, Clone)]
pub struct AuditEvent {
    pub kind: AuditKind,
    pub request: RequestMeta,
    pub status: u16,
    pub timestamp: DateTime<Utc>,
}

impl AuditEvent {
    /// Creates an event for a public request.
    pub fn access(request: RequestMeta, status: u16) -> Self {
        Self {
            kind: AuditKind::Access,
            request,
            status,
            timestamp: Utc::now(),
        }
    }

    /// Creates an event for an admin API request.
    pub fn api(request: RequestMeta, status: u16, access: ApiAccess, hashed_api_key: String) -> Self {
        Self {
            kind: AuditKind::Api {
                access,
                hashed_api_key,
            },
            request,
            status,
            timestamp: Utc::now(),
        }
    }

    /// Public requests are errors outside 2xx/3xx; admin requests are errors
    /// when the key check rejected them.
    pub fn is_error(&self) -> bool {
        match &self.kind {
            AuditKind::Access => !(200..400).contains(&self.status),
            AuditKind::Api { access, .. } => *access != ApiAccess::Accessed,
        }
    }
}
