//! Access logging for public routes.

use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use std::time::Instant;

use crate::api::middleware::request_meta;
use crate::domain::audit_event::AuditEvent;
use crate::state::AppState;

/// Logs a combined-log style line and queues an access audit event.
///
/// The audit event is routed by status: 2xx/3xx go to the access webhook,
/// everything else to the others webhook.
pub async fn layer(State(st): State<AppState>, req: Request, next: Next) -> Response {
    let start = Instant::now();

    let meta = request_meta::capture(&req);
    let version = format!("{:?}", req.version());
    let referer = req
        .headers()
        .get(header::REFERER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-")
        .to_string();

    let response = next.run(req).await;

    let status = response.status().as_u16();

    tracing::info!(
        r#"{ip} - - "{method} {uri} {version}" {status} - "{referer}" "{ua}" {ms}ms"#,
        ip = meta.remote_addr.as_deref().unwrap_or("-"),
        method = meta.method,
        uri = meta.uri,
        version = version,
        status = status,
        referer = referer,
        ua = meta.user_agent.as_deref().unwrap_or("-"),
        ms = start.elapsed().as_millis(),
    );

    st.emit_audit(AuditEvent::access(meta, status));

    response
}
