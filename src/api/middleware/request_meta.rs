//! Request metadata capture shared by the logging middleware.

use axum::{
    extract::{ConnectInfo, OriginalUri, Request},
    http::header,
};
use std::net::SocketAddr;

use crate::domain::audit_event::RequestMeta;

/// Snapshots the parts of `req` that audit events report.
///
/// The URI is the one the client sent, before nested routers strip their
/// prefix. The caller address comes from [`ConnectInfo`] when the server was
/// started with `into_make_service_with_connect_info`; otherwise it is `None`.
pub fn capture(req: &Request) -> RequestMeta {
    let full_uri = req
        .extensions()
        .get::<OriginalUri>()
        .map(|OriginalUri(uri)| uri)
        .unwrap_or_else(|| req.uri());
    let uri = full_uri
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| full_uri.path().to_string());

    RequestMeta {
        method: req.method().to_string(),
        uri,
        path: full_uri.path().to_string(),
        remote_addr: req
            .extensions()
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| addr.ip().to_string()),
        user_agent: req
            .headers()
            .get(header::USER_AGENT)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
    }
}
