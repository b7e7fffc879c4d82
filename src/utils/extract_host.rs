//! Host extraction from HTTP request headers.

use crate::AppError;
use axum::http::{HeaderMap, header};

/// Extracts the store partition key from the `Host` header.
///
/// Ports are stripped (IPv6 brackets are kept) and the result is lowercased,
/// so `Example.COM:8080` and `example.com` address the same items.
///
/// # Errors
///
/// Returns [`AppError::NotFound`] if the header is missing, empty or not
/// valid UTF-8.
///
/// # Examples
///
/// ```ignore
/// let mut headers = HeaderMap::new();
/// headers.insert(header::HOST, "example.com:8080".parse().unwrap());
///
/// assert_eq!(extract_host_from_headers(&headers).unwrap(), "example.com");
/// ```
pub fn extract_host_from_headers(headers: &HeaderMap) -> Result<String, AppError> {
    headers
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .and_then(normalize_host)
        .ok_or_else(|| AppError::not_found("Missing or invalid Host header"))
}

/// Reduces a `host[:port]` string to its partition key.
///
/// Returns `None` when nothing is left after trimming and removing the port.
pub fn normalize_host(raw: &str) -> Option<String> {
    let raw = raw.trim();
    let host = if raw.starts_with('[') {
        match raw.find(']') {
            Some(end) => &raw[..=end],
            None => raw,
        }
    } else {
        raw.split(':').next().unwrap_or(raw)
    };

    if host.is_empty() {
        return None;
    }

    Some(host.to_ascii_lowercase())
}
