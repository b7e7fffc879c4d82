//! Handler for short URL redirect.

use axum::{
    extract::{Path, RawQuery, State},
    http::{HeaderMap, Method},
    response::{IntoResponse, Redirect},
};

use crate::error::AppError;
use crate::state::AppState;
use crate::utils::extract_host::extract_host_from_headers;

/// Redirects a short identifier to its destination URL.
///
/// # Endpoint
///
/// `GET /{param}` (also answers `HEAD`)
///
/// # Request Flow
///
/// 1. Reject any request carrying query parameters
/// 2. Extract the host from the `Host` header
/// 3. Look up the item; absent or disabled items are not found
/// 4. On `GET`, increment the hit counter before responding
/// 5. Return 307 Temporary Redirect
///
/// The counter update is a read-modify-write and may lose hits under
/// concurrent requests for the same item.
///
/// # Errors
///
/// Returns 404 Not Found (empty body) for query strings, unknown or disabled
/// items, and a missing `Host` header.
pub async fn redirect_handler(
    Path(param): Path<String>,
    State(state): State<AppState>,
    method: Method,
    RawQuery(query): RawQuery,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    if has_query_params(query.as_deref()) {
        return Err(AppError::not_found("Query parameters are not allowed"));
    }

    let host = extract_host_from_headers(&headers)?;

    let url = state
        .item_service
        .resolve_redirect(&host, &param, method == Method::GET)
        .await?;

    Ok(Redirect::temporary(&url))
}

fn has_query_params(query: Option<&str>) -> bool {
    query.is_some_and(|q| url::form_urlencoded::parse(q.as_bytes()).next().is_some())
}
