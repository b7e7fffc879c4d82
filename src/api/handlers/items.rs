//! Handlers for item management endpoints.
//!
//! Every handler scopes its work to the host taken from the `Host` header.

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::item::{DeleteItemQuery, PatchItemRequest, PutItemRequest};
use crate::domain::entities::Item;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::extract_host::extract_host_from_headers;

/// Lists all items of the requesting host.
///
/// # Endpoint
///
/// `GET /api/all`
///
/// Items are ordered by `param`. An unknown host yields `[]`.
pub async fn list_items_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Vec<Item>>, AppError> {
    let host = extract_host_from_headers(&headers)?;

    let items = state.item_service.find_all(&host).await?;

    Ok(Json(items))
}

/// Returns a single item, including disabled ones.
///
/// # Endpoint
///
/// `GET /api/items/{param}`
///
/// # Errors
///
/// Returns 404 Not Found if the item doesn't exist.
pub async fn get_item_handler(
    Path(param): Path<String>,
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Item>, AppError> {
    let host = extract_host_from_headers(&headers)?;

    let item = state.item_service.get(&host, &param).await?;

    Ok(Json(item))
}

/// Creates or replaces an item.
///
/// # Endpoint
///
/// `PUT /api/items/{param}`
///
/// # Request Body
///
/// ```json
/// {
///   "url": "https://example.com",  // required, http(s) only
///   "description": "Example",      // optional, defaults to stored value
///   "count": 0                     // optional, defaults to stored value or 0
/// }
/// ```
///
/// The stored item is always re-enabled.
///
/// # Errors
///
/// Returns 400 Bad Request if the body is malformed or fails validation.
pub async fn put_item_handler(
    Path(param): Path<String>,
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<PutItemRequest>, JsonRejection>,
) -> Result<Json<Item>, AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let host = extract_host_from_headers(&headers)?;

    let input = payload.into_replace().ok_or_else(|| {
        AppError::bad_request("Validation failed", json!({"fields": {"url": ["required"]}}))
    })?;

    let item = state
        .item_service
        .create_or_replace(&host, &param, input)
        .await?;

    Ok(Json(item))
}

/// Partially updates an existing item.
///
/// # Endpoint
///
/// `PATCH /api/items/{param}`
///
/// # Request Body
///
/// Any subset of `description`, `url`, `count` and `unavailable`. Omitted
/// fields keep their stored value.
///
/// # Errors
///
/// Returns 404 Not Found if the item doesn't exist.
/// Returns 400 Bad Request if the body is malformed or fails validation.
pub async fn patch_item_handler(
    Path(param): Path<String>,
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<PatchItemRequest>, JsonRejection>,
) -> Result<Json<Item>, AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let host = extract_host_from_headers(&headers)?;
    let item = state.item_service.get(&host, &param).await?;

    let updated = state
        .item_service
        .update(&host, &item, payload.into())
        .await?;

    Ok(Json(updated))
}

/// Disables or permanently deletes an item.
///
/// # Endpoint
///
/// `DELETE /api/items/{param}[?permanently=true]`
///
/// # Behavior
///
/// - Default: the item is marked unavailable and returned with 200. Redirects
///   stop, but the record can be re-enabled with PUT or PATCH.
/// - `permanently=true`: the record is removed and 204 is returned.
///
/// # Errors
///
/// Returns 404 Not Found if the item doesn't exist.
/// Returns 400 Bad Request if `permanently` is not a boolean.
pub async fn delete_item_handler(
    Path(param): Path<String>,
    State(state): State<AppState>,
    headers: HeaderMap,
    query: Result<Query<DeleteItemQuery>, QueryRejection>,
) -> Result<Response, AppError> {
    let Query(query) = query?;

    let host = extract_host_from_headers(&headers)?;
    let item = state.item_service.get(&host, &param).await?;

    if query.permanently.unwrap_or(false) {
        state.item_service.delete(&host, &item).await?;
        tracing::info!(host = %host, param = %param, "Item deleted permanently");
        return Ok(StatusCode::NO_CONTENT.into_response());
    }

    let disabled = state.item_service.disable(&host, &item).await?;

    Ok(Json(disabled).into_response())
}
