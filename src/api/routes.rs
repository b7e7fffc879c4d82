//! API route configuration.
//!
//! All API endpoints require an `X-API-Key` header checked by
//! [`crate::api::middleware::auth`].

use crate::api::handlers::{
    api_not_found_handler, delete_item_handler, get_item_handler, list_items_handler,
    patch_item_handler, put_item_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{any, get},
};

/// All admin API routes, scoped to the request's host.
///
/// # Endpoints
///
/// - `GET    /all`            - List every item of the host
/// - `GET    /items/{param}`  - Fetch one item
/// - `PUT    /items/{param}`  - Create or replace an item
/// - `PATCH  /items/{param}`  - Partially update an item
/// - `DELETE /items/{param}`  - Disable, or remove with `?permanently=true`
///
/// The API root and unmatched paths answer 404. Apply authentication with
/// `.layer` rather than `.route_layer` so those are checked and audited too.
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/", any(api_not_found_handler))
        .route("/all", get(list_items_handler))
        .route(
            "/items/{param}",
            get(get_item_handler)
                .put(put_item_handler)
                .patch(patch_item_handler)
                .delete(delete_item_handler),
        )
        .fallback(api_not_found_handler)
}
