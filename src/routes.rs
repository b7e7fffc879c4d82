//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`         - Greeting (public)
//! - `GET  /{param}`  - Short link redirect (public)
//! - `/api`, `/api/*` - Admin API (`X-API-Key` required, unknown paths included)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response spans
//! - **Access log** - Combined-log line and audit event for public routes
//! - **Authentication** - API key allow-list and audit event for admin routes
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{home_handler, redirect_handler};
use crate::api::middleware::{access_log, auth, tracing};
use crate::state::AppState;
use axum::routing::get;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Builds the routes and middleware without path normalization.
///
/// Integration tests drive this router directly.
pub fn build_router(state: AppState) -> Router {
    let api_router = api::routes::protected_routes()
        .layer(middleware::from_fn_with_state(state.clone(), auth::layer));

    let public_router = Router::new()
        .route("/", get(home_handler))
        .route("/{param}", get(redirect_handler))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            access_log::layer,
        ));

    Router::new()
        .merge(public_router)
        .nest("/api", api_router)
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the application service with trailing slashes trimmed before
/// routing, so `/abc/` resolves like `/abc`.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(build_router(state))
}
