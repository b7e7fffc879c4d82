//! API key authentication middleware.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::api::middleware::request_meta;
use crate::application::services::hash_api_key;
use crate::domain::audit_event::{ApiAccess, AuditEvent};
use crate::{error::AppError, state::AppState};

/// Header carrying the admin API key.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Authenticates admin requests using the `X-API-Key` header.
///
/// # Header Format
///
/// ```text
/// X-API-Key: <key>
/// ```
///
/// # Authentication Flow
///
/// 1. Read the key from `X-API-Key`
/// 2. Check it against the configured allow-list
/// 3. On failure, queue an `Unauthorized`/`Forbidden` audit event and reject
/// 4. On success, run the handler and queue an `Accessed` event with its status
///
/// Audit events carry the SHA-256 of the key, never the key itself.
///
/// # Errors
///
/// Returns `401 Unauthorized` if the header is missing or empty, or no keys are
/// configured, and `403 Forbidden` if the key is not in the allow-list.
///
/// # Example
///
/// ```rust,ignore
/// let protected = Router::new()
///     .route("/all", get(list_items_handler))
///     .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));
/// ```
pub async fn layer(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let meta = request_meta::capture(&req);

    let api_key = req
        .headers()
        .get(API_KEY_HEADER)
        .and_then(|v| v.to_str().ok())
        .filter(|k| !k.is_empty())
        .map(str::to_string);
    let hashed = hash_api_key(api_key.as_deref());

    if let Err(e) = st.auth_service.authenticate(api_key.as_deref()) {
        let access = match e {
            AppError::Forbidden { .. } => ApiAccess::Forbidden,
            _ => ApiAccess::Unauthorized,
        };
        tracing::warn!(uri = %meta.uri, hashed_api_key = %hashed, "{}", access);
        st.emit_audit(AuditEvent::api(meta, e.status_code().as_u16(), access, hashed));
        return Err(e);
    }

    let response = next.run(req).await;

    st.emit_audit(AuditEvent::api(
        meta,
        response.status().as_u16(),
        ApiAccess::Accessed,
        hashed,
    ));

    Ok(response)
}
