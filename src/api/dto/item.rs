//! DTOs for the item management endpoints.

use serde::Deserialize;
use validator::Validate;

use crate::domain::entities::{ItemPatch, ReplaceItem};
use crate::utils::http_url::validate_http_url;

/// Request body for `PUT /api/items/{param}`.
///
/// `description` and `count` fall back to the stored record when omitted.
/// Negative or fractional counts fail deserialization.
#[derive(Debug, Deserialize, Validate)]
pub struct PutItemRequest {
    pub description: Option<String>,

    #[validate(required(message = "url is required"), custom(function = "validate_http_url"))]
    pub url: Option<String>,

    pub count: Option<u64>,
}

impl PutItemRequest {
    /// Converts a validated request into the service input.
    ///
    /// Returns `None` if `url` is missing; call [`Validate::validate`] first.
    pub fn into_replace(self) -> Option<ReplaceItem> {
        Some(ReplaceItem {
            description: self.description,
            url: self.url?,
            count: self.count,
        })
    }
}

/// Request body for `PATCH /api/items/{param}`.
///
/// All fields are optional; omitted fields keep their stored value.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct PatchItemRequest {
    pub description: Option<String>,

    #[validate(custom(function = "validate_http_url"))]
    pub url: Option<String>,

    pub count: Option<u64>,

    pub unavailable: Option<bool>,
}

impl From<PatchItemRequest> for ItemPatch {
    fn from(req: PatchItemRequest) -> Self {
        ItemPatch {
            description: req.description,
            url: req.url,
            count: req.count,
            unavailable: req.unavailable,
        }
    }
}

/// Query parameters for `DELETE /api/items/{param}`.
#[derive(Debug, Default, Deserialize)]
pub struct DeleteItemQuery {
    /// `true` removes the record; otherwise the item is only disabled.
    pub permanently: Option<bool>,
}
