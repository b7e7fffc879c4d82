//! Item entity representing a shortened URL record within a host.

use serde::{Deserialize, Serialize};

/// The persisted field set of an item.
///
/// This is the exact shape stored under a `(host, param)` key and returned by
/// the admin API. `url` always holds the raw destination, even when the item
/// is unavailable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemFields {
    pub param: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub url: String,
    pub count: u64,
    pub unavailable: bool,
}

/// A shortened URL mapping.
///
/// Immutable value object: every mutation goes through the repository and
/// yields a fresh `Item`. The host is not part of the item; it only selects
/// the key space the item lives in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Item {
    fields: ItemFields,
}

impl Item {
    /// Creates an item from its stored fields.
    pub fn new(fields: ItemFields) -> Self {
        Self { fields }
    }

    pub fn param(&self) -> &str {
        &self.fields.param
    }

    pub fn description(&self) -> Option<&str> {
        self.fields.description.as_deref()
    }

    /// Destination to redirect to, or `None` when the item is unavailable.
    pub fn url(&self) -> Option<&str> {
        if self.fields.unavailable {
            return None;
        }
        Some(&self.fields.url)
    }

    /// Stored destination regardless of availability.
    pub fn raw_url(&self) -> &str {
        &self.fields.url
    }

    pub fn count(&self) -> u64 {
        self.fields.count
    }

    pub fn is_unavailable(&self) -> bool {
        self.fields.unavailable
    }

    pub fn fields(&self) -> &ItemFields {
        &self.fields
    }

    pub fn into_fields(self) -> ItemFields {
        self.fields
    }

    /// Overlays `patch` on this item's fields.
    ///
    /// Fields left as `None` in the patch keep the value from `self`, which
    /// is the caller's snapshot and not necessarily the stored state.
    pub fn merged_with(&self, patch: ItemPatch) -> ItemFields {
        let base = self.fields.clone();
        ItemFields {
            param: base.param,
            description: patch.description.or(base.description),
            url: patch.url.unwrap_or(base.url),
            count: patch.count.unwrap_or(base.count),
            unavailable: patch.unavailable.unwrap_or(base.unavailable),
        }
    }
}

impl From<ItemFields> for Item {
    fn from(fields: ItemFields) -> Self {
        Self::new(fields)
    }
}

/// Partial update for an existing item.
///
/// `None` fields are left unchanged. `param` is not patchable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemPatch {
    pub description: Option<String>,
    pub url: Option<String>,
    pub count: Option<u64>,
    pub unavailable: Option<bool>,
}


/// Input for the create-or-replace use case.
///
/// `description` and `count` fall back to the existing record when omitted.
#[derive(Debug, Clone)]
pub struct ReplaceItem {
    pub description: Option<String>,
    pub url: String,
    pub count: Option<u64>,
}
