//! Repository trait for item data access.

use crate::domain::entities::{Item, ItemFields, ItemPatch};
use crate::error::StoreError;
use async_trait::async_trait;

/// Repository interface for items keyed by `(host, param)`.
///
/// Every operation touches exactly one key, except [`find_all`](Self::find_all)
/// which enumerates one host. Backend failures are reported as [`StoreError`]
/// tagged with the failed operation; nothing is retried.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::RedisItemRepository`] - Redis implementation
/// - [`crate::infrastructure::persistence::MemoryItemRepository`] - in-process, deterministic
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_memory.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Lists every item stored under `host`, ordered by param.
    ///
    /// Unknown hosts yield an empty vector.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] tagged `find all` on backend errors.
    async fn find_all(&self, host: &str) -> Result<Vec<Item>, StoreError>;

    /// Finds a single item.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Item))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] tagged `find` on backend errors.
    async fn find(&self, host: &str, param: &str) -> Result<Option<Item>, StoreError>;

    /// Writes the full field set under `(host, fields.param)` and returns the
    /// value read back from the store.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] tagged `upsert` if the write fails or the value
    /// cannot be read back.
    async fn upsert(&self, host: &str, fields: ItemFields) -> Result<Item, StoreError>;

    /// Merges `patch` over the `item` snapshot and upserts the result.
    ///
    /// The merge base is the caller's snapshot, not the stored state, so a
    /// concurrent writer's change to the same key can be overwritten.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] tagged `update` on backend errors.
    async fn update(&self, host: &str, item: &Item, patch: ItemPatch) -> Result<Item, StoreError>;

    /// Permanently removes the item. Removing a missing key is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] tagged `delete` on backend errors.
    async fn delete(&self, host: &str, item: &Item) -> Result<(), StoreError>;
}
