//! Item lifecycle service.

use std::sync::Arc;

use crate::domain::entities::{Item, ItemFields, ItemPatch, ReplaceItem};
use crate::domain::repositories::ItemRepository;
use crate::error::AppError;

/// Use cases over the item store.
///
/// `find_all`, `find`, `upsert`, `update` and `delete` pass straight through to
/// the repository. `increment_count` and `disable` are partial updates built on
/// `update`, and inherit its last-writer-wins merge: two increments from the
/// same snapshot both write `count + 1`, so one hit is lost. That race is
/// deliberate and covered by tests; see `DESIGN.md`.
pub struct ItemService<R: ItemRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: ItemRepository + ?Sized> ItemService<R> {
    /// Creates a new item service over an injected repository.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Lists every item of `host`; unknown hosts yield an empty list.
    pub async fn find_all(&self, host: &str) -> Result<Vec<Item>, AppError> {
        Ok(self.repository.find_all(host).await?)
    }

    pub async fn find(&self, host: &str, param: &str) -> Result<Option<Item>, AppError> {
        Ok(self.repository.find(host, param).await?)
    }

    pub async fn upsert(&self, host: &str, fields: ItemFields) -> Result<Item, AppError> {
        Ok(self.repository.upsert(host, fields).await?)
    }

    pub async fn update(&self, host: &str, item: &Item, patch: ItemPatch) -> Result<Item, AppError> {
        Ok(self.repository.update(host, item, patch).await?)
    }

    /// Adds one hit to the `item` snapshot's counter.
    ///
    /// Not atomic: concurrent calls with the same snapshot under-count.
    pub async fn increment_count(&self, host: &str, item: &Item) -> Result<Item, AppError> {
        let patch = ItemPatch {
            count: Some(item.count().saturating_add(1)),
            ..Default::default()
        };
        self.update(host, item, patch).await
    }

    /// Marks the item unavailable. URL, count and description are kept.
    pub async fn disable(&self, host: &str, item: &Item) -> Result<Item, AppError> {
        let patch = ItemPatch {
            unavailable: Some(true),
            ..Default::default()
        };
        self.update(host, item, patch).await
    }

    /// Permanently removes the item.
    pub async fn delete(&self, host: &str, item: &Item) -> Result<(), AppError> {
        Ok(self.repository.delete(host, item).await?)
    }

    /// Retrieves an item, mapping absence to [`AppError::NotFound`].
    pub async fn get(&self, host: &str, param: &str) -> Result<Item, AppError> {
        self.find(host, param)
            .await?
            .ok_or_else(|| AppError::not_found("Item not found"))
    }

    /// Creates the item or replaces the stored one.
    ///
    /// Omitted `description` and `count` fall back to the existing record;
    /// `count` starts at 0 for new items. The result is always available.
    pub async fn create_or_replace(
        &self,
        host: &str,
        param: &str,
        input: ReplaceItem,
    ) -> Result<Item, AppError> {
        let existing = self.find(host, param).await?;

        let (existing_description, existing_count) = match existing {
            Some(item) => {
                let fields = item.into_fields();
                (fields.description, Some(fields.count))
            }
            None => (None, None),
        };

        let fields = ItemFields {
            param: param.to_string(),
            description: input.description.or(existing_description),
            url: input.url,
            count: input.count.or(existing_count).unwrap_or(0),
            unavailable: false,
        };

        self.upsert(host, fields).await
    }

    /// Resolves `param` to its redirect target.
    ///
    /// Absent and unavailable items are both [`AppError::NotFound`]. When
    /// `count_hit` is set the counter is incremented before returning.
    pub async fn resolve_redirect(
        &self,
        host: &str,
        param: &str,
        count_hit: bool,
    ) -> Result<String, AppError> {
        let item = self.get(host, param).await?;

        let url = item
            .url()
            .map(str::to_string)
            .ok_or_else(|| AppError::not_found("Item is unavailable"))?;

        if count_hit {
            self.increment_count(host, &item).await?;
        }

        Ok(url)
    }
}
