//! In-process implementation of the item repository.

use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

use crate::domain::entities::{Item, ItemFields, ItemPatch};
use crate::domain::repositories::ItemRepository;
use crate::error::{StoreError, StoreOperation};

type HostItems = BTreeMap<String, ItemFields>;

/// Ordered in-memory store keyed by host, then param.
///
/// Deterministic and failure-free; used by tests and as the fallback backend
/// when no Redis connection is configured. Nothing survives a restart.
#[derive(Default)]
pub struct MemoryItemRepository {
    hosts: RwLock<BTreeMap<String, HostItems>>,
}

impl MemoryItemRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository pre-populated with `items` under `host`.
    pub fn with_items(host: &str, items: impl IntoIterator<Item = ItemFields>) -> Self {
        let host_items: HostItems = items
            .into_iter()
            .map(|fields| (fields.param.clone(), fields))
            .collect();

        let mut hosts = BTreeMap::new();
        hosts.insert(host.to_string(), host_items);

        Self {
            hosts: RwLock::new(hosts),
        }
    }
}

#[async_trait]
impl ItemRepository for MemoryItemRepository {
    async fn find_all(&self, host: &str) -> Result<Vec<Item>, StoreError> {
        let hosts = self.hosts.read().await;

        Ok(hosts
            .get(host)
            .map(|items| items.values().cloned().map(Item::new).collect())
            .unwrap_or_default())
    }

    async fn find(&self, host: &str, param: &str) -> Result<Option<Item>, StoreError> {
        let hosts = self.hosts.read().await;

        Ok(hosts
            .get(host)
            .and_then(|items| items.get(param))
            .cloned()
            .map(Item::new))
    }

    async fn upsert(&self, host: &str, fields: ItemFields) -> Result<Item, StoreError> {
        {
            let mut hosts = self.hosts.write().await;
            hosts
                .entry(host.to_string())
                .or_default()
                .insert(fields.param.clone(), fields.clone());
        }

        // Read back through the same path as callers do.
        self.find(host, &fields.param)
            .await
            .map_err(|e| e.retag(StoreOperation::Upsert))?
            .ok_or_else(|| StoreError::new(StoreOperation::Upsert, "item missing after write"))
    }

    async fn update(&self, host: &str, item: &Item, patch: ItemPatch) -> Result<Item, StoreError> {
        let merged = item.merged_with(patch);
        self.upsert(host, merged)
            .await
            .map_err(|e| e.retag(StoreOperation::Update))
    }

    async fn delete(&self, host: &str, item: &Item) -> Result<(), StoreError> {
        let mut hosts = self.hosts.write().await;

        if let Some(items) = hosts.get_mut(host) {
            items.remove(item.param());
            if items.is_empty() {
                hosts.remove(host);
            }
        }

        Ok(())
    }
}
