//! Redis implementation of the item repository.

use async_trait::async_trait;
use redis::{AsyncCommands, Client, aio::ConnectionManager};
use std::collections::BTreeMap;
use tracing::{debug, info};

use crate::domain::entities::{Item, ItemFields, ItemPatch};
use crate::domain::repositories::ItemRepository;
use crate::error::{StoreError, StoreOperation};

/// Redis-backed item store.
///
/// Each host is one hash at `{key_prefix}{host}`; each field of that hash is a
/// param and holds the JSON-encoded [`ItemFields`]. `HGET`/`HSET`/`HDEL` give
/// atomic single-key operations and `HGETALL` enumerates one host.
///
/// The `ConnectionManager` is cheap to clone and reconnects on its own, so a
/// single instance is shared by every request.
pub struct RedisItemRepository {
    client: ConnectionManager,
    key_prefix: String,
}

impl RedisItemRepository {
    /// Connects to Redis and validates the connection with a PING.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid, the connection cannot be
    /// established, or the PING fails.
    pub async fn connect(redis_url: &str, key_prefix: &str) -> Result<Self, redis::RedisError> {
        info!("Connecting to Redis item store");

        let client = Client::open(redis_url)?;
        let manager = ConnectionManager::new(client).await?;

        let mut test_conn = manager.clone();
        test_conn.ping::<()>().await?;

        info!("✓ Connected to Redis");

        Ok(Self {
            client: manager,
            key_prefix: key_prefix.to_string(),
        })
    }

    /// Checks that the server still answers.
    pub async fn ping(&self) -> bool {
        let mut conn = self.client.clone();
        conn.ping::<()>().await.is_ok()
    }

    fn host_key(&self, host: &str) -> String {
        format!("{}{}", self.key_prefix, host)
    }

    fn decode(operation: StoreOperation, raw: &str) -> Result<Item, StoreError> {
        serde_json::from_str::<ItemFields>(raw)
            .map(Item::new)
            .map_err(|e| StoreError::new(operation, e))
    }
}

#[async_trait]
impl ItemRepository for RedisItemRepository {
    async fn find_all(&self, host: &str) -> Result<Vec<Item>, StoreError> {
        let key = self.host_key(host);
        let mut conn = self.client.clone();

        let entries: BTreeMap<String, String> = conn
            .hgetall(&key)
            .await
            .map_err(|e| StoreError::new(StoreOperation::FindAll, e))?;

        debug!(host, count = entries.len(), "Listed items");

        entries
            .values()
            .map(|raw| Self::decode(StoreOperation::FindAll, raw))
            .collect()
    }

    async fn find(&self, host: &str, param: &str) -> Result<Option<Item>, StoreError> {
        let key = self.host_key(host);
        let mut conn = self.client.clone();

        let raw: Option<String> = conn
            .hget(&key, param)
            .await
            .map_err(|e| StoreError::new(StoreOperation::Find, e))?;

        raw.map(|raw| Self::decode(StoreOperation::Find, &raw))
            .transpose()
    }

    async fn upsert(&self, host: &str, fields: ItemFields) -> Result<Item, StoreError> {
        let key = self.host_key(host);
        let mut conn = self.client.clone();

        let raw = serde_json::to_string(&fields)
            .map_err(|e| StoreError::new(StoreOperation::Upsert, e))?;

        conn.hset::<_, _, _, ()>(&key, &fields.param, raw)
            .await
            .map_err(|e| StoreError::new(StoreOperation::Upsert, e))?;

        debug!(host, param = %fields.param, "Item written");

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
        let key = self.host_key(host);
        let mut conn = self.client.clone();

        let removed: i64 = conn
            .hdel(&key, item.param())
            .await
            .map_err(|e| StoreError::new(StoreOperation::Delete, e))?;

        if removed > 0 {
            debug!(host, param = item.param(), "Item deleted");
        }

        Ok(())
    }
}
