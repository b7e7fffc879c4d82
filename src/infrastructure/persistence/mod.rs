//! Item repository implementations.
//!
//! Concrete implementations of [`crate::domain::repositories::ItemRepository`].
//!
//! # Repositories
//!
//! - [`RedisItemRepository`] - one Redis hash per host, JSON values
//! - [`MemoryItemRepository`] - ordered in-process maps, for tests and local runs

pub mod memory_item_repository;
pub mod redis_item_repository;

pub use memory_item_repository::MemoryItemRepository;
pub use redis_item_repository::RedisItemRepository;
