//! Repository trait definitions for the domain layer.
//!
//! This module defines the storage contract the rest of the crate programs
//! against. Concrete backends live in `crate::infrastructure::persistence`.
//!
//! # Available Repositories
//!
//! - [`ItemRepository`] - Item CRUD keyed by `(host, param)`

pub mod item_repository;

pub use item_repository::ItemRepository;

#[cfg(test)]
pub use item_repository::MockItemRepository;
