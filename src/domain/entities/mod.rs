//! Core domain entities.
//!
//! # Entity Types
//!
//! - [`Item`] - A shortened URL record within a host
//! - [`ItemFields`] - The persisted shape of an item
//! - [`ItemPatch`] - Partial update, `None` means unchanged
//! - [`ReplaceItem`] - Input for create-or-replace

pub mod item;

pub use item::{Item, ItemFields, ItemPatch, ReplaceItem};
