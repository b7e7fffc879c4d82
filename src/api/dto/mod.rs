//! Data Transfer Objects for API requests.
//!
//! Request bodies use Serde for deserialization and validator for input
//! validation. Responses serialize [`crate::domain::entities::Item`] directly.

pub mod item;
