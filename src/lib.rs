//! # KV URL Shortener
//!
//! A host-scoped URL shortening service built with Axum on top of a
//! key-value store.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Item entity, repository trait and audit events
//! - **Application Layer** ([`application`]) - Item lifecycle and API key checks
//! - **Infrastructure Layer** ([`infrastructure`]) - Redis/in-memory stores and audit sinks
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! ## Features
//!
//! - Short identifiers scoped per `Host` header
//! - Hit counting on redirect
//! - Soft disable and permanent delete
//! - API key protected admin CRUD
//! - Fire-and-forget audit notifications to Discord webhooks
//!
//! ## Quick Start
//!
//! ```bash
//! export REDIS_URL="redis://localhost:6379"  # Optional, in-memory otherwise
//! export API_KEYS="change-me"
//!
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{AuthService, ItemService};
    pub use crate::domain::entities::{Item, ItemFields, ItemPatch};
    pub use crate::domain::repositories::ItemRepository;
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
