//! Application layer services implementing the use cases.
//!
//! Services consume repository traits and give HTTP handlers and the admin
//! CLI a single entry point per use case.
//!
//! # Available Services
//!
//! - [`services::item_service::ItemService`] - Item lifecycle and redirect resolution
//! - [`services::auth_service::AuthService`] - API key allow-list checks

pub mod services;
