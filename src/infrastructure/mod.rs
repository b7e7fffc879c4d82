//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`audit`] - Audit sinks (Discord webhooks and no-op)
//! - [`persistence`] - Item store backends (Redis and in-memory)

pub mod audit;
pub mod persistence;
