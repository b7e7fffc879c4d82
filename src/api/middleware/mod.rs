//! HTTP middleware for request processing and protection.
//!
//! Provides API key authentication, access logging and observability
//! middleware.

pub mod access_log;
pub mod auth;
pub mod request_meta;
pub mod tracing;
