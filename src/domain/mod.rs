//! Domain layer containing business entities and contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//! - [`audit_event`] - Audit event model
//! - [`audit_worker`] - Asynchronous audit delivery worker
//!
//! # Design Principles
//!
//! - Entities carry no I/O; storage is reached only through repository traits
//! - Repository traits define contracts implemented by the infrastructure layer
//! - Use cases live in services (see [`crate::application::services`])
//!
//! # Audit Flow
//!
//! 1. Middleware captures [`audit_event::RequestMeta`] and the response status
//! 2. An [`audit_event::AuditEvent`] is pushed with `try_send` (never blocks)
//! 3. [`audit_worker::run_audit_worker`] delivers it to the configured sink
//! 4. Sink failures are logged and dropped

pub mod audit_event;
pub mod audit_worker;
pub mod entities;
pub mod repositories;
