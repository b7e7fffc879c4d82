//! Utility functions for request handling and input validation.
//!
//! - [`extract_host`] - Store partition key from the `Host` header
//! - [`http_url`] - HTTP(S)-only destination URL validation

pub mod extract_host;
pub mod http_url;
