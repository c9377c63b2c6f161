//! HTTP middleware for request processing and protection.
//!
//! Provides basic authentication, request ids, panic recovery, timeouts and
//! observability middleware.

pub mod auth;
pub mod recovery;
pub mod request_id;
pub mod tracing;
