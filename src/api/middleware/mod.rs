//! HTTP middleware for request processing.
//!
//! Provides the async error adapter, the error pipeline it feeds, and
//! request tracing.

pub mod error_pipeline;
pub mod forward_errors;
pub mod tracing;
