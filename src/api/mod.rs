//! REST API layer for HTTP request/response handling.
//!
//! # Modules
//!
//! - [`dto`] - Data Transfer Objects for request/response serialization
//! - [`handlers`] - HTTP request handlers (route delegates)
//! - [`middleware`] - Async error adapter, error pipeline and tracing
//! - [`route_table`] - Explicit `(method, path) -> delegate` tables
//! - [`routes`] - Driver and notification route tables

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod route_table;
pub mod routes;
