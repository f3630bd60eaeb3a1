//! Helper functions shared by services and handlers.
//!
//! - [`ids`] - Parsing opaque path identifiers into storage ids

pub mod ids;
