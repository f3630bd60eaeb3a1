//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures. Creation and update inputs live in
//! separate structs:
//! - `NewDriver`, `NewNotification` - For creating new records
//! - `DriverPatch` - For partial updates
//!
//! # Entity Types
//!
//! - [`Driver`] - A driver available for dispatch
//! - [`Notification`] - A message addressed to a user

pub mod driver;
pub mod notification;

pub use driver::{Driver, DriverPatch, DriverStatus, NewDriver};
pub use notification::{NewNotification, Notification};
