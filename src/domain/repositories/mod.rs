//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; implementations live in
//! `crate::infrastructure`. Mock implementations are generated via `mockall`
//! for unit tests.
//!
//! # Available Repositories
//!
//! - [`DriverRepository`] - Driver CRUD operations
//! - [`NotificationRepository`] - Notification delivery and read state

pub mod driver_repository;
pub mod notification_repository;

pub use driver_repository::DriverRepository;
pub use notification_repository::NotificationRepository;

#[cfg(test)]
pub use driver_repository::MockDriverRepository;
#[cfg(test)]
pub use notification_repository::MockNotificationRepository;
