//! In-process repositories.
//!
//! Used when no database is configured (local development, handler tests).
//! Data lives for the lifetime of the process only.

mod memory_driver_repository;
mod memory_notification_repository;

pub use memory_driver_repository::MemoryDriverRepository;
pub use memory_notification_repository::MemoryNotificationRepository;
