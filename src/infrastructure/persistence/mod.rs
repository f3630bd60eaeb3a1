//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx.
//! Schema lives in `migrations/` and is applied at startup.
//!
//! # Repositories
//!
//! - [`PgDriverRepository`] - Driver storage
//! - [`PgNotificationRepository`] - Notification storage and read state

pub mod pg_driver_repository;
pub mod pg_notification_repository;

pub use pg_driver_repository::PgDriverRepository;
pub use pg_notification_repository::PgNotificationRepository;
