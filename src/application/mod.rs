//! Application layer services implementing business logic.
//!
//! Services consume repository traits and give HTTP handlers a small API
//! that already speaks [`crate::error::AppError`].
//!
//! # Available Services
//!
//! - [`services::driver_service::DriverService`] - Driver registration and updates
//! - [`services::notification_service::NotificationService`] - Notification delivery and read state

pub mod services;
