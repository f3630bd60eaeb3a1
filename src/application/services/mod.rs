//! Business logic services for the application layer.

pub mod driver_service;
pub mod notification_service;

pub use driver_service::DriverService;
pub use notification_service::NotificationService;
