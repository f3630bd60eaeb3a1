//! Repository trait for notification storage.

use crate::domain::entities::{NewNotification, Notification};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for notifications.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgNotificationRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::memory::MemoryNotificationRepository`] - In-process fallback
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NotificationRepository: Send + Sync {
    /// Stores a new, unread notification.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn create(&self, new_notification: NewNotification) -> Result<Notification, AppError>;

    /// Lists notifications for a user, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn list_for_user(&self, user_id: &str) -> Result<Vec<Notification>, AppError>;

    /// Marks a notification as read, keeping an existing `read_at`.
    /// Returns `None` if the notification does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn mark_read(&self, id: i64) -> Result<Option<Notification>, AppError>;

    /// Returns `true` when the backing store answers.
    async fn health_check(&self) -> bool;
}
