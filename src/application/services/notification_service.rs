//! Notification delivery service.

use crate::domain::entities::{NewNotification, Notification};
use crate::domain::repositories::NotificationRepository;
use crate::error::AppError;
use crate::utils::ids::parse_id;
use serde_json::json;
use std::sync::Arc;

/// Service behind the notification routes.
pub struct NotificationService<R: NotificationRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: NotificationRepository + ?Sized> NotificationService<R> {
    /// Creates a new notification service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Stores a notification for later retrieval by its recipient.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the recipient, title or message is blank.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn send_notification(
        &self,
        new_notification: NewNotification,
    ) -> Result<Notification, AppError> {
        let user_id = new_notification.user_id.trim().to_string();
        let title = new_notification.title.trim().to_string();
        let message = new_notification.message.trim().to_string();

        for (field, value) in [("user_id", &user_id), ("title", &title), ("message", &message)] {
            if value.is_empty() {
                return Err(AppError::bad_request(
                    format!("Field '{field}' must not be blank"),
                    json!({ "field": field }),
                ));
            }
        }

        let notification = self
            .repository
            .create(NewNotification {
                user_id,
                title,
                message,
            })
            .await?;
        tracing::info!(
            notification_id = notification.id,
            user_id = %notification.user_id,
            "Notification sent"
        );

        Ok(notification)
    }

    /// Lists every notification addressed to `user_id`, newest first.
    ///
    /// An unknown user simply has no notifications.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn list_for_user(&self, user_id: &str) -> Result<Vec<Notification>, AppError> {
        self.repository.list_for_user(user_id).await
    }

    /// Marks a notification as read.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the id is malformed.
    /// Returns [`AppError::NotFound`] if the notification does not exist.
    pub async fn mark_read(&self, raw_id: &str) -> Result<Notification, AppError> {
        let id = parse_id(raw_id, "notification")?;

        self.repository
            .mark_read(id)
            .await?
            .ok_or_else(|| AppError::not_found("Notification not found", json!({ "id": id })))
    }

    /// Reports whether notification storage is reachable.
    pub async fn health_check(&self) -> bool {
        self.repository.health_check().await
    }
}
