//! In-memory notification repository.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::entities::{NewNotification, Notification};
use crate::domain::repositories::NotificationRepository;
use crate::error::AppError;

/// Notification storage backed by a process-local vector, in insertion order.
pub struct MemoryNotificationRepository {
    notifications: RwLock<Vec<Notification>>,
}

impl MemoryNotificationRepository {
    pub fn new() -> Self {
        debug!("Using in-memory notification storage");
        Self {
            notifications: RwLock::new(Vec::new()),
        }
    }
}

impl Default for MemoryNotificationRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NotificationRepository for MemoryNotificationRepository {
    async fn create(&self, new_notification: NewNotification) -> Result<Notification, AppError> {
        let mut notifications = self.notifications.write().await;

        let notification = Notification {
            id: notifications.len() as i64 + 1,
            user_id: new_notification.user_id,
            title: new_notification.title,
            message: new_notification.message,
            is_read: false,
            read_at: None,
            created_at: Utc::now(),
        };
        notifications.push(notification.clone());

        Ok(notification)
    }

    async fn list_for_user(&self, user_id: &str) -> Result<Vec<Notification>, AppError> {
        // Insertion order is creation order, so reversing gives newest first.
        Ok(self
            .notifications
            .read()
            .await
            .iter()
            .rev()
            .filter(|n| n.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn mark_read(&self, id: i64) -> Result<Option<Notification>, AppError> {
        let mut notifications = self.notifications.write().await;

        let Some(notification) = notifications.iter_mut().find(|n| n.id == id) else {
            return Ok(None);
        };
        notification.mark_read(Utc::now());

        Ok(Some(notification.clone()))
    }

    async fn health_check(&self) -> bool {
        true
    }
}
