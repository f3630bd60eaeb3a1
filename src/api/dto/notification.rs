//! DTOs for notifications.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{NewNotification, Notification};

/// Request body for `POST /notifications`.
#[derive(Debug, Deserialize, Validate)]
pub struct SendNotificationRequest {
    #[validate(length(min = 1, max = 128))]
    pub user_id: String,

    #[validate(length(min = 1, max = 200))]
    pub title: String,

    #[validate(length(min = 1, max = 2000))]
    pub message: String,
}

impl From<SendNotificationRequest> for NewNotification {
    fn from(req: SendNotificationRequest) -> Self {
        NewNotification {
            user_id: req.user_id,
            title: req.title,
            message: req.message,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct NotificationItem {
    pub id: i64,
    pub user_id: String,
    pub title: String,
    pub message: String,
    pub is_read: bool,
    pub read_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl From<Notification> for NotificationItem {
    fn from(n: Notification) -> Self {
        NotificationItem {
            id: n.id,
            user_id: n.user_id,
            title: n.title,
            message: n.message,
            is_read: n.is_read,
            read_at: n.read_at,
            created_at: n.created_at,
        }
    }
}

/// Notifications for one user, newest first.
#[derive(Debug, Serialize)]
pub struct NotificationListResponse {
    pub items: Vec<NotificationItem>,
}
