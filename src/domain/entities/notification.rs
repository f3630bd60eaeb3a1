//! Domain entity representing a user notification.

use chrono::{DateTime, Utc};

/// A notification addressed to a single user.
///
/// `user_id` is an opaque recipient reference owned by whoever sends the
/// notification; the service never interprets it.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: i64,
    pub user_id: String,
    pub title: String,
    pub message: String,
    pub is_read: bool,
    pub read_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    /// Moves the notification into the read state.
    ///
    /// Idempotent: the first `read_at` is kept on repeated calls.
    pub fn mark_read(&mut self, now: DateTime<Utc>) {
        if !self.is_read {
            self.is_read = true;
            self.read_at = Some(now);
        }
    }
}

/// Input data for sending a notification.
#[derive(Debug, Clone, PartialEq)]
pub struct NewNotification {
    pub user_id: String,
    pub title: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mark_read_keeps_first_timestamp() {
        let created = Utc::now();
        let mut notification = Notification {
            id: 7,
            user_id: "user-1".to_string(),
            title: "Pickup".to_string(),
            message: "Order 12 is ready".to_string(),
            is_read: false,
            read_at: None,
            created_at: created,
        };

        let first = created + chrono::Duration::seconds(1);
        notification.mark_read(first);
        notification.mark_read(first + chrono::Duration::seconds(10));

        assert!(notification.is_read);
        assert_eq!(notification.read_at, Some(first));
    }
}
