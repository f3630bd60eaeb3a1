//! PostgreSQL implementation of the notification repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use crate::domain::entities::{NewNotification, Notification};
use crate::domain::repositories::NotificationRepository;
use crate::error::AppError;

#[derive(FromRow)]
struct NotificationRow {
    id: i64,
    user_id: String,
    title: String,
    message: String,
    is_read: bool,
    read_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
}

impl From<NotificationRow> for Notification {
    fn from(row: NotificationRow) -> Self {
        Notification {
            id: row.id,
            user_id: row.user_id,
            title: row.title,
            message: row.message,
            is_read: row.is_read,
            read_at: row.read_at,
            created_at: row.created_at,
        }
    }
}

/// PostgreSQL repository for notifications.
pub struct PgNotificationRepository {
    pool: Arc<PgPool>,
}

impl PgNotificationRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl NotificationRepository for PgNotificationRepository {
    async fn create(&self, new_notification: NewNotification) -> Result<Notification, AppError> {
        let row = sqlx::query_as::<_, NotificationRow>(
            r#"
            INSERT INTO notifications (user_id, title, message)
            VALUES ($1, $2, $3)
            RETURNING id, user_id, title, message, is_read, read_at, created_at
            "#,
        )
        .bind(new_notification.user_id)
        .bind(new_notification.title)
        .bind(new_notification.message)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn list_for_user(&self, user_id: &str) -> Result<Vec<Notification>, AppError> {
        let rows = sqlx::query_as::<_, NotificationRow>(
            r#"
            SELECT id, user_id, title, message, is_read, read_at, created_at
            FROM notifications
            WHERE user_id = $1
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Notification::from).collect())
    }

    async fn mark_read(&self, id: i64) -> Result<Option<Notification>, AppError> {
        let row = sqlx::query_as::<_, NotificationRow>(
            r#"
            UPDATE notifications
            SET is_read = TRUE,
                read_at = COALESCE(read_at, NOW())
            WHERE id = $1
            RETURNING id, user_id, title, message, is_read, read_at, created_at
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Notification::from))
    }

    async fn health_check(&self) -> bool {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await
            .is_ok()
    }
}
