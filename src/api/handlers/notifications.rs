//! Handlers for notification endpoints.

use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::notification::{
    NotificationItem, NotificationListResponse, SendNotificationRequest,
};
use crate::error::AppError;
use crate::state::AppState;

/// Sends a notification to a user.
///
/// # Endpoint
///
/// `POST /notifications`
///
/// ```json
/// { "user_id": "dispatcher-7", "title": "New trip", "message": "Pickup at 5th Ave" }
/// ```
pub async fn send_notification_handler(
    State(state): State<AppState>,
    payload: Result<Json<SendNotificationRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<NotificationItem>), AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let notification = state
        .notification_service
        .send_notification(payload.into())
        .await?;

    Ok((StatusCode::CREATED, Json(notification.into())))
}

/// Lists the notifications addressed to a user, newest first.
///
/// # Endpoint
///
/// `GET /notifications/{user_id}`
pub async fn list_user_notifications_handler(
    user_id: Result<Path<String>, PathRejection>,
    State(state): State<AppState>,
) -> Result<Json<NotificationListResponse>, AppError> {
    let Path(user_id) = user_id?;
    let notifications = state.notification_service.list_for_user(&user_id).await?;

    Ok(Json(NotificationListResponse {
        items: notifications.into_iter().map(NotificationItem::from).collect(),
    }))
}

/// Marks a notification as read.
///
/// # Endpoint
///
/// `PUT /notifications/read/{id}`
///
/// Repeating the call is harmless; `read_at` keeps its first value.
///
/// # Errors
///
/// Returns 400 if `id` is not a positive integer.
/// Returns 404 if the notification does not exist.
pub async fn mark_read_handler(
    id: Result<Path<String>, PathRejection>,
    State(state): State<AppState>,
) -> Result<Json<NotificationItem>, AppError> {
    let Path(id) = id?;
    let notification = state.notification_service.mark_read(&id).await?;

    Ok(Json(notification.into()))
}
