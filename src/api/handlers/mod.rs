//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to one resource family. Handlers are the
//! delegates bound by [`crate::api::routes`].

pub mod drivers;
pub mod health;
pub mod notifications;

pub use drivers::{
    create_driver_handler, delete_driver_handler, get_driver_handler, list_drivers_handler,
    update_driver_handler,
};
pub use health::health_handler;
pub use notifications::{
    list_user_notifications_handler, mark_read_handler, send_notification_handler,
};

use crate::error::AppError;
use axum::http::Uri;
use serde_json::json;

/// Fallback for requests that match no route.
pub async fn route_not_found_handler(uri: Uri) -> AppError {
    AppError::not_found("Route not found", json!({ "path": uri.path() }))
}
