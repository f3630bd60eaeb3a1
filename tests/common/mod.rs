#![allow(dead_code)]

use axum_test::TestServer;
use dispatch_service::api::middleware::error_pipeline::Continuation;
use dispatch_service::api::routes::api_router;
use dispatch_service::infrastructure::persistence::{PgDriverRepository, PgNotificationRepository};
use dispatch_service::state::{AppState, StorageKind};
use serde_json::{Value, json};
use sqlx::PgPool;
use std::sync::Arc;

pub const BACKGROUND: &str = "/static/img/auth-background.svg";

pub fn memory_state() -> AppState {
    AppState::in_memory(BACKGROUND)
}

pub fn pg_state(pool: PgPool) -> AppState {
    let pool = Arc::new(pool);
    AppState::new(
        Arc::new(PgDriverRepository::new(pool.clone())),
        Arc::new(PgNotificationRepository::new(pool)),
        StorageKind::Postgres,
        BACKGROUND,
    )
}

/// Test server over the driver and notification routers.
pub fn api_server(state: AppState) -> TestServer {
    let app = api_router(Continuation::default())
        .unwrap()
        .with_state(state);
    TestServer::new(app).unwrap()
}

pub fn driver_body(name: &str, license: &str) -> Value {
    json!({
        "name": name,
        "phone": "+1 555-0100",
        "license_number": license,
    })
}

/// Creates a driver through the API and returns its id.
pub async fn create_driver(server: &TestServer, name: &str, license: &str) -> i64 {
    let response = server.post("/drivers").json(&driver_body(name, license)).await;
    response.assert_status(axum::http::StatusCode::CREATED);
    response.json::<Value>()["id"].as_i64().unwrap()
}

pub async fn insert_notification(pool: &PgPool, user_id: &str, title: &str) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO notifications (user_id, title, message) VALUES ($1, $2, 'body') RETURNING id",
    )
    .bind(user_id)
    .bind(title)
    .fetch_one(pool)
    .await
    .unwrap()
}
