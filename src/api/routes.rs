//! API route tables.
//!
//! The tables are pure dispatch: no validation, authorization or business
//! logic happens here. Every delegate is wrapped by the async error adapter
//! when it is bound (see [`RouteTable::bind`]).

use axum::{Router, http::Method};

use crate::api::handlers::{
    create_driver_handler, delete_driver_handler, get_driver_handler, list_drivers_handler,
    list_user_notifications_handler, mark_read_handler, send_notification_handler,
    update_driver_handler,
};
use crate::api::middleware::error_pipeline::Continuation;
use crate::api::route_table::{RouteError, RouteTable};
use crate::state::AppState;

/// Driver routes, mounted at `/drivers`.
///
/// # Endpoints
///
/// - `GET    /`      - List all drivers
/// - `GET    /{id}`  - Get one driver
/// - `POST   /`      - Register a driver
/// - `PUT    /{id}`  - Update a driver
/// - `DELETE /{id}`  - Remove a driver
pub fn driver_routes(continuation: Continuation) -> Result<RouteTable, RouteError> {
    RouteTable::new("drivers", continuation)
        .bind(Method::GET, "/", "list-all", list_drivers_handler)?
        .bind(Method::GET, "/{id}", "get-by-id", get_driver_handler)?
        .bind(Method::POST, "/", "create", create_driver_handler)?
        .bind(Method::PUT, "/{id}", "update", update_driver_handler)?
        .bind(Method::DELETE, "/{id}", "delete", delete_driver_handler)
}

/// Notification routes, mounted at `/notifications`.
///
/// # Endpoints
///
/// - `POST /`            - Send a notification
/// - `GET  /{user_id}`   - List notifications for a user
/// - `PUT  /read/{id}`   - Mark a notification as read
pub fn notification_routes(continuation: Continuation) -> Result<RouteTable, RouteError> {
    RouteTable::new("notifications", continuation)
        .bind(Method::POST, "/", "create", send_notification_handler)?
        .bind(
            Method::GET,
            "/{user_id}",
            "list-for-user",
            list_user_notifications_handler,
        )?
        .bind(Method::PUT, "/read/{id}", "mark-read", mark_read_handler)
}

/// Both resource routers mounted under their prefixes.
pub fn api_router(continuation: Continuation) -> Result<Router<AppState>, RouteError> {
    let drivers = driver_routes(continuation.clone())?;
    let notifications = notification_routes(continuation)?;

    Ok(Router::new()
        .nest("/drivers", drivers.into_router())
        .nest("/notifications", notifications.into_router()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Driver, DriverStatus, Notification};
    use crate::domain::repositories::{MockDriverRepository, MockNotificationRepository};
    use crate::state::StorageKind;
    use axum::{
        body::Body,
        extract::Request,
        http::{StatusCode, header},
    };
    use chrono::Utc;
    use serde_json::{Value, json};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn app(drivers: MockDriverRepository, notifications: MockNotificationRepository) -> Router {
        let state = AppState::new(
            Arc::new(drivers),
            Arc::new(notifications),
            StorageKind::Memory,
            "/static/img/bg.svg",
        );
        api_router(Continuation::default())
            .unwrap()
            .with_state(state)
    }

    fn driver(id: i64) -> Driver {
        let now = Utc::now();
        Driver {
            id,
            name: "Ada".to_string(),
            phone: "5550100".to_string(),
            license_number: format!("LIC-{id}"),
            vehicle: None,
            status: DriverStatus::Available,
            created_at: now,
            updated_at: now,
        }
    }

    fn request(method: Method, uri: &str, body: Option<Value>) -> Request {
        let builder = Request::builder().method(method).uri(uri);
        match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        }
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn test_driver_table_bindings() {
        let table = driver_routes(Continuation::default()).unwrap();

        let bindings: Vec<_> = table
            .bindings()
            .iter()
            .map(|b| (b.method.clone(), b.path, b.delegate))
            .collect();

        assert_eq!(
            bindings,
            vec![
                (Method::GET, "/", "list-all"),
                (Method::GET, "/{id}", "get-by-id"),
                (Method::POST, "/", "create"),
                (Method::PUT, "/{id}", "update"),
                (Method::DELETE, "/{id}", "delete"),
            ]
        );
    }

    #[test]
    fn test_notification_table_bindings() {
        let table = notification_routes(Continuation::default()).unwrap();

        assert_eq!(table.name(), "notifications");
        assert_eq!(table.bindings().len(), 3);
        assert_eq!(
            table
                .lookup(&Method::PUT, "/read/{id}")
                .map(|b| b.delegate),
            Some("mark-read")
        );
    }

    // Mocks without expectations panic when called, so each test also proves
    // that no other delegate ran.

    #[tokio::test]
    async fn test_get_driver_dispatches_with_path_id() {
        let mut drivers = MockDriverRepository::new();
        drivers
            .expect_find_by_id()
            .withf(|id| *id == 42)
            .times(1)
            .returning(|id| Ok(Some(driver(id))));

        let response = app(drivers, MockNotificationRepository::new())
            .oneshot(request(Method::GET, "/drivers/42", None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["id"], 42);
    }

    #[tokio::test]
    async fn test_mark_read_dispatches_with_path_id() {
        let mut notifications = MockNotificationRepository::new();
        notifications
            .expect_mark_read()
            .withf(|id| *id == 7)
            .times(1)
            .returning(|id| {
                Ok(Some(Notification {
                    id,
                    user_id: "u1".to_string(),
                    title: "t".to_string(),
                    message: "m".to_string(),
                    is_read: true,
                    read_at: Some(Utc::now()),
                    created_at: Utc::now(),
                }))
            });

        let response = app(MockDriverRepository::new(), notifications)
            .oneshot(request(Method::PUT, "/notifications/read/7", None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["id"], 7);
        assert_eq!(body["is_read"], true);
    }

    #[tokio::test]
    async fn test_create_driver_forwards_body() {
        let mut drivers = MockDriverRepository::new();
        drivers
            .expect_create()
            .withf(|d| {
                d.name == "Ada Byron"
                    && d.phone == "+1 555-0100"
                    && d.license_number == "LIC-9"
                    && d.vehicle.as_deref() == Some("Van 3")
                    && d.status == DriverStatus::OffDuty
            })
            .times(1)
            .returning(|d| {
                let mut created = driver(1);
                created.name = d.name;
                Ok(created)
            });

        let body = json!({
            "name": "Ada Byron",
            "phone": "+1 555-0100",
            "license_number": "LIC-9",
            "vehicle": "Van 3",
            "status": "off_duty"
        });
        let response = app(drivers, MockNotificationRepository::new())
            .oneshot(request(Method::POST, "/drivers", Some(body)))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
    }

    #[tokio::test]
    async fn test_list_for_user_dispatches_user_id() {
        let mut notifications = MockNotificationRepository::new();
        notifications
            .expect_list_for_user()
            .withf(|user_id| user_id == "dispatcher-3")
            .times(1)
            .returning(|_| Ok(vec![]));

        let response = app(MockDriverRepository::new(), notifications)
            .oneshot(request(Method::GET, "/notifications/dispatcher-3", None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["items"], json!([]));
    }

    #[tokio::test]
    async fn test_undeclared_routes_reach_no_delegate() {
        let app = app(MockDriverRepository::new(), MockNotificationRepository::new());

        let cases = [
            (Method::PATCH, "/drivers/1", StatusCode::METHOD_NOT_ALLOWED),
            (Method::DELETE, "/notifications/read/1", StatusCode::METHOD_NOT_ALLOWED),
            (Method::GET, "/drivers/1/trips", StatusCode::NOT_FOUND),
            (Method::GET, "/vehicles", StatusCode::NOT_FOUND),
        ];

        for (method, uri, expected) in cases {
            let response = app
                .clone()
                .oneshot(request(method.clone(), uri, None))
                .await
                .unwrap();
            assert_eq!(response.status(), expected, "{method} {uri}");
        }
    }

    #[tokio::test]
    async fn test_delegate_error_reaches_pipeline() {
        let mut drivers = MockDriverRepository::new();
        drivers.expect_find_by_id().returning(|_| Ok(None));

        let response = app(drivers, MockNotificationRepository::new())
            .oneshot(request(Method::GET, "/drivers/5", None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "not_found");
        assert_eq!(body["error"]["details"]["id"], 5);
    }

    #[derive(Default)]
    struct CountingSink {
        codes: std::sync::Mutex<Vec<&'static str>>,
    }

    impl crate::api::middleware::error_pipeline::ErrorSink for CountingSink {
        fn forward(&self, error: crate::error::AppError) -> axum::response::Response {
            self.codes.lock().unwrap().push(error.code());
            error.render()
        }
    }

    #[tokio::test]
    async fn test_undecodable_path_id_reaches_pipeline() {
        let sink = Arc::new(CountingSink::default());
        let state = AppState::new(
            Arc::new(MockDriverRepository::new()),
            Arc::new(MockNotificationRepository::new()),
            StorageKind::Memory,
            "/static/img/bg.svg",
        );
        let app = api_router(Continuation::new(sink.clone()))
            .unwrap()
            .with_state(state);

        let response = app
            .oneshot(request(Method::GET, "/drivers/%FF", None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "validation_error");
        assert_eq!(*sink.codes.lock().unwrap(), vec!["validation_error"]);
    }
}
