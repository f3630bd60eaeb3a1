//! Top-level router configuration combining API and web routes.
//!
//! # Route Structure
//!
//! - `GET  /health`          - Storage health check
//! - `/drivers/*`            - Driver REST API
//! - `/notifications/*`      - Notification REST API
//! - `GET  /login`, `/signup` - Authentication pages
//! - `/static/*`             - Static assets
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Panic capture** - Handler panics are forwarded to the error pipeline
//! - **Error forwarding** - Applied per binding by [`RouteTable`]
//! - **Path normalization** - Trailing slash handling

use axum::Router;
use axum::handler::Handler;
use axum::http::Method;
use axum::middleware;
use tower::Layer;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

use crate::api::handlers::{health_handler, route_not_found_handler};
use crate::api::middleware::error_pipeline::{Continuation, PanicForwarder};
use crate::api::middleware::forward_errors::forward_errors;
use crate::api::middleware::tracing;
use crate::api::route_table::{RouteError, RouteTable};
use crate::api::routes::api_router;
use crate::state::AppState;
use crate::web::routes::page_routes;

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `continuation` - error sink every handler failure is forwarded to
/// - `static_dir` - directory served under `/static`
///
/// # Errors
///
/// Returns [`RouteError`] if a route table contains conflicting bindings.
pub fn app_router(
    state: AppState,
    continuation: Continuation,
    static_dir: &str,
) -> Result<NormalizePath<Router>, RouteError> {
    let system = RouteTable::new("system", continuation.clone()).bind(
        Method::GET,
        "/health",
        "health",
        health_handler,
    )?;

    let router = Router::new()
        .merge(system.into_router())
        .merge(api_router(continuation.clone())?)
        .merge(page_routes(continuation.clone())?.into_router())
        .nest_service("/static", ServeDir::new(static_dir))
        .fallback(route_not_found_handler.layer(middleware::from_fn_with_state(
            continuation.clone(),
            forward_errors,
        )))
        .with_state(state)
        .layer(CatchPanicLayer::custom(PanicForwarder::new(continuation)))
        .layer(tracing::layer());

    Ok(NormalizePathLayer::trim_trailing_slash().layer(router))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        extract::Request,
        http::{StatusCode, header},
    };
    use serde_json::{Value, json};
    use tower::ServiceExt;

    fn app() -> NormalizePath<Router> {
        app_router(
            AppState::in_memory("/static/img/auth-background.svg"),
            Continuation::default(),
            "static",
        )
        .unwrap()
    }

    async fn send(app: &NormalizePath<Router>, req: Request) -> (StatusCode, Vec<u8>) {
        let response = app.clone().oneshot(req).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, bytes.to_vec())
    }

    fn get(uri: &str) -> Request {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_health_in_memory() {
        let (status, body) = send(&app(), get("/health")).await;

        assert_eq!(status, StatusCode::OK);
        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["status"], "healthy");
        assert_eq!(json["storage"], "memory");
    }

    #[tokio::test]
    async fn test_trailing_slash_is_trimmed() {
        let app = app();

        let create = Request::builder()
            .method(Method::POST)
            .uri("/drivers/")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(
                json!({ "name": "Ada", "phone": "5550100", "license_number": "L-1" }).to_string(),
            ))
            .unwrap();
        let (status, _) = send(&app, create).await;
        assert_eq!(status, StatusCode::CREATED);

        let (status, body) = send(&app, get("/drivers/1/")).await;
        assert_eq!(status, StatusCode::OK);
        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["license_number"], "L-1");
    }

    #[tokio::test]
    async fn test_unknown_route_gets_json_404() {
        let (status, body) = send(&app(), get("/trips/3")).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"]["code"], "not_found");
        assert_eq!(json["error"]["details"]["path"], "/trips/3");
    }

    async fn boom() -> &'static str {
        panic!("boom")
    }

    #[tokio::test]
    async fn test_panic_goes_through_error_pipeline() {
        let continuation = Continuation::default();
        let table = RouteTable::new("test", continuation.clone())
            .bind(Method::GET, "/boom", "boom", boom)
            .unwrap();
        let app = Router::new()
            .merge(table.into_router())
            .with_state(AppState::in_memory("/bg.svg"))
            .layer(CatchPanicLayer::custom(PanicForwarder::new(continuation)));

        let response = app.oneshot(get("/boom")).await.unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["error"]["code"], "internal_error");
        assert_eq!(json["error"]["details"]["panic"], "boom");
    }

    #[tokio::test]
    async fn test_login_page_renders_layout() {
        let (status, body) = send(&app(), get("/login")).await;

        assert_eq!(status, StatusCode::OK);
        let html = String::from_utf8(body).unwrap();
        assert!(html.contains("auth-layout__panel"));
        assert!(html.contains("Sign in"));
    }
}
