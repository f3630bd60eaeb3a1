//! Web page route configuration.

use axum::http::Method;

use crate::api::middleware::error_pipeline::Continuation;
use crate::api::route_table::{RouteError, RouteTable};
use crate::web::handlers::{login_handler, signup_handler};

/// Public authentication pages.
///
/// # Endpoints
///
/// - `GET /login`  - Sign-in page
/// - `GET /signup` - Account creation page
pub fn page_routes(continuation: Continuation) -> Result<RouteTable, RouteError> {
    RouteTable::new("pages", continuation)
        .bind(Method::GET, "/login", "login-page", login_handler)?
        .bind(Method::GET, "/signup", "signup-page", signup_handler)
}
