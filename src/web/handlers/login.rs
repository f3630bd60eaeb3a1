//! Login page handler.

use askama::Template;
use axum::extract::State;

use crate::error::AppError;
use crate::state::AppState;
use crate::web::layout::AuthLayout;

/// Sign-in form rendered inside [`AuthLayout`].
#[derive(Template)]
#[template(path = "login_form.html")]
pub struct LoginForm {}

/// Renders the login page.
///
/// # Endpoint
///
/// `GET /login`
pub async fn login_handler(State(state): State<AppState>) -> Result<AuthLayout, AppError> {
    Ok(AuthLayout::wrap(
        &*state.auth_background_image,
        &LoginForm {},
    )?)
}
