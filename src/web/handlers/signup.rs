//! Signup page handler.

use askama::Template;
use axum::extract::State;

use crate::error::AppError;
use crate::state::AppState;
use crate::web::layout::AuthLayout;

/// Account creation form rendered inside [`AuthLayout`].
#[derive(Template)]
#[template(path = "signup_form.html")]
pub struct SignupForm {}

/// Renders the signup page.
///
/// # Endpoint
///
/// `GET /signup`
pub async fn signup_handler(State(state): State<AppState>) -> Result<AuthLayout, AppError> {
    Ok(AuthLayout::wrap(
        &*state.auth_background_image,
        &SignupForm {},
    )?)
}
