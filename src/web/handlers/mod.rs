//! HTML rendering handlers for the authentication pages.

mod login;
mod signup;

pub use login::{LoginForm, login_handler};
pub use signup::{SignupForm, signup_handler};
