//! Server-rendered authentication pages.
//!
//! Uses Askama templates from `templates/`.
//!
//! # Modules
//!
//! - [`layout`] - [`layout::AuthLayout`], the background container shared by auth pages
//! - [`handlers`] - Login and signup page handlers
//! - [`routes`] - Page route configuration

pub mod handlers;
pub mod layout;
pub mod routes;
