//! Layout shared by the authentication pages.

use askama::Template;
use askama_web::WebTemplate;

/// Full-bleed background container hosting a left-aligned content panel.
///
/// Renders `templates/auth_layout.html`. The outer region's background is
/// `background_image`; `children` is pre-rendered HTML placed inside the
/// inner panel. Page headings belong to the child templates. Rendering has
/// no side effects and cannot fail for any field values.
#[derive(Debug, Clone, Template, WebTemplate)]
#[template(path = "auth_layout.html")]
pub struct AuthLayout {
    pub background_image: String,
    pub children: String,
}

impl AuthLayout {
    /// Wraps an arbitrary child template in the layout.
    ///
    /// # Errors
    ///
    /// Returns the child's rendering error, if any.
    pub fn wrap<T: Template>(
        background_image: impl Into<String>,
        child: &T,
    ) -> askama::Result<Self> {
        Ok(Self {
            background_image: background_image.into(),
            children: child.render()?,
        })
    }
}
