//! Page templates for the users routes.

use axum_helpers::{Flash, TemplateError, Templates};
use serde::Serialize;

use crate::error::UserResult;
use crate::models::User;

const REGISTER_TEMPLATE: &str = r#"{{#> layout}}
<form method="post" action="/users/register">
<label>Email <input type="email" name="email" required></label>
<label>Username <input type="text" name="username" required></label>
<label>Password <input type="password" name="password" required></label>
<label>Confirm password <input type="password" name="confirmationPassword" required></label>
<button type="submit">Register</button>
</form>
<p>Already have an account? <a href="/users/login">Log in</a></p>
{{/layout}}"#;

const LOGIN_TEMPLATE: &str = r#"{{#> layout}}
<form method="post" action="/users/login">
<label>Email <input type="email" name="email" required></label>
<label>Password <input type="password" name="password" required></label>
<button type="submit">Log in</button>
</form>
<p>No account yet? <a href="/users/register">Register</a></p>
{{/layout}}"#;

const DASHBOARD_TEMPLATE: &str = r#"{{#> layout}}
<p>Welcome, {{page.user.username}}.</p>
<p>Signed in as {{page.user.email}}.</p>
<p><a href="/users/logout">Log out</a></p>
{{/layout}}"#;

#[derive(Serialize)]
struct DashboardView<'a> {
    user: &'a User,
}

/// Renders the register, login and dashboard pages
#[derive(Clone)]
pub struct Pages {
    templates: Templates,
}

impl Pages {
    pub fn new() -> Result<Self, TemplateError> {
        let templates = Templates::new(&[
            ("register", REGISTER_TEMPLATE),
            ("login", LOGIN_TEMPLATE),
            ("dashboard", DASHBOARD_TEMPLATE),
        ])?;
        Ok(Self { templates })
    }

    pub fn register(&self, flashes: &[Flash]) -> UserResult<String> {
        Ok(self
            .templates
            .render_page("register", "Register", flashes, &())?)
    }

    pub fn login(&self, flashes: &[Flash]) -> UserResult<String> {
        Ok(self.templates.render_page("login", "Login", flashes, &())?)
    }

    pub fn dashboard(&self, user: &User, flashes: &[Flash]) -> UserResult<String> {
        Ok(self.templates.render_page(
            "dashboard",
            "Dashboard",
            flashes,
            &DashboardView { user },
        )?)
    }
}
