use axum::response::Html;
use chrono::DateTime;
use minijinja::{context, Environment, Error, ErrorKind, Value};
use serde::Serialize;
use shared::domain::{email_handle, User};
use showcase::Page;

use crate::error::PageError;

pub const NOT_FOUND_TEMPLATE: &str = "404.html";

const DEFAULT_DATETIME_FORMAT: &str = "%b %d, %Y at %I:%M %p";

const TEMPLATES: &[(&str, &str)] = &[
    ("base.html", include_str!("../templates/base.html")),
    ("404.html", include_str!("../templates/404.html")),
    ("index.html", include_str!("../templates/index.html")),
    (
        "showcase_login.html",
        include_str!("../templates/showcase_login.html"),
    ),
    (
        "showcase_register.html",
        include_str!("../templates/showcase_register.html"),
    ),
    ("dashboard.html", include_str!("../templates/dashboard.html")),
    (
        "browse_sessions.html",
        include_str!("../templates/browse_sessions.html"),
    ),
    (
        "showcase_profile.html",
        include_str!("../templates/showcase_profile.html"),
    ),
    (
        "showcase_create_session.html",
        include_str!("../templates/showcase_create_session.html"),
    ),
    (
        "session_reports.html",
        include_str!("../templates/session_reports.html"),
    ),
    (
        "trainer_dashboard.html",
        include_str!("../templates/trainer_dashboard.html"),
    ),
];

/// Compiled templates plus the render-wide globals.
pub struct Pages {
    env: Environment<'static>,
}

impl Pages {
    /// `current_user` is exposed to every template under that name.
    pub fn new(current_user: &User) -> Result<Self, Error> {
        let mut env = Environment::new();
        for &(name, source) in TEMPLATES {
            env.add_template(name, source)?;
        }
        env.add_filter("datetime", datetime);
        env.add_filter("money", money);
        env.add_filter("email_handle", email_handle_filter);
        env.add_global("current_user", Value::from_serialize(current_user));
        Ok(Self { env })
    }

    pub fn render_page<S: Serialize>(&self, page: Page, view: &S) -> Result<Html<String>, PageError> {
        let template = page.template().ok_or(PageError::NoTemplate(page))?;
        self.render_template(template, view)
    }

    /// The template name is added to the context as `page`.
    pub fn render_template<S: Serialize>(
        &self,
        name: &str,
        view: &S,
    ) -> Result<Html<String>, PageError> {
        let view = Value::from_serialize(view);
        let html = self
            .env
            .get_template(name)?
            .render(context! { page => name, ..view })?;
        Ok(Html(html))
    }
}

fn datetime(value: &str, format: Option<&str>) -> Result<String, Error> {
    let parsed = DateTime::parse_from_rfc3339(value).map_err(|err| {
        Error::new(
            ErrorKind::InvalidOperation,
            format!("'{value}' is not an RFC 3339 timestamp: {err}"),
        )
    })?;
    Ok(parsed
        .format(format.unwrap_or(DEFAULT_DATETIME_FORMAT))
        .to_string())
}

fn money(value: f64) -> String {
    format!("${value:.2}")
}

fn email_handle_filter(value: &str) -> String {
    email_handle(value).to_string()
}

#[cfg(test)]
#[path = "tests/render_tests.rs"]
mod tests;
