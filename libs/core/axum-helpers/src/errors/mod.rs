pub mod handlers;

use crate::templates::{ERROR_PAGE, TemplateError, Templates};
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use serde_json::json;
use std::sync::LazyLock;

static TEMPLATES: LazyLock<Result<Templates, TemplateError>> =
    LazyLock::new(|| Templates::new(&[]));

/// A minimal HTML error page.
///
/// Domain error types map themselves onto one of these so every failure
/// renders the same shell, without leaking internal details to the client.
#[derive(Debug, Clone)]
pub struct ErrorPage {
    pub status: StatusCode,
    pub title: &'static str,
    pub message: String,
}

impl ErrorPage {
    pub fn new(status: StatusCode, title: &'static str, message: impl Into<String>) -> Self {
        Self {
            status,
            title,
            message: message.into(),
        }
    }

    pub fn internal() -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Server error",
            "Something went wrong. Please try again later.",
        )
    }

    pub fn not_found() -> Self {
        Self::new(
            StatusCode::NOT_FOUND,
            "Not found",
            "The requested page was not found.",
        )
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, "Unauthorized", message)
    }
}

impl IntoResponse for ErrorPage {
    fn into_response(self) -> Response {
        let rendered = match TEMPLATES.as_ref() {
            Ok(templates) => templates
                .render_page(ERROR_PAGE, self.title, &[], &json!({ "message": self.message }))
                .map_err(|e| e.to_string()),
            Err(e) => Err(e.to_string()),
        };

        match rendered {
            Ok(body) => (self.status, Html(body)).into_response(),
            Err(e) => {
                tracing::error!(error = %e, "Failed to render error page");
                (self.status, self.title).into_response()
            }
        }
    }
}
