use axum::response::{IntoResponse, Response};
use axum_helpers::{ErrorPage, RenderError};
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum UserError {
    #[error("User not found: {0}")]
    NotFound(Uuid),

    #[error("User with email '{0}' already exists")]
    DuplicateEmail(String),

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password hashing error: {0}")]
    PasswordHash(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Template error: {0}")]
    Template(#[from] RenderError),

    #[error("Session error: {0}")]
    Session(#[from] tower_sessions::session::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type UserResult<T> = Result<T, UserError>;

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        let page = match &self {
            UserError::NotFound(id) => {
                tracing::warn!(user_id = %id, "User not found");
                ErrorPage::not_found()
            }
            UserError::InvalidCredentials => ErrorPage::unauthorized("Invalid email or password."),
            UserError::DuplicateEmail(_)
            | UserError::PasswordHash(_)
            | UserError::Database(_)
            | UserError::Template(_)
            | UserError::Session(_)
            | UserError::Internal(_) => {
                tracing::error!(error = %self, "Request failed");
                ErrorPage::internal()
            }
        };

        page.into_response()
    }
}
