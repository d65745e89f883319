use axum::response::{IntoResponse, Response};

use super::ErrorPage;

/// Fallback handler for unmatched routes.
pub async fn not_found() -> Response {
    ErrorPage::not_found().into_response()
}
