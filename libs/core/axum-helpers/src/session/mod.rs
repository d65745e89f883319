//! Cookie-backed server sessions and one-shot flash messages.

pub mod flash;

pub use flash::{Flash, FlashLevel, push_flash, take_flashes};

use core_config::session::SessionConfig;
use tower_sessions::cookie::{SameSite, time::Duration};
use tower_sessions::{Expiry, MemoryStore, SessionManagerLayer};

/// Build the session layer from config.
///
/// Sessions are kept in process memory and expire after
/// `inactivity_days` without a request.
pub fn create_session_layer(config: &SessionConfig) -> SessionManagerLayer<MemoryStore> {
    SessionManagerLayer::new(MemoryStore::default())
        .with_name(config.cookie_name.clone())
        .with_secure(config.secure)
        .with_http_only(true)
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(Duration::days(config.inactivity_days)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, body::Body, http::Request, routing::get};
    use tower::ServiceExt;
    use tower_sessions::Session;

    #[tokio::test]
    async fn test_session_cookie_uses_configured_name() {
        let config = SessionConfig {
            cookie_name: "accounts.sid".to_string(),
            ..SessionConfig::default()
        };
        let app = Router::new()
            .route(
                "/",
                get(|session: Session| async move {
                    session.insert("touched", true).await.unwrap();
                    "ok"
                }),
            )
            .layer(create_session_layer(&config));

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        let cookie = response.headers()["set-cookie"].to_str().unwrap();
        assert!(cookie.starts_with("accounts.sid="));
        assert!(cookie.contains("HttpOnly"));
        assert!(cookie.contains("SameSite=Lax"));
    }
}
