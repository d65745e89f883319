//! # Axum Helpers
//!
//! Shared plumbing for the server-rendered Axum apps in this workspace.
//!
//! ## Modules
//!
//! - **[`server`]**: Router layers, health checks, graceful shutdown
//! - **[`http`]**: Security headers middleware
//! - **[`errors`]**: Generic HTML error pages and the 404 fallback
//! - **[`session`]**: Cookie session layer and flash messages
//! - **[`templates`]**: Handlebars page templates and the shared layout
//!
//! ## Quick Start
//!
//! ```ignore
//! use axum_helpers::{create_production_app, create_router, create_session_layer};
//! use core_config::{server::ServerConfig, session::SessionConfig};
//!
//! let routes = Router::new().nest("/users", users_router);
//! let app = create_router(routes).layer(create_session_layer(&SessionConfig::default()));
//! create_production_app(app, &ServerConfig::default(), Duration::from_secs(30), async {}).await?;
//! ```

pub mod errors;
pub mod http;
pub mod server;
pub mod session;
pub mod templates;

// Re-export server types
pub use server::{
    HealthCheckFuture, HealthResponse, ShutdownCoordinator, create_production_app, create_router,
    health_router, run_health_checks,
};

// Re-export HTTP middleware
pub use http::security_headers;

// Re-export error types
pub use errors::ErrorPage;

// Re-export session helpers
pub use session::{Flash, FlashLevel, create_session_layer, push_flash, take_flashes};

// Re-export page templates
pub use templates::{RenderError, TemplateError, Templates};
