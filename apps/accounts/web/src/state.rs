//! Shared application state.

use database::postgres::DatabaseConnection;

/// Cloned into routers that need it; clones share the pool
#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    /// PostgreSQL connection pool
    pub db: DatabaseConnection,
}
