use sea_orm::{Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;
use tracing::info;

use super::PostgresConfig;
use crate::common::{DatabaseError, DatabaseResult, RetryConfig, retry, retry_with_backoff};

/// Open a connection pool from a [`PostgresConfig`]
pub async fn connect_from_config(config: PostgresConfig) -> DatabaseResult<DatabaseConnection> {
    let db = Database::connect(config.into_connect_options())
        .await
        .map_err(|e| DatabaseError::ConnectionFailed(e.to_string()))?;
    info!("Connected to PostgreSQL");
    Ok(db)
}

/// Open a connection pool, retrying with backoff while the server comes up
///
/// `None` uses [`RetryConfig::default`].
pub async fn connect_from_config_with_retry(
    config: PostgresConfig,
    retry_config: Option<RetryConfig>,
) -> DatabaseResult<DatabaseConnection> {
    let connect = || connect_from_config(config.clone());

    match retry_config {
        Some(retry_config) => retry_with_backoff(connect, retry_config).await,
        None => retry(connect).await,
    }
}

/// Apply all pending migrations of `M`
pub async fn run_migrations<M: MigratorTrait>(
    db: &DatabaseConnection,
    app_name: &str,
) -> DatabaseResult<()> {
    info!(app = app_name, "Running database migrations");
    M::up(db, None)
        .await
        .map_err(|e| DatabaseError::MigrationError(e.to_string()))?;
    info!(app = app_name, "Migrations completed");
    Ok(())
}
