use core_config::{AppInfo, FromEnv, app_info, server::ServerConfig, session::SessionConfig};
use database::postgres::PostgresConfig;

pub use core_config::Environment;

/// Application configuration, composed from the shared config components
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub database: PostgresConfig,
    pub server: ServerConfig,
    pub session: SessionConfig,
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let database = PostgresConfig::from_env()?; // DATABASE_URL is required
        let server = ServerConfig::from_env()?;
        let session = SessionConfig::from_env()?;

        Ok(Self {
            app: app_info!(),
            database,
            server,
            session,
            environment,
        })
    }
}
