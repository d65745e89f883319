//! PostgreSQL connection management for the accounts service
//!
//! # Features
//!
//! - `config` (default) - load [`postgres::PostgresConfig`] through `core_config::FromEnv`
//!
//! # Example
//!
//! ```ignore
//! use database::postgres;
//! use migration::Migrator;
//!
//! let db = postgres::connect_from_config_with_retry(config, None).await?;
//! postgres::run_migrations::<Migrator>(&db, "accounts_web").await?;
//! ```

pub mod common;
pub mod postgres;

pub use common::{DatabaseError, DatabaseResult};
