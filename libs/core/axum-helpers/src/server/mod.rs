//! Server infrastructure module.
//!
//! This module provides:
//! - Common router layers (tracing, security headers, compression, 404 fallback)
//! - Health endpoint and readiness check aggregation
//! - Graceful shutdown with a bounded cleanup phase

pub mod app;
pub mod health;
pub mod shutdown;

// Re-export commonly used types and functions
pub use app::{create_production_app, create_router};
pub use health::{HealthCheckFuture, HealthResponse, health_router, run_health_checks};
pub use shutdown::ShutdownCoordinator;
