//! Users Domain
//!
//! Account registration and session login for the server-rendered accounts app.
//!
//! # Features
//!
//! - Registration: validation, duplicate-email check, Argon2 hashing, persistence
//! - Login and logout backed by a cookie session
//! - Flash-message driven HTML pages rendered from Handlebars templates
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTML pages, form posts, session + flash handoff
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Registration sequence, authentication
//! └──┬───────┬──┘
//!    │       │
//! ┌──▼───┐ ┌─▼──────────┐
//! │Hasher│ │ Repository │  ← Traits + Argon2 / in-memory / Postgres impls
//! └──────┘ └─────┬──────┘
//!                │
//! ┌──────────────▼──┐
//! │     Models      │  ← User record, form DTOs, outcomes
//! └─────────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_users::{Argon2Hasher, InMemoryUserRepository, Pages, UserService, handlers};
//!
//! let service = UserService::new(InMemoryUserRepository::new(), Argon2Hasher::new());
//! let pages = Pages::new().expect("templates compile");
//! let router = axum::Router::new().nest("/users", handlers::router(service, pages));
//! ```

pub mod error;
pub mod handlers;
pub mod hasher;
pub mod models;
pub mod pages;
pub mod postgres;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{UserError, UserResult};
pub use hasher::{Argon2Hasher, PasswordHasher};
pub use models::{LoginRequest, RegisterRequest, RegistrationOutcome, Rejection, User};
pub use pages::Pages;
pub use postgres::PostgresUserRepository;
pub use repository::{InMemoryUserRepository, UserRepository};
pub use service::UserService;
