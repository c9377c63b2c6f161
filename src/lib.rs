//! # URL Shortener
//!
//! A small URL shortening service built with Axum and SQLite.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - URL mapping entity and repository trait
//! - **Application Layer** ([`application`]) - Alias resolution and error mapping
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite persistence
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! ## Endpoints
//!
//! - `POST /url` - Create a mapping (basic auth)
//! - `GET /{alias}` - Redirect to the stored URL
//! - `DELETE /url/{alias}` - Delete a mapping (basic auth)
//! - `GET /health` - Store connectivity check
//!
//! ## Quick Start
//!
//! ```bash
//! export STORAGE_PATH="./storage/storage.db"
//! export HTTP_USER="myuser"
//! export HTTP_PASSWORD="mypass"
//!
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::UrlService;
    pub use crate::config::BasicCredentials;
    pub use crate::domain::entities::UrlMapping;
    pub use crate::domain::repositories::UrlRepository;
    pub use crate::error::{AppError, StorageError};
    pub use crate::infrastructure::persistence::SqliteUrlRepository;
    pub use crate::state::AppState;
    pub use crate::utils::alias::{AliasGenerator, RandomAliasGenerator};
}
