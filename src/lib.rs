//! # URL Alias Service
//!
//! A small URL shortener: durable alias-to-URL mappings in SQLite, served with Axum.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Mapping entities, typed errors and the store trait
//! - **Application Layer** ([`application`]) - Alias selection and mapping orchestration
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite persistence
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! ## Features
//!
//! - Caller-chosen or generated aliases (62-character alphabet, length 6 by default)
//! - Duplicate aliases rejected by the storage engine itself
//! - Optional bounded retry when a generated alias collides
//! - Basic-auth protected creation, public redirects
//!
//! ## Quick Start
//!
//! ```bash
//! export STORAGE_PATH="./storage/storage.db"
//! export HTTP_USER="admin"
//! export HTTP_PASSWORD="secret"
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
pub mod logging;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{ConflictPolicy, MappingService};
    pub use crate::domain::entities::{Alias, Mapping};
    pub use crate::domain::repositories::MappingStore;
    pub use crate::domain::{MappingError, MappingResult};
    pub use crate::error::AppError;
    pub use crate::infrastructure::persistence::{PoolSettings, SqliteMappingStore};
    pub use crate::state::{AppState, BasicCredentials};
    pub use crate::utils::alias_generator::{AliasGenerator, RandomAliasGenerator};
}
