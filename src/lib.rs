//! # API Key Service
//!
//! REST backend that registers end-users, issues per-service API keys to
//! them, validates keys on lookup, and gives admins listing and deletion.
//!
//! ## Architecture
//!
//! - **domain**: aggregates (user, API key, admin) and repository traits
//! - **application**: use-case services
//! - **infrastructure**: SeaORM persistence, key generation, bcrypt
//! - **interfaces**: axum router, handlers and Swagger documentation
//! - **server**: runtime bootstrap and graceful shutdown

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod server;
pub mod shared;

pub use config::{default_config_path, AppConfig};

pub use infrastructure::{init_database, DatabaseConfig, SeaOrmRepositoryProvider};

pub use interfaces::http::{create_api_router, AppState};
