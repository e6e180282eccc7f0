pub mod entities;
pub mod migrator;
pub mod repositories;

pub use repositories::SeaOrmRepositoryProvider;

use std::time::Duration;

use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Connection pool settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PoolConfig {
    pub max_connections: u32,
    pub min_connections: u32,
    /// Seconds to wait for a connection before failing
    pub connect_timeout: u64,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            max_connections: 10,
            min_connections: 1,
            connect_timeout: 10,
        }
    }
}

/// Database configuration
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Database URL (e.g., "sqlite://./apikeys.db?mode=rwc")
    pub url: String,
    pub pool: PoolConfig,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite://./apikeys.db?mode=rwc".to_string(),
            pool: PoolConfig::default(),
        }
    }
}

impl DatabaseConfig {
    /// Create config for SQLite
    pub fn sqlite(path: &str) -> Self {
        Self {
            url: format!("sqlite://{}?mode=rwc", path),
            pool: PoolConfig::default(),
        }
    }

    /// Private in-memory SQLite database, used by tests
    pub fn in_memory() -> Self {
        Self {
            url: "sqlite::memory:".to_string(),
            pool: PoolConfig::default(),
        }
    }
}

/// Initialize the pooled database connection
pub async fn init_database(config: &DatabaseConfig) -> Result<DatabaseConnection, sea_orm::DbErr> {
    info!("Connecting to database: {}", config.url);

    // Each connection to `:memory:` would see its own empty database.
    let max_connections = if config.url.contains(":memory:") {
        1
    } else {
        config.pool.max_connections.max(1)
    };

    let mut options = ConnectOptions::new(config.url.clone());
    options
        .max_connections(max_connections)
        .min_connections(config.pool.min_connections.min(max_connections))
        .connect_timeout(Duration::from_secs(config.pool.connect_timeout))
        .sqlx_logging(false);

    let db = Database::connect(options).await?;
    info!("Database connected successfully");
    Ok(db)
}

/// Connects to a fresh in-memory database and applies every migration.
#[cfg(test)]
pub(crate) async fn test_db() -> DatabaseConnection {
    use sea_orm_migration::MigratorTrait;

    let db = init_database(&DatabaseConfig::in_memory()).await.unwrap();
    migrator::Migrator::up(&db, None).await.unwrap();
    db
}
