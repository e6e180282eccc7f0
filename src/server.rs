//! Reusable API key service runtime.
//!
//! [`ServerHandle`] encapsulates the full server lifecycle: database init,
//! migrations, REST API, metrics and graceful shutdown.

use std::net::SocketAddr;
use std::sync::{Arc, OnceLock};
use std::time::Instant;

use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use sea_orm::DatabaseConnection;
use sea_orm_migration::MigratorTrait;
use tracing::{error, info, warn};

use crate::application::{AdminService, ApiKeyService, UserService};
use crate::config::AppConfig;
use crate::domain::RepositoryProvider;
use crate::infrastructure::database::migrator::Migrator;
use crate::infrastructure::{init_database, SeaOrmRepositoryProvider};
use crate::interfaces::http::{create_api_router, AppState};
use crate::shared::shutdown::{ShutdownCoordinator, ShutdownSignal};

// ── Options ────────────────────────────────────────────────────────

pub struct ServerOptions {
    pub config: AppConfig,
    /// Run database migrations on startup (default: true).
    pub auto_migrate: bool,
}

impl Default for ServerOptions {
    fn default() -> Self {
        Self {
            config: AppConfig::default(),
            auto_migrate: true,
        }
    }
}

// ── Wiring ─────────────────────────────────────────────────────────

/// Build the repositories and services over an open connection.
pub fn build_app_state(
    db: DatabaseConnection,
    config: &AppConfig,
    metrics_handle: PrometheusHandle,
) -> AppState {
    let repos: Arc<dyn RepositoryProvider> = Arc::new(SeaOrmRepositoryProvider::new(db.clone()));

    AppState {
        user_service: Arc::new(UserService::new(repos.clone())),
        api_key_service: Arc::new(ApiKeyService::new(repos.clone())),
        admin_service: Arc::new(AdminService::new(repos, config.security.bcrypt_cost)),
        db,
        metrics_handle,
        started_at: Arc::new(Instant::now()),
    }
}

/// Process-wide Prometheus handle.
///
/// The global recorder can only be installed once per process, so a restart
/// within the same process reuses it.
pub fn prometheus_handle() -> PrometheusHandle {
    static PROM_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

    PROM_HANDLE
        .get_or_init(|| match PrometheusBuilder::new().install_recorder() {
            Ok(handle) => {
                info!("📊 Prometheus metrics recorder installed");
                handle
            }
            Err(e) => {
                warn!("Prometheus recorder not installed, /metrics will stay empty: {}", e);
                PrometheusBuilder::new().build_recorder().handle()
            }
        })
        .clone()
}

// ── ServerHandle ───────────────────────────────────────────────────

/// Handle to a running API key service.
///
/// ```rust,no_run
/// use apikey_service::server::{ServerHandle, ServerOptions};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let handle = ServerHandle::start(ServerOptions::default()).await?;
///     handle.install_signal_handler();
///     handle.shutdown_signal().wait().await;
///     handle.wait().await;
///     Ok(())
/// }
/// ```
pub struct ServerHandle {
    /// The configuration the server was started with.
    pub config: AppConfig,
    /// Address the REST API is bound to (resolved when port 0 was requested).
    pub local_addr: SocketAddr,

    db: DatabaseConnection,
    shutdown: ShutdownCoordinator,
    api_task: tokio::task::JoinHandle<()>,
}

impl ServerHandle {
    /// Connect, migrate, bind and spawn the REST API.
    pub async fn start(opts: ServerOptions) -> Result<Self, Box<dyn std::error::Error>> {
        let app_cfg = opts.config;
        app_cfg.validate()?;

        info!("Starting API key service...");

        let metrics_handle = prometheus_handle();

        // ── Database ───────────────────────────────────────────
        let db_config = app_cfg.database.to_database_config();
        let db = init_database(&db_config).await?;

        if opts.auto_migrate {
            info!("Running database migrations...");
            Migrator::up(&db, None).await?;
            info!("Migrations completed");
        }

        // ── Router ─────────────────────────────────────────────
        let state = build_app_state(db.clone(), &app_cfg, metrics_handle);

        let static_dir = app_cfg.server.static_dir.clone().filter(|dir| {
            let exists = dir.is_dir();
            if !exists {
                warn!("Static directory {} not found, landing page disabled", dir.display());
            }
            exists
        });
        let api_router = create_api_router(state, static_dir);

        // ── Listener ───────────────────────────────────────────
        let shutdown = ShutdownCoordinator::new(app_cfg.server.shutdown_timeout);
        let shutdown_signal = shutdown.signal();

        let listener = tokio::net::TcpListener::bind(app_cfg.server.address()).await?;
        let local_addr = listener.local_addr()?;
        info!("REST API server listening on http://{}", local_addr);
        info!("Swagger UI available at http://{}/docs/", local_addr);

        let api_server = axum::serve(
            listener,
            api_router.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .with_graceful_shutdown(async move {
            shutdown_signal.wait().await;
            info!("🛑 REST API server received shutdown signal");
        });

        let api_task = tokio::spawn(async move {
            if let Err(e) = api_server.await {
                error!("REST API server error: {}", e);
            }
        });

        info!("🚀 API key service started.");

        Ok(Self {
            config: app_cfg,
            local_addr,
            db,
            shutdown,
            api_task,
        })
    }

    pub fn shutdown_signal(&self) -> ShutdownSignal {
        self.shutdown.signal()
    }

    /// Install OS signal listeners (SIGTERM, SIGINT) that trigger shutdown.
    pub fn install_signal_handler(&self) {
        self.shutdown.start_signal_listener();
    }

    /// Trigger graceful shutdown (non-blocking). Call [`ServerHandle::wait`]
    /// to block until everything has stopped.
    pub fn trigger_shutdown(&self) {
        self.shutdown.signal().trigger();
    }

    /// Wait for the server to stop after shutdown has been triggered, bounded
    /// by the configured shutdown timeout.
    pub async fn wait(self) {
        let Self {
            db,
            shutdown,
            mut api_task,
            ..
        } = self;

        info!("⏳ Waiting for server tasks to complete...");

        let finished = shutdown
            .shutdown_with_cleanup(|| async {
                match (&mut api_task).await {
                    Ok(()) => info!("REST API server stopped"),
                    Err(e) => error!("REST API server task panicked: {}", e),
                }
            })
            .await;

        if !finished {
            api_task.abort();
        }

        if let Err(e) = db.close().await {
            warn!("Error closing database connection: {}", e);
        } else {
            info!("✅ Database connection closed");
        }

        info!("👋 API key service shutdown complete");
    }

    /// Trigger shutdown and wait for completion.
    pub async fn shutdown(self) {
        info!("🛑 Shutting down API key service...");
        self.trigger_shutdown();
        self.wait().await;
    }

    pub fn is_running(&self) -> bool {
        !self.api_task.is_finished()
    }
}

/// Initialize tracing (logging) from the application config.
///
/// Call this once at process startup (before [`ServerHandle::start`]).
pub fn init_tracing(config: &AppConfig) {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.logging.level));

    match config.logging.format.to_lowercase().as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer())
                .init();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DatabaseSection;

    fn test_config() -> AppConfig {
        let mut config = AppConfig::default();
        config.server.host = "127.0.0.1".into();
        config.server.port = 0;
        config.server.static_dir = None;
        config.server.shutdown_timeout = 5;
        config.database = DatabaseSection {
            url: "sqlite::memory:".into(),
            ..DatabaseSection::default()
        };
        config.security.bcrypt_cost = 4;
        config
    }

    #[tokio::test]
    async fn starts_on_ephemeral_port_and_shuts_down() {
        let handle = ServerHandle::start(ServerOptions {
            config: test_config(),
            auto_migrate: true,
        })
        .await
        .unwrap();

        assert_ne!(handle.local_addr.port(), 0);
        assert!(handle.is_running());

        let signal = handle.shutdown_signal();
        handle.shutdown().await;
        assert!(signal.is_triggered());
    }

    #[tokio::test]
    async fn rejects_invalid_config_before_binding() {
        let mut config = test_config();
        config.security.bcrypt_cost = 1;

        let result = ServerHandle::start(ServerOptions {
            config,
            auto_migrate: true,
        })
        .await;
        assert!(result.is_err());
    }
}
