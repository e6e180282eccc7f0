//! API key service CLI server
//!
//! ```sh
//! # Run with default config (~/.config/apikey-service/config.toml)
//! apikey-service
//!
//! # Custom config path
//! apikey-service --config /etc/apikey-service/config.toml
//!
//! # Override port and database
//! apikey-service --port 8080 --database-url "sqlite:///var/lib/apikeys.db?mode=rwc"
//!
//! # Validate config without starting
//! apikey-service --check
//! ```

use std::path::{Path, PathBuf};

use clap::Parser;
use tracing::{error, info};

use apikey_service::config::{AppConfig, ConfigError};
use apikey_service::server::{init_tracing, ServerHandle, ServerOptions};

#[derive(Parser, Debug)]
#[command(
    name = "apikey-service",
    version,
    about = "Issue and validate per-service API keys",
    long_about = "REST server that registers users, issues API keys to them, \
                  validates keys and exposes admin listing and deletion.\n\n\
                  Default config: ~/.config/apikey-service/config.toml"
)]
struct Cli {
    /// Path to the configuration file (TOML).
    #[arg(short, long, env = "APIKEY_CONFIG")]
    config: Option<PathBuf>,

    /// Override the listen port.
    #[arg(short, long)]
    port: Option<u16>,

    /// Override the log level (trace, debug, info, warn, error).
    #[arg(short, long)]
    log_level: Option<String>,

    /// Override the database URL.
    #[arg(long)]
    database_url: Option<String>,

    /// Validate the configuration file and exit without starting the server.
    #[arg(long)]
    check: bool,

    /// Skip database migrations on startup.
    #[arg(long)]
    no_migrate: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // ── Load configuration ─────────────────────────────────────
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(apikey_service::default_config_path);

    let loaded = AppConfig::load(&config_path);

    if cli.check {
        return check(&cli, &config_path, loaded);
    }

    let mut config = match loaded {
        Ok(mut cfg) => {
            if let Some(ref level) = cli.log_level {
                cfg.logging.level = level.clone();
            }
            // Init tracing first so subsequent logs are formatted properly
            init_tracing(&cfg);
            info!("Configuration loaded from {}", config_path.display());
            cfg
        }
        Err(e) => {
            let mut cfg = AppConfig::default();
            if let Some(ref level) = cli.log_level {
                cfg.logging.level = level.clone();
            }
            init_tracing(&cfg);
            error!("{}", e);
            error!("Using default configuration.");
            cfg
        }
    };

    // ── Apply CLI overrides ────────────────────────────────────
    if let Some(port) = cli.port {
        info!("CLI override: port = {}", port);
        config.server.port = port;
    }
    if let Some(ref url) = cli.database_url {
        info!("CLI override: database_url");
        config.database.url = url.clone();
    }

    // ── Start server ───────────────────────────────────────────
    let handle = ServerHandle::start(ServerOptions {
        config,
        auto_migrate: !cli.no_migrate,
    })
    .await?;

    // Install OS signal handlers (SIGTERM, SIGINT)
    handle.install_signal_handler();

    info!("🚀 Press Ctrl+C to shutdown gracefully.");

    handle.shutdown_signal().wait().await;
    handle.wait().await;

    Ok(())
}

/// `--check`: report the effective configuration, exit non-zero when invalid.
fn check(
    cli: &Cli,
    config_path: &Path,
    loaded: Result<AppConfig, ConfigError>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = match loaded {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    if let Some(port) = cli.port {
        config.server.port = port;
    }
    if let Some(ref url) = cli.database_url {
        config.database.url = url.clone();
    }
    if let Some(ref level) = cli.log_level {
        config.logging.level = level.clone();
    }

    if let Err(e) = config.validate() {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    println!("✅ Configuration is valid");
    println!("   Config file : {}", config_path.display());
    println!("   Address     : {}", config.server.address());
    println!("   Database    : {}", config.database.url);
    println!("   Log level   : {}", config.logging.level);
    println!("   bcrypt cost : {}", config.security.bcrypt_cost);
    Ok(())
}
