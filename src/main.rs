//! Club site server: public JSON API, admin area guard, and static pages.
//!
//! Main entry point that loads configuration, opens the selected store, and
//! starts the HTTP server.

use tracing_subscriber::{EnvFilter, fmt};

use clubsite_core::config::{AppConfig, DatabaseProvider};
use clubsite_core::error::AppError;
use clubsite_database::{DatabasePool, Stores};

#[tokio::main]
async fn main() {
    let env = std::env::var("CLUBSITE_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);
    tracing::info!(env = %env, "Configuration loaded");

    if let Err(e) = run(config).await {
        tracing::error!(error = %e, "Server error");
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Open the configured store, serve until shutdown, then release the pool.
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting club site v{}", env!("CARGO_PKG_VERSION"));

    let (stores, db_pool) = match config.database.provider {
        DatabaseProvider::Postgres => {
            let pool = DatabasePool::open(&config.database).await?;
            (pool.stores(), Some(pool))
        }
        DatabaseProvider::Memory => {
            tracing::warn!("Using the in-memory store, data is lost on restart");
            (Stores::memory(), None)
        }
    };

    let result = clubsite_api::run_server(config, stores, db_pool.clone()).await;

    if let Some(pool) = db_pool {
        pool.close().await;
    }
    result
}
