//! LogHub Server: level-partitioned log storage over HTTP
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use loghub_api::AppState;
use loghub_core::config::AppConfig;
use loghub_core::error::AppError;
use loghub_database::{CollectionMap, LogStore, StoreManager};
use loghub_service::LogService;

#[tokio::main]
async fn main() {
    // A missing .env file is normal outside local development.
    let dotenv = dotenvy::dotenv();

    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Ok(path) = dotenv {
        tracing::info!("Loaded environment from '{}'", path.display());
    }

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Load configuration from files and environment
fn load_configuration() -> Result<AppConfig, AppError> {
    let env = std::env::var("LOGHUB_ENV").unwrap_or_else(|_| "development".to_string());
    AppConfig::load(&env)
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

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting LogHub v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Collection routing table ─────────────────────────
    let collections = Arc::new(CollectionMap::from_config(&config.database.collections)?);
    for (level, collection) in collections.iter() {
        tracing::info!(%level, collection, "Routing level to collection");
    }

    // ── Step 2: Document store ───────────────────────────────────
    tracing::info!(
        "Initializing log store (provider: {})...",
        config.database.provider
    );
    let store: Arc<dyn LogStore> = Arc::new(StoreManager::new(&config.database).await?);

    // ── Step 3: Services ─────────────────────────────────────────
    let log_service = Arc::new(LogService::new(Arc::clone(&store), Arc::clone(&collections)));

    // ── Step 4: Build and start HTTP server ──────────────────────
    let addr = config.server.bind_address();
    let app_state = AppState {
        config: Arc::new(config),
        store,
        log_service,
    };
    let app = loghub_api::build_router(app_state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {}: {}", addr, e)))?;

    tracing::info!("LogHub server listening on {}", addr);

    // ── Step 5: Graceful shutdown ────────────────────────────────
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    tracing::info!("LogHub server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown...");
}
