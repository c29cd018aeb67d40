//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use loghub_core::config::AppConfig;
use loghub_database::LogStore;
use loghub_service::LogService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`. Nothing in here is
/// mutated after startup.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Document store handle
    pub store: Arc<dyn LogStore>,
    /// Log ingestion and query service
    pub log_service: Arc<LogService>,
}
