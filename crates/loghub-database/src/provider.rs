//! Store manager that dispatches to the configured backend.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use loghub_core::config::DatabaseConfig;
use loghub_core::error::AppError;
use loghub_core::result::AppResult;
use loghub_core::types::LogFilter;
use loghub_entity::LogEntry;

use crate::store::LogStore;

/// Store manager that wraps the configured log store.
///
/// The backend is selected at construction time based on configuration.
#[derive(Debug, Clone)]
pub struct StoreManager {
    inner: Arc<dyn LogStore>,
}

impl StoreManager {
    /// Create a store manager from configuration.
    ///
    /// An unreachable MongoDB server is logged but not fatal: the driver
    /// reconnects on demand and requests fail individually until it is back.
    pub async fn new(config: &DatabaseConfig) -> AppResult<Self> {
        let inner: Arc<dyn LogStore> = match config.provider.as_str() {
            #[cfg(feature = "mongodb-backend")]
            "mongodb" => {
                info!("Initializing MongoDB log store");
                let connection = crate::connection::MongoConnection::connect(config).await?;
                let store = crate::mongo::MongoLogStore::new(connection);
                match store.health_check().await {
                    Ok(_) => info!("Successfully connected to MongoDB"),
                    Err(e) => warn!(error = %e, "MongoDB is not reachable yet"),
                }
                Arc::new(store)
            }
            #[cfg(feature = "memory")]
            "memory" => {
                info!("Initializing in-memory log store");
                Arc::new(crate::memory::MemoryLogStore::new())
            }
            other => {
                return Err(AppError::configuration(format!(
                    "Unknown store provider: '{other}'. Supported: mongodb, memory"
                )));
            }
        };

        Ok(Self { inner })
    }

}

#[async_trait]
impl LogStore for StoreManager {
    fn provider_type(&self) -> &str {
        self.inner.provider_type()
    }

    async fn health_check(&self) -> AppResult<bool> {
        self.inner.health_check().await
    }

    async fn insert_one(&self, collection: &str, entry: &LogEntry) -> AppResult<bool> {
        self.inner.insert_one(collection, entry).await
    }

    async fn find(&self, collection: &str, filter: &LogFilter) -> AppResult<Vec<LogEntry>> {
        self.inner.find(collection, filter).await
    }
}
