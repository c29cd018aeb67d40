//! MongoDB-backed log store.

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::Collection;
use mongodb::bson::Document;
use tracing::debug;

use loghub_core::error::{AppError, ErrorKind};
use loghub_core::result::AppResult;
use loghub_core::types::LogFilter;
use loghub_entity::LogEntry;

use crate::connection::MongoConnection;
use crate::store::LogStore;

/// Log store writing each level to its own MongoDB collection.
#[derive(Debug, Clone)]
pub struct MongoLogStore {
    connection: MongoConnection,
}

impl MongoLogStore {
    /// Create a store over an existing connection.
    pub fn new(connection: MongoConnection) -> Self {
        Self { connection }
    }

    fn collection(&self, name: &str) -> Collection<LogEntry> {
        self.connection.database().collection(name)
    }
}

/// Translate a filter into a MongoDB query document.
pub(crate) fn filter_document(filter: &LogFilter) -> Document {
    let mut document = Document::new();
    if let (Some(field), Some(value)) = (filter.field(), filter.value()) {
        document.insert(field, value);
    }
    document
}

#[async_trait]
impl LogStore for MongoLogStore {
    fn provider_type(&self) -> &str {
        "mongodb"
    }

    async fn health_check(&self) -> AppResult<bool> {
        self.connection.health_check().await
    }

    async fn insert_one(&self, collection: &str, entry: &LogEntry) -> AppResult<bool> {
        let result = self
            .collection(collection)
            .insert_one(entry)
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Database,
                    format!("Failed to insert into '{collection}': {e}"),
                    e,
                )
            })?;

        // Write concerns are acknowledged (see `MongoConnection::connect`),
        // so a result means the server confirmed the insert.
        debug!(collection, inserted_id = %result.inserted_id, "Inserted log entry");
        Ok(true)
    }

    async fn find(&self, collection: &str, filter: &LogFilter) -> AppResult<Vec<LogEntry>> {
        let query = filter_document(filter);
        debug!(collection, query = %query, "Querying collection");

        let cursor = self
            .collection(collection)
            .find(query)
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Database,
                    format!("Failed to query '{collection}': {e}"),
                    e,
                )
            })?;

        cursor.try_collect().await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Database,
                format!("Failed to read results from '{collection}': {e}"),
                e,
            )
        })
    }
}
