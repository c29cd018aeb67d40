//! In-process log store backed by a concurrent map.

use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;
use serde_json::Value;
use tracing::debug;

use loghub_core::error::AppError;
use loghub_core::result::AppResult;
use loghub_core::types::LogFilter;
use loghub_entity::LogEntry;

use crate::store::LogStore;

/// Log store keeping JSON documents in memory, one vector per collection.
///
/// Documents are stored in their serialized form so filters run against
/// the same shape a document database would see. Clones share storage.
#[derive(Debug, Clone, Default)]
pub struct MemoryLogStore {
    collections: Arc<DashMap<String, Vec<Value>>>,
}

impl MemoryLogStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of documents in `collection`.
    pub fn count(&self, collection: &str) -> usize {
        self.collections
            .get(collection)
            .map(|docs| docs.len())
            .unwrap_or(0)
    }
}

#[async_trait]
impl LogStore for MemoryLogStore {
    fn provider_type(&self) -> &str {
        "memory"
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(true)
    }

    async fn insert_one(&self, collection: &str, entry: &LogEntry) -> AppResult<bool> {
        let document = serde_json::to_value(entry)?;
        self.collections
            .entry(collection.to_string())
            .or_default()
            .push(document);

        debug!(collection, "Inserted log entry");
        Ok(true)
    }

    async fn find(&self, collection: &str, filter: &LogFilter) -> AppResult<Vec<LogEntry>> {
        let Some(documents) = self.collections.get(collection) else {
            return Ok(Vec::new());
        };

        let entries = documents
            .iter()
            .filter(|doc| filter.matches(doc))
            .map(|doc| serde_json::from_value(doc.clone()).map_err(AppError::from))
            .collect::<AppResult<Vec<LogEntry>>>()?;

        Ok(entries)
    }
}
