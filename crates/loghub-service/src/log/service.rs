//! Level-partitioned log storage and exact-match lookup.

use std::sync::Arc;

use tracing::{debug, error, info};

use loghub_core::result::AppResult;
use loghub_core::types::LogFilter;
use loghub_database::{CollectionMap, LogStore};
use loghub_entity::{LogEntry, LogLevel};

/// Routes entries to their level's collection and answers filtered reads.
///
/// Holds no mutable state; every call is independent.
#[derive(Debug, Clone)]
pub struct LogService {
    /// Backing document store.
    store: Arc<dyn LogStore>,
    /// Level-to-collection routing table.
    collections: Arc<CollectionMap>,
}

impl LogService {
    /// Creates a new log service.
    pub fn new(store: Arc<dyn LogStore>, collections: Arc<CollectionMap>) -> Self {
        Self { store, collections }
    }

    /// Returns every entry stored under `level` (matched case-insensitively).
    pub async fn get_by_level(&self, level: &str) -> AppResult<Vec<LogEntry>> {
        info!(level, "Fetching logs by level");

        let level: LogLevel = level.parse()?;
        let collection = self.collections.collection_for(level);
        let logs = self.store.find(collection, &LogFilter::All).await?;

        log_results("level", &logs);
        Ok(logs)
    }

    /// Returns entries whose `log_string` equals `value`, across all levels.
    pub async fn get_by_log_string(&self, value: &str) -> AppResult<Vec<LogEntry>> {
        info!(log_string = value, "Fetching logs by log_string");
        let logs = self
            .find_across(&LogFilter::LogString(value.to_string()))
            .await?;
        log_results("log_string", &logs);
        Ok(logs)
    }

    /// Returns entries whose `timestamp` equals `value`, across all levels.
    pub async fn get_by_timestamp(&self, value: &str) -> AppResult<Vec<LogEntry>> {
        info!(timestamp = value, "Fetching logs by timestamp");
        let logs = self
            .find_across(&LogFilter::Timestamp(value.to_string()))
            .await?;
        log_results("timestamp", &logs);
        Ok(logs)
    }

    /// Returns entries whose `metadata.source` equals `value`, across all levels.
    pub async fn get_by_metadata_source(&self, value: &str) -> AppResult<Vec<LogEntry>> {
        info!(source = value, "Fetching logs by metadata.source");
        let logs = self
            .find_across(&LogFilter::MetadataSource(value.to_string()))
            .await?;
        log_results("metadata.source", &logs);
        Ok(logs)
    }

    /// Inserts each entry into its level's collection, in order.
    ///
    /// The first entry with an unknown level aborts the call; entries
    /// inserted before it stay stored. Entries the store does not
    /// acknowledge are left out of the returned list.
    pub async fn create_logs(&self, entries: Vec<LogEntry>) -> AppResult<Vec<LogEntry>> {
        let mut inserted = Vec::with_capacity(entries.len());

        for entry in entries {
            info!(
                level = %entry.level,
                log_string = %entry.log_string,
                timestamp = %entry.timestamp,
                "Inserting log entry"
            );

            let level = entry.level()?;
            let collection = self.collections.collection_for(level);

            if self.store.insert_one(collection, &entry).await? {
                inserted.push(entry);
            } else {
                error!(
                    collection,
                    log_string = %entry.log_string,
                    timestamp = %entry.timestamp,
                    "Failed to insert log entry: write not acknowledged"
                );
            }
        }

        log_results("insert", &inserted);
        Ok(inserted)
    }

    /// Runs `filter` against every level's collection and concatenates the
    /// results in scan order.
    async fn find_across(&self, filter: &LogFilter) -> AppResult<Vec<LogEntry>> {
        let mut logs = Vec::new();
        for (_, collection) in self.collections.iter() {
            logs.extend(self.store.find(collection, filter).await?);
        }
        Ok(logs)
    }
}

fn log_results(operation: &str, logs: &[LogEntry]) {
    info!(operation, count = logs.len(), "Log query complete");
    if tracing::enabled!(tracing::Level::DEBUG) {
        match serde_json::to_string_pretty(logs) {
            Ok(json) => debug!(operation, results = %json, "Results"),
            Err(e) => debug!(operation, error = %e, "Results not serializable"),
        }
    }
}
