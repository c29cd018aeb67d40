//! Log store trait for pluggable document store backends.

use async_trait::async_trait;

use loghub_core::result::AppResult;
use loghub_core::types::LogFilter;
use loghub_entity::LogEntry;

/// Insert/find primitives of a collection-oriented document store.
///
/// Implementations exist for MongoDB and for an in-process map. Collection
/// names come from [`crate::CollectionMap`]; the store itself knows nothing
/// about levels.
#[async_trait]
pub trait LogStore: Send + Sync + std::fmt::Debug + 'static {
    /// Return the provider type name (e.g., "mongodb", "memory").
    fn provider_type(&self) -> &str;

    /// Check whether the store is reachable.
    async fn health_check(&self) -> AppResult<bool>;

    /// Insert one document into `collection`.
    ///
    /// Returns `Ok(false)` when the store accepted the call but did not
    /// acknowledge the write.
    async fn insert_one(&self, collection: &str, entry: &LogEntry) -> AppResult<bool>;

    /// Return every document in `collection` matching `filter`, in store order.
    async fn find(&self, collection: &str, filter: &LogFilter) -> AppResult<Vec<LogEntry>>;
}
