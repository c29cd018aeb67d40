//! Level-to-collection routing table.

use std::collections::HashSet;

use loghub_core::config::CollectionNames;
use loghub_core::error::AppError;
use loghub_core::result::AppResult;
use loghub_entity::LogLevel;

/// Immutable mapping from each [`LogLevel`] to its collection name.
///
/// Built once from configuration and shared read-only by every request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionMap {
    info: String,
    error: String,
    success: String,
}

impl CollectionMap {
    /// Build the routing table, rejecting blank or shared collection names.
    pub fn from_config(names: &CollectionNames) -> AppResult<Self> {
        let map = Self {
            info: names.info.trim().to_string(),
            error: names.error.trim().to_string(),
            success: names.success.trim().to_string(),
        };

        map.validate()?;
        Ok(map)
    }

    fn validate(&self) -> AppResult<()> {
        let mut seen = HashSet::new();
        for (level, name) in self.iter() {
            if name.is_empty() {
                return Err(AppError::configuration(format!(
                    "Collection name for level '{level}' must not be empty"
                )));
            }
            if !seen.insert(name) {
                return Err(AppError::configuration(format!(
                    "Collection '{name}' is assigned to more than one level"
                )));
            }
        }
        Ok(())
    }

    /// Collection holding entries of `level`.
    pub fn collection_for(&self, level: LogLevel) -> &str {
        match level {
            LogLevel::Info => &self.info,
            LogLevel::Error => &self.error,
            LogLevel::Success => &self.success,
        }
    }

    /// Every `(level, collection)` pair in scan order.
    pub fn iter(&self) -> impl Iterator<Item = (LogLevel, &str)> + '_ {
        LogLevel::ALL
            .into_iter()
            .map(move |level| (level, self.collection_for(level)))
    }
}

impl Default for CollectionMap {
    fn default() -> Self {
        let names = CollectionNames::default();
        Self {
            info: names.info,
            error: names.error,
            success: names.success,
        }
    }
}
