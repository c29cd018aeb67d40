//! Log entry model.

use serde::{Deserialize, Serialize};

use loghub_core::AppResult;

use super::level::LogLevel;
use super::metadata::Metadata;

/// A single log record.
///
/// `level` keeps the caller's spelling so the entry is echoed back exactly
/// as submitted; [`LogEntry::level`] is the validated form. Entries are
/// immutable once stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Level as submitted (matched case-insensitively).
    pub level: String,
    /// Message body.
    pub log_string: String,
    /// Caller-supplied timestamp, stored verbatim.
    pub timestamp: String,
    /// Free-form metadata.
    pub metadata: Metadata,
}

impl LogEntry {
    /// Create a new entry.
    pub fn new(
        level: impl Into<String>,
        log_string: impl Into<String>,
        timestamp: impl Into<String>,
        metadata: Metadata,
    ) -> Self {
        Self {
            level: level.into(),
            log_string: log_string.into(),
            timestamp: timestamp.into(),
            metadata,
        }
    }

    /// Parse the submitted level.
    pub fn level(&self) -> AppResult<LogLevel> {
        self.level.parse()
    }
}
