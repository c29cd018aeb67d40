//! Exact-match filters understood by every log store.

/// Document field holding the log message body.
pub const LOG_STRING_FIELD: &str = "log_string";
/// Document field holding the caller-supplied timestamp.
pub const TIMESTAMP_FIELD: &str = "timestamp";
/// Dotted path of the queryable metadata field.
pub const METADATA_SOURCE_FIELD: &str = "metadata.source";

/// A single exact-match condition, or no condition at all.
///
/// Every condition is string equality on one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogFilter {
    /// Match every document in the collection.
    All,
    /// `log_string == value`.
    LogString(String),
    /// `timestamp == value`.
    Timestamp(String),
    /// `metadata.source == value`.
    MetadataSource(String),
}

impl LogFilter {
    /// The dotted document path this filter compares, if any.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::All => None,
            Self::LogString(_) => Some(LOG_STRING_FIELD),
            Self::Timestamp(_) => Some(TIMESTAMP_FIELD),
            Self::MetadataSource(_) => Some(METADATA_SOURCE_FIELD),
        }
    }

    /// The value the field must equal, if any.
    pub fn value(&self) -> Option<&str> {
        match self {
            Self::All => None,
            Self::LogString(v) | Self::Timestamp(v) | Self::MetadataSource(v) => Some(v),
        }
    }

    /// Whether a JSON document satisfies this filter.
    ///
    /// Dotted paths descend into nested objects; a missing field or a
    /// non-string value never matches.
    pub fn matches(&self, document: &serde_json::Value) -> bool {
        let (Some(path), Some(expected)) = (self.field(), self.value()) else {
            return true;
        };

        path.split('.')
            .try_fold(document, |node, key| node.get(key))
            .and_then(serde_json::Value::as_str)
            .is_some_and(|actual| actual == expected)
    }
}
