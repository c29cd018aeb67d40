//! Query parameter DTOs.

use serde::Deserialize;

/// `?log_string=` parameter.
#[derive(Debug, Clone, Deserialize)]
pub struct LogStringQuery {
    /// Exact message body to match.
    pub log_string: String,
}

/// `?timestamp=` parameter.
#[derive(Debug, Clone, Deserialize)]
pub struct TimestampQuery {
    /// Exact timestamp string to match.
    pub timestamp: String,
}

/// `?source=` parameter.
#[derive(Debug, Clone, Deserialize)]
pub struct SourceQuery {
    /// Exact `metadata.source` value to match.
    pub source: String,
}
