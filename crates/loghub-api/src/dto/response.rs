//! Response DTOs.

use serde::{Deserialize, Serialize};

/// Liveness response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `"ok"` when the process is serving.
    pub status: String,
    /// Crate version.
    pub version: String,
}

/// Liveness plus store reachability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetailedHealthResponse {
    /// `"ok"` when the store is reachable, `"degraded"` otherwise.
    pub status: String,
    /// Crate version.
    pub version: String,
    /// Configured store provider.
    pub store_provider: String,
    /// `"connected"` or `"unreachable"`.
    pub store: String,
}
