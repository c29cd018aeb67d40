//! Document store configuration.

use serde::{Deserialize, Serialize};

/// Document store connection configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Store provider: `"mongodb"` or `"memory"`.
    #[serde(default = "default_provider")]
    pub provider: String,
    /// MongoDB connection string.
    #[serde(default = "default_uri")]
    pub uri: String,
    /// Database name holding the log collections.
    #[serde(default = "default_name")]
    pub name: String,
    /// Connection timeout in seconds.
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u64,
    /// Server selection timeout in seconds.
    #[serde(default = "default_server_selection_timeout")]
    pub server_selection_timeout_seconds: u64,
    /// Collection name per log level.
    #[serde(default)]
    pub collections: CollectionNames,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            uri: default_uri(),
            name: default_name(),
            connect_timeout_seconds: default_connect_timeout(),
            server_selection_timeout_seconds: default_server_selection_timeout(),
            collections: CollectionNames::default(),
        }
    }
}

/// Collection names, one per recognized log level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionNames {
    /// Collection for `info` entries.
    #[serde(default = "default_info_collection")]
    pub info: String,
    /// Collection for `error` entries.
    #[serde(default = "default_error_collection")]
    pub error: String,
    /// Collection for `success` entries.
    #[serde(default = "default_success_collection")]
    pub success: String,
}

impl Default for CollectionNames {
    fn default() -> Self {
        Self {
            info: default_info_collection(),
            error: default_error_collection(),
            success: default_success_collection(),
        }
    }
}

fn default_provider() -> String {
    "mongodb".to_string()
}

fn default_uri() -> String {
    "mongodb://localhost:27017/".to_string()
}

fn default_name() -> String {
    "your_database_name".to_string()
}

fn default_connect_timeout() -> u64 {
    10
}

fn default_server_selection_timeout() -> u64 {
    10
}

fn default_info_collection() -> String {
    "info_logs".to_string()
}

fn default_error_collection() -> String {
    "error_logs".to_string()
}

fn default_success_collection() -> String {
    "success_logs".to_string()
}
