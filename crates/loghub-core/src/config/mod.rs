//! Application configuration schemas.
//!
//! All configuration structs are deserialized via the `config` crate.
//! Sources are layered, later ones winning:
//!
//! 1. serde defaults on every field
//! 2. `config/default.toml` (optional)
//! 3. `config/{env}.toml` (optional)
//! 4. `LOGHUB__SECTION__KEY` environment variables
//! 5. the legacy `MONGO_URI` / `DATABASE_NAME` variables

pub mod app;
pub mod database;
pub mod logging;

use config::builder::DefaultState;
use config::{ConfigBuilder, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

pub use self::app::{CorsConfig, ServerConfig};
pub use self::database::{CollectionNames, DatabaseConfig};
pub use self::logging::LoggingConfig;

use crate::error::AppError;
use crate::result::AppResult;

/// Legacy variable holding the MongoDB connection string.
pub const MONGO_URI_VAR: &str = "MONGO_URI";
/// Legacy variable holding the database name.
pub const DATABASE_NAME_VAR: &str = "DATABASE_NAME";

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Document store settings.
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Values of the legacy connection variables, captured once at startup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LegacyOverrides {
    /// Value of `MONGO_URI`, if set.
    pub mongo_uri: Option<String>,
    /// Value of `DATABASE_NAME`, if set.
    pub database_name: Option<String>,
}

impl LegacyOverrides {
    /// Read the legacy variables from the process environment.
    pub fn from_env() -> Self {
        Self {
            mongo_uri: std::env::var(MONGO_URI_VAR).ok(),
            database_name: std::env::var(DATABASE_NAME_VAR).ok(),
        }
    }
}

impl AppConfig {
    /// Load configuration for the given environment name.
    pub fn load(env: &str) -> AppResult<Self> {
        let builder = config::Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                Environment::with_prefix("LOGHUB")
                    .separator("__")
                    .try_parsing(true),
            );

        Self::build(builder, &LegacyOverrides::from_env())
    }

    /// Load configuration from an in-memory TOML document.
    pub fn from_toml_str(toml: &str, legacy: &LegacyOverrides) -> AppResult<Self> {
        let builder = config::Config::builder().add_source(File::from_str(toml, FileFormat::Toml));
        Self::build(builder, legacy)
    }

    fn build(
        builder: ConfigBuilder<DefaultState>,
        legacy: &LegacyOverrides,
    ) -> AppResult<Self> {
        let config = builder
            .set_override_option("database.uri", legacy.mongo_uri.clone())?
            .set_override_option("database.name", legacy.database_name.clone())?
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }
}
