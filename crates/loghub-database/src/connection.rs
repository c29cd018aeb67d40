//! MongoDB client management.

use std::time::Duration;

use mongodb::bson::doc;
use mongodb::options::{Acknowledgment, ClientOptions};
use mongodb::{Client, Database};
use tracing::info;

use loghub_core::config::DatabaseConfig;
use loghub_core::error::{AppError, ErrorKind};

/// Handle to the MongoDB database holding the log collections.
///
/// The driver connects lazily and pools connections internally, so this
/// handle is cheap to clone and safe to share across requests.
#[derive(Debug, Clone)]
pub struct MongoConnection {
    database: Database,
}

impl MongoConnection {
    /// Create a client from configuration.
    ///
    /// Timeouts given in the connection string take precedence over the
    /// configured ones. An unacknowledged write concern (`w=0`) is
    /// rejected: inserts must be confirmed by the server.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, AppError> {
        info!(
            uri = %mask_password(&config.uri),
            database = %config.name,
            "Connecting to MongoDB"
        );

        let mut options = ClientOptions::parse(config.uri.as_str()).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Configuration,
                format!("Invalid MongoDB connection string: {e}"),
                e,
            )
        })?;

        ensure_acknowledged(&options)?;

        if options.connect_timeout.is_none() {
            options.connect_timeout = Some(Duration::from_secs(config.connect_timeout_seconds));
        }
        if options.server_selection_timeout.is_none() {
            options.server_selection_timeout =
                Some(Duration::from_secs(config.server_selection_timeout_seconds));
        }
        if options.app_name.is_none() {
            options.app_name = Some("loghub".to_string());
        }

        let client = Client::with_options(options).map_err(|e| {
            AppError::with_source(
                ErrorKind::Database,
                format!("Failed to create MongoDB client: {e}"),
                e,
            )
        })?;
        let database = client.database(&config.name);

        Ok(Self { database })
    }

    /// Return the configured database handle.
    pub fn database(&self) -> &Database {
        &self.database
    }

    /// Check connectivity with a `ping` command.
    pub async fn health_check(&self) -> Result<bool, AppError> {
        self.database
            .run_command(doc! { "ping": 1 })
            .await
            .map(|_| true)
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Health check failed", e))
    }
}

fn ensure_acknowledged(options: &ClientOptions) -> Result<(), AppError> {
    let unacknowledged = options
        .write_concern
        .as_ref()
        .is_some_and(|wc| matches!(wc.w, Some(Acknowledgment::Nodes(0))));

    if unacknowledged {
        return Err(AppError::configuration(
            "Unacknowledged write concern (w=0) is not supported; remove it from the connection string",
        ));
    }
    Ok(())
}

/// Mask the password portion of a connection string for safe logging.
fn mask_password(uri: &str) -> String {
    if let Some(at_pos) = uri.find('@') {
        if let Some(colon_pos) = uri[..at_pos].rfind(':') {
            let scheme_end = uri.find("://").map(|p| p + 3).unwrap_or(0);
            if colon_pos > scheme_end {
                return format!("{}:****@{}", &uri[..colon_pos], &uri[at_pos + 1..]);
            }
        }
    }
    uri.to_string()
}
