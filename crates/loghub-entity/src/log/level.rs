//! Log level enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use loghub_core::AppError;

/// Recognized log levels. Each level owns exactly one collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Informational entries.
    Info,
    /// Failure entries.
    Error,
    /// Completed-operation entries.
    Success,
}

impl LogLevel {
    /// Every recognized level, in scan order.
    pub const ALL: [LogLevel; 3] = [Self::Info, Self::Error, Self::Success];

    /// Return the level as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Error => "error",
            Self::Success => "success",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = AppError;

    /// Case-insensitive; the error names the rejected input verbatim.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "info" => Ok(Self::Info),
            "error" => Ok(Self::Error),
            "success" => Ok(Self::Success),
            _ => Err(AppError::validation(format!("Invalid log level: {s}"))),
        }
    }
}
