//! Convenience result type alias for LogHub.

use crate::error::AppError;

/// A specialized `Result` type for LogHub operations.
///
/// Every crate returns `AppResult<T>` so that errors flow to the HTTP
/// boundary with `?` and are mapped to a status code exactly once.
pub type AppResult<T> = Result<T, AppError>;
