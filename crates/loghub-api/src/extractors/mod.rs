//! Custom Axum extractors.
//!
//! Wrap Axum's own extractors so that malformed input surfaces through
//! [`crate::ApiError`] with the standard error body.

pub mod json;
pub mod path;
pub mod query;

pub use json::ApiJson;
pub use path::ApiPath;
pub use query::ApiQuery;
