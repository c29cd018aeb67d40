//! # loghub-core
//!
//! Core crate for LogHub. Contains configuration schemas, the exact-match
//! filter type shared by every store, and the unified error system.
//!
//! This crate has **no** internal dependencies on other LogHub crates.

pub mod config;
pub mod error;
pub mod result;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
