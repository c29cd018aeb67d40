//! # loghub-api
//!
//! HTTP API layer for LogHub built on Axum.
//!
//! Provides the log ingestion and query endpoints, health checks,
//! middleware (request logging, CORS, compression), extractors
//! that report bad input as validation errors, and error mapping.

pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use error::ApiError;
pub use router::build_router;
pub use state::AppState;
