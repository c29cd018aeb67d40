//! Log ingestion and lookup.

pub mod service;

pub use service::LogService;
