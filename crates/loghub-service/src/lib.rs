//! # loghub-service
//!
//! Business logic service layer for LogHub. Services follow constructor
//! injection: the store handle and the collection routing table are
//! provided at construction time via `Arc` references.

pub mod log;

pub use log::LogService;
