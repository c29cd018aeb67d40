//! # loghub-entity
//!
//! Domain entity models for LogHub. A log entry is the only stored
//! entity; its level selects the collection it is written to.

pub mod log;

pub use log::{LogEntry, LogLevel, Metadata};
