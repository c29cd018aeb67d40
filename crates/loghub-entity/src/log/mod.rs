//! Log entry entity and its value types.

pub mod level;
pub mod metadata;
pub mod model;

pub use level::LogLevel;
pub use metadata::Metadata;
pub use model::LogEntry;
