//! # loghub-database
//!
//! Document store access for LogHub. Log entries are partitioned into one
//! collection per level; [`CollectionMap`] is the routing table and
//! [`LogStore`] the insert/find contract every backend implements.
//!
//! - **mongodb**: MongoDB via the official driver
//! - **memory**: in-process store for tests and local runs
//!
//! The backend is selected at runtime by [`StoreManager`].

pub mod collections;
#[cfg(feature = "mongodb-backend")]
pub mod connection;
#[cfg(feature = "memory")]
pub mod memory;
#[cfg(feature = "mongodb-backend")]
pub mod mongo;
pub mod provider;
pub mod store;

pub use collections::CollectionMap;
pub use provider::StoreManager;
pub use store::LogStore;
