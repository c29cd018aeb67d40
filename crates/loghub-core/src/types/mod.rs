//! Core type definitions used across the LogHub workspace.

pub mod filter;

pub use filter::LogFilter;
