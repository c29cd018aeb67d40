//! Free-form metadata attached to a log entry.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Key under which callers name the emitting component.
pub const SOURCE_KEY: &str = "source";

/// Ordered string-keyed map of arbitrary JSON values.
///
/// Only the shape is validated (it must be an object); values may be
/// strings, numbers, booleans, null, arrays, or nested maps.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Metadata(Map<String, Value>);

impl Metadata {
    /// Create an empty metadata map.
    pub fn new() -> Self {
        Self::default()
    }

    /// The `source` field, when present and a string.
    pub fn source(&self) -> Option<&str> {
        self.0.get(SOURCE_KEY).and_then(Value::as_str)
    }

    /// Insert a top-level key, returning the previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    /// Builder-style [`Metadata::insert`].
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Number of top-level keys.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Borrow the underlying map.
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }
}

impl From<Map<String, Value>> for Metadata {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}
