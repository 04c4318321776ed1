//! # Storage Traits
//!
//! Defines the key-value abstraction the persistence adapter is written
//! against, so browser local storage and the in-memory store can be used
//! interchangeably.

use thiserror::Error;

/// Errors raised by storage backends and the persistence adapter
#[derive(Debug, Error)]
pub enum StorageError {
    /// The backing store cannot be reached (e.g. storage disabled by the browser)
    #[error("storage is unavailable: {0}")]
    Unavailable(String),

    #[error("failed to write '{key}': {message}")]
    Write { key: String, message: String },

    /// A stored record exists but does not parse into the expected shape
    #[error("stored value for '{key}' is malformed: {source}")]
    Malformed {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize record: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Trait defining a string key-value store.
///
/// Methods take `&self`: stores are handles onto shared storage (the browser
/// keeps one local storage area per origin).
pub trait KeyValueStore {
    /// Read the raw value stored under `key`
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key` if present
    fn remove(&self, key: &str) -> Result<(), StorageError>;

    /// Remove every key
    fn clear(&self) -> Result<(), StorageError>;
}
