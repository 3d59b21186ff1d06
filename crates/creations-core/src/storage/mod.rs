//! Storage abstraction for persistence.
//!
//! Every persisted value is a single JSON document stored under a fixed key.
//! Backends only move strings around; (de)serialization lives in
//! [`read_json`] and [`write_json`].

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Key holding every saved design, keyed by product id.
pub const DESIGNS_KEY: &str = "userDesigns";

/// Key holding the user preference record.
pub const PREFERENCES_KEY: &str = "userPreferences";

/// Key holding the most recent feedback submission.
pub const FEEDBACK_KEY: &str = "userFeedback";

/// Storage errors.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("IO error: {0}")]
    Io(String),
    #[error("Storage error: {0}")]
    Other(String),
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Trait for key-value document backends.
///
/// Implementations can keep documents in memory or on the filesystem; the
/// stores built on top never know which one they talk to.
pub trait Storage: Send + Sync {
    /// Get the document stored under `key`, if any.
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Store a document under `key`, replacing any previous one.
    fn put(&self, key: &str, document: &str) -> StorageResult<()>;

    /// Delete the document under `key`. Deleting a missing key is not an error.
    fn delete(&self, key: &str) -> StorageResult<()>;
}

/// Storage backend used by the application on this platform.
pub type PlatformStorage = FileStorage;

/// Read and parse the JSON document under `key`.
///
/// Returns `Ok(None)` when no document exists.
pub fn read_json<S, T>(storage: &S, key: &str) -> StorageResult<Option<T>>
where
    S: Storage + ?Sized,
    T: DeserializeOwned,
{
    match storage.get(key)? {
        Some(json) => serde_json::from_str(&json)
            .map(Some)
            .map_err(|e| StorageError::Serialization(format!("Failed to parse {}: {}", key, e))),
        None => Ok(None),
    }
}

/// Serialize `value` and store it under `key`.
pub fn write_json<S, T>(storage: &S, key: &str, value: &T) -> StorageResult<()>
where
    S: Storage + ?Sized,
    T: Serialize + ?Sized,
{
    let json = serde_json::to_string(value)
        .map_err(|e| StorageError::Serialization(e.to_string()))?;
    storage.put(key, &json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_json_roundtrip_through_storage() {
        let storage = MemoryStorage::new();
        let mut value = BTreeMap::new();
        value.insert("mug".to_string(), 3u32);

        write_json(&storage, "counts", &value).unwrap();
        let loaded: Option<BTreeMap<String, u32>> = read_json(&storage, "counts").unwrap();

        assert_eq!(loaded, Some(value));
    }

    #[test]
    fn test_read_missing_key() {
        let storage = MemoryStorage::new();
        let loaded: Option<Vec<String>> = read_json(&storage, "nothing").unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_read_malformed_document() {
        let storage = MemoryStorage::new();
        storage.put("broken", "{not json").unwrap();

        let result: StorageResult<Option<Vec<String>>> = read_json(&storage, "broken");
        assert!(matches!(result, Err(StorageError::Serialization(_))));
    }
}
