//! JSON file-based query store.
//!
//! This module provides the default [`QueryStore`] implementation: a small,
//! human-readable JSON file holding the persisted key-value entries. Writes use
//! the atomic write-to-temp + rename pattern so the file is never left in a
//! corrupt state, even if the process crashes mid-write.

use crate::domain::error::{HnScoutError, Result};
use crate::store::backend::QueryStore;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// A single persisted value with its last modification timestamp.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoredValue {
    /// The persisted text value.
    value: String,

    /// Unix timestamp of the most recent write.
    updated_at: i64,
}

/// Top-level JSON container format.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoreData {
    /// Version of the storage format for future migrations.
    version: u32,

    /// Persisted entries, indexed by logical key.
    #[serde(default)]
    entries: HashMap<String, StoredValue>,
}

impl Default for StoreData {
    fn default() -> Self {
        Self {
            version: 1,
            entries: HashMap::new(),
        }
    }
}

/// JSON file storage backend for persisted queries.
///
/// The entire dataset (a handful of entries) is kept in memory and written back
/// on every modification.
///
/// # File Format
///
/// ```json
/// {
///   "version": 1,
///   "entries": {
///     "search": {
///       "value": "react",
///       "updated_at": 1234567890
///     }
///   }
/// }
/// ```
#[derive(Debug)]
pub struct JsonQueryStore {
    /// Path to the JSON file on disk.
    file_path: PathBuf,

    /// In-memory data cache, loaded on creation.
    data: StoreData,

    /// Tracks if data has been modified since last save.
    dirty: bool,
}

impl JsonQueryStore {
    /// Creates or opens a JSON query store.
    ///
    /// If the file exists, loads existing data. Otherwise starts empty; the
    /// file is created on the first write. Parent directories are created
    /// automatically.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Parent directory creation fails
    /// - The file exists but contains invalid JSON
    /// - File permissions prevent reading
    pub fn new(file_path: PathBuf) -> Result<Self> {
        tracing::debug!(path = ?file_path, "initializing JSON query store");

        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let data = if file_path.exists() {
            Self::load_from_file(&file_path)?
        } else {
            tracing::debug!("no existing store file, starting empty");
            StoreData::default()
        };

        tracing::debug!(entry_count = data.entries.len(), "query store initialized");

        Ok(Self {
            file_path,
            data,
            dirty: false,
        })
    }

    /// Loads store data from a JSON file.
    fn load_from_file(path: &PathBuf) -> Result<StoreData> {
        let contents = std::fs::read_to_string(path)?;
        let data: StoreData = serde_json::from_str(&contents)
            .map_err(|e| HnScoutError::Storage(format!("failed to parse JSON: {e}")))?;

        tracing::debug!(
            version = data.version,
            entries = data.entries.len(),
            "loaded query store data"
        );

        Ok(data)
    }

    /// Saves store data to disk using atomic write.
    ///
    /// Writes to a temporary file first, then renames it to the target path,
    /// so a crash mid-write cannot corrupt the previous contents.
    fn save_to_file(&mut self) -> Result<()> {
        if !self.dirty {
            tracing::trace!("skipping save, no changes");
            return Ok(());
        }

        let json = serde_json::to_string_pretty(&self.data)
            .map_err(|e| HnScoutError::Storage(format!("failed to serialize JSON: {e}")))?;

        let tmp_path = self.file_path.with_extension("tmp");
        std::fs::write(&tmp_path, json)?;
        std::fs::rename(&tmp_path, &self.file_path)?;

        self.dirty = false;
        tracing::debug!(path = ?self.file_path, "query store saved");
        Ok(())
    }
}

impl QueryStore for JsonQueryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let value = self.data.entries.get(key).map(|entry| entry.value.clone());
        tracing::debug!(key = %key, found = value.is_some(), "query store lookup");
        Ok(value)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let _span = tracing::debug_span!("store_set", key = %key).entered();

        self.data.entries.insert(
            key.to_string(),
            StoredValue {
                value: value.to_string(),
                updated_at: chrono::Utc::now().timestamp(),
            },
        );

        self.dirty = true;
        self.save_to_file()
    }
}

impl Drop for JsonQueryStore {
    /// Flushes unsaved changes on drop as a last-resort safety net.
    fn drop(&mut self) {
        if self.dirty {
            if let Err(e) = self.save_to_file() {
                tracing::error!(error = %e, "failed to save query store on drop");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::backend::SEARCH_QUERY_KEY;

    #[test]
    fn get_returns_none_when_nothing_was_written() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonQueryStore::new(dir.path().join("query.json")).unwrap();
        assert_eq!(store.get(SEARCH_QUERY_KEY).unwrap(), None);
    }

    #[test]
    fn set_persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("query.json");

        {
            let mut store = JsonQueryStore::new(path.clone()).unwrap();
            store.set(SEARCH_QUERY_KEY, "redux").unwrap();
        }

        let reopened = JsonQueryStore::new(path).unwrap();
        assert_eq!(
            reopened.get(SEARCH_QUERY_KEY).unwrap(),
            Some("redux".to_string())
        );
    }

    #[test]
    fn set_overwrites_previous_value() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonQueryStore::new(dir.path().join("query.json")).unwrap();

        store.set(SEARCH_QUERY_KEY, "react").unwrap();
        store.set(SEARCH_QUERY_KEY, "rust").unwrap();

        assert_eq!(
            store.get(SEARCH_QUERY_KEY).unwrap(),
            Some("rust".to_string())
        );
    }

    #[test]
    fn parent_directories_are_created() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("deep").join("query.json");

        let mut store = JsonQueryStore::new(path.clone()).unwrap();
        store.set(SEARCH_QUERY_KEY, "react").unwrap();

        assert!(path.exists());
    }

    #[test]
    fn corrupt_file_is_reported_as_storage_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("query.json");
        std::fs::write(&path, "not json").unwrap();

        let err = JsonQueryStore::new(path).unwrap_err();
        assert!(matches!(err, HnScoutError::Storage(_)));
    }
}
