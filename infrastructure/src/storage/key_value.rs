//! Flat key-value persistence substrate.
//!
//! Values are opaque strings; callers own their encoding. The file backend
//! keeps a single JSON object on disk and rewrites it atomically
//! (temp file + rename) on every mutation.

use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};
use thiserror::Error;
use tracing::debug;

/// Errors from the key-value backends
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Store file is not a valid JSON object: {0}")]
    Corrupt(#[from] serde_json::Error),

    #[error("Store lock poisoned")]
    Poisoned,
}

/// A flat string-to-string store.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// In-memory store, used for tests and ephemeral runs.
#[derive(Default)]
pub struct MemoryKeyValueStore {
    entries: Mutex<BTreeMap<String, String>>,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, BTreeMap<String, String>>, StorageError> {
        self.entries.lock().map_err(|_| StorageError::Poisoned)
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn get(&self, key: &str) -> Option<String> {
        self.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.lock()?.remove(key);
        Ok(())
    }
}

/// JSON-file-backed store.
///
/// The whole map is loaded on open and kept in memory; each mutation writes
/// the full map back before the in-memory copy is updated.
pub struct JsonFileStore {
    path: PathBuf,
    entries: Mutex<BTreeMap<String, String>>,
}

impl JsonFileStore {
    /// Open (or create on first write) the store at `path`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let path = path.as_ref().to_path_buf();

        let entries = if path.exists() {
            let content = fs::read_to_string(&path)?;
            if content.trim().is_empty() {
                BTreeMap::new()
            } else {
                serde_json::from_str(&content)?
            }
        } else {
            BTreeMap::new()
        };

        debug!("Opened store {} ({} keys)", path.display(), entries.len());

        Ok(Self {
            path,
            entries: Mutex::new(entries),
        })
    }

    /// `$XDG_DATA_HOME/parley/store.json` (or the platform equivalent).
    pub fn default_path() -> Option<PathBuf> {
        dirs::data_dir().map(|d| d.join("parley").join("store.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn lock(&self) -> Result<MutexGuard<'_, BTreeMap<String, String>>, StorageError> {
        self.entries.lock().map_err(|_| StorageError::Poisoned)
    }

    fn persist(&self, entries: &BTreeMap<String, String>) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(entries)?;
        let tmp_path = self.path.with_extension("json.tmp");
        {
            let mut file = fs::File::create(&tmp_path)?;
            file.write_all(content.as_bytes())?;
            file.sync_all()?;
        }
        fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }

    fn update<F>(&self, mutate: F) -> Result<(), StorageError>
    where
        F: FnOnce(&mut BTreeMap<String, String>),
    {
        let mut entries = self.lock()?;
        let mut next = entries.clone();
        mutate(&mut next);
        self.persist(&next)?;
        *entries = next;
        Ok(())
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.update(|entries| {
            entries.insert(key.to_string(), value.to_string());
        })
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.update(|entries| {
            entries.remove(key);
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_set_get_remove() {
        let store = MemoryKeyValueStore::new();
        assert_eq!(store.get("a"), None);

        store.set("a", "1").unwrap();
        assert_eq!(store.get("a"), Some("1".to_string()));

        store.remove("a").unwrap();
        assert_eq!(store.get("a"), None);
    }

    #[test]
    fn test_file_store_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("store.json");

        let store = JsonFileStore::open(&path).unwrap();
        store.set("api_key", "sk-test").unwrap();
        store.set("latest_session_id", "abc").unwrap();
        store.remove("latest_session_id").unwrap();
        drop(store);

        let reopened = JsonFileStore::open(&path).unwrap();
        assert_eq!(reopened.get("api_key"), Some("sk-test".to_string()));
        assert_eq!(reopened.get("latest_session_id"), None);
    }

    #[test]
    fn test_file_store_leaves_no_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");

        let store = JsonFileStore::open(&path).unwrap();
        store.set("k", "v").unwrap();

        assert!(path.exists());
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[test]
    fn test_file_store_treats_empty_file_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        fs::write(&path, "  \n").unwrap();

        let store = JsonFileStore::open(&path).unwrap();
        assert_eq!(store.get("anything"), None);
    }

    #[test]
    fn test_file_store_rejects_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        fs::write(&path, "[1, 2, 3]").unwrap();

        let result = JsonFileStore::open(&path);
        assert!(matches!(result, Err(StorageError::Corrupt(_))));
    }

    #[test]
    fn test_default_path_mentions_parley() {
        if let Some(path) = JsonFileStore::default_path() {
            assert!(path.to_string_lossy().contains("parley"));
        }
    }
}
