//! Storage collaborator for persisted planner state
//!
//! The engine persists a single named blob under a fixed key. The store
//! moves opaque strings; the history service owns the JSON schema inside
//! the blob. Substituting a different backend (file, embedded database,
//! in-memory map) is fine as long as the read/write/remove contract holds.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::error::{AppError, AppResult};

/// Key under which irrigation history is persisted
pub const HISTORY_KEY: &str = "irrigation_history";

/// A flat key-value blob store
pub trait BlobStore {
    /// Read the blob for a key
    ///
    /// Missing and unreadable blobs are both `None`; the caller treats
    /// them as absent state rather than an error.
    fn read(&self, key: &str) -> Option<String>;

    /// Overwrite the blob for a key
    fn write(&self, key: &str, value: &str) -> AppResult<()>;

    /// Delete the blob for a key. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> AppResult<()>;
}

/// File-backed store holding one `<key>.json` file per key
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    fn blob_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl BlobStore for FileStore {
    fn read(&self, key: &str) -> Option<String> {
        match fs::read_to_string(self.blob_path(key)) {
            Ok(data) => Some(data),
            Err(e) if e.kind() == ErrorKind::NotFound => None,
            Err(e) => {
                tracing::warn!(key, "failed to read blob: {}", e);
                None
            }
        }
    }

    fn write(&self, key: &str, value: &str) -> AppResult<()> {
        fs::create_dir_all(&self.dir)
            .map_err(|e| AppError::Storage(format!("create {}: {}", self.dir.display(), e)))?;
        fs::write(self.blob_path(key), value)
            .map_err(|e| AppError::Storage(format!("write {}: {}", key, e)))
    }

    fn remove(&self, key: &str) -> AppResult<()> {
        match fs::remove_file(self.blob_path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AppError::Storage(format!("remove {}: {}", key, e))),
        }
    }
}

/// In-memory store for tests and embedding
#[derive(Debug, Default)]
pub struct MemoryStore {
    blobs: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BlobStore for MemoryStore {
    fn read(&self, key: &str) -> Option<String> {
        self.blobs.lock().ok()?.get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) -> AppResult<()> {
        self.blobs
            .lock()
            .map_err(|_| AppError::Storage("memory store lock poisoned".to_string()))?
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> AppResult<()> {
        self.blobs
            .lock()
            .map_err(|_| AppError::Storage("memory store lock poisoned".to_string()))?
            .remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_dir() -> PathBuf {
        std::env::temp_dir().join(format!("aquacrop-store-{}", uuid::Uuid::now_v7()))
    }

    #[test]
    fn memory_store_round_trip() {
        let store = MemoryStore::new();
        assert_eq!(store.read("k"), None);

        store.write("k", "v1").unwrap();
        assert_eq!(store.read("k").as_deref(), Some("v1"));

        store.write("k", "v2").unwrap();
        assert_eq!(store.read("k").as_deref(), Some("v2"));

        store.remove("k").unwrap();
        assert_eq!(store.read("k"), None);
    }

    #[test]
    fn memory_store_remove_is_idempotent() {
        let store = MemoryStore::new();
        store.remove("missing").unwrap();
        store.remove("missing").unwrap();
    }

    #[test]
    fn file_store_round_trip() {
        let dir = temp_dir();
        let store = FileStore::new(&dir);

        assert_eq!(store.read(HISTORY_KEY), None);

        store.write(HISTORY_KEY, "[]").unwrap();
        assert_eq!(store.read(HISTORY_KEY).as_deref(), Some("[]"));
        assert!(dir.join("irrigation_history.json").exists());

        store.remove(HISTORY_KEY).unwrap();
        assert_eq!(store.read(HISTORY_KEY), None);

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn file_store_missing_key_reads_as_none() {
        let dir = temp_dir();
        let store = FileStore::new(&dir);
        assert_eq!(store.read("never_written"), None);
    }
}
