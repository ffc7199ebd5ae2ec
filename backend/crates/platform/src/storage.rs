//! Key-Value Storage Infrastructure
//!
//! Durable client storage with the same contract as the browser's
//! `localStorage`: string keys, string values, last write wins.
//!
//! Two backends:
//! - [`MemoryStorage`]: process-local, cheap to clone (clones share entries)
//! - [`FileStorage`]: a single JSON object on disk, flushed on every write

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::Mutex;
use thiserror::Error;

/// Storage backend errors
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading or writing the backing file failed
    #[error("Storage I/O failed for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Durable string key-value storage
///
/// All methods take `&self`; backends use interior mutability so a single
/// owner can hold the storage by value.
pub trait KeyValueStorage {
    /// Read the value stored under `key`
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key`; removing a missing key is not an error
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

impl<S: KeyValueStorage + ?Sized> KeyValueStorage for Arc<S> {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove_item(key)
    }
}

// ============================================================================
// Memory
// ============================================================================

/// In-memory storage
///
/// Cloning yields a handle onto the same entries, which is how tests
/// simulate a page reload: drop the store, keep the storage, restore again.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<BTreeMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.lock().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .lock()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.entries.lock().remove(key);
        Ok(())
    }
}

// ============================================================================
// File
// ============================================================================

/// File-backed storage
///
/// Entries are loaded once on [`FileStorage::open`] and the whole object is
/// rewritten after every mutation.
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    entries: Mutex<BTreeMap<String, String>>,
}

impl FileStorage {
    /// Open storage at `path`
    ///
    /// A missing file is an empty storage; the file is created on first write.
    /// A file that is not a JSON object of strings is also opened empty and
    /// is overwritten by the next write.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let path = path.into();

        let entries = match fs::read(&path) {
            Ok(bytes) if bytes.is_empty() => BTreeMap::new(),
            Ok(bytes) => serde_json::from_slice(&bytes).unwrap_or_else(|e| {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "Storage file is corrupt; starting empty"
                );
                BTreeMap::new()
            }),
            Err(e) if e.kind() == io::ErrorKind::NotFound => BTreeMap::new(),
            Err(source) => return Err(StorageError::Io { path, source }),
        };

        tracing::debug!(path = %path.display(), keys = entries.len(), "Storage opened");

        Ok(Self {
            path,
            entries: Mutex::new(entries),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Apply `change` to a copy, and adopt the copy only once it is on disk
    ///
    /// Memory never runs ahead of the file, so a failed write can be retried.
    /// `change` returns whether it modified anything.
    fn update(
        &self,
        change: impl FnOnce(&mut BTreeMap<String, String>) -> bool,
    ) -> Result<(), StorageError> {
        let mut entries = self.entries.lock();
        let mut next = entries.clone();
        if !change(&mut next) {
            return Ok(());
        }
        self.flush(&next)?;
        *entries = next;
        Ok(())
    }

    fn flush(&self, entries: &BTreeMap<String, String>) -> Result<(), StorageError> {
        let io_err = |source: io::Error| StorageError::Io {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_err)?;
        }

        let bytes = serde_json::to_vec_pretty(entries).map_err(|e| io_err(e.into()))?;

        // Write a sibling file, then rename it into place
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, bytes).map_err(io_err)?;
        fs::rename(&tmp, &self.path).map_err(io_err)
    }
}

impl KeyValueStorage for FileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.lock().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.update(|next| {
            next.insert(key.to_string(), value.to_string());
            true
        })
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.update(|next| next.remove(key).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_storage_set_get_remove() {
        let storage = MemoryStorage::new();
        assert!(storage.is_empty());

        storage.set_item("token", "abc").unwrap();
        assert_eq!(storage.get_item("token").unwrap().as_deref(), Some("abc"));

        storage.set_item("token", "def").unwrap();
        assert_eq!(storage.get_item("token").unwrap().as_deref(), Some("def"));
        assert_eq!(storage.len(), 1);

        storage.remove_item("token").unwrap();
        assert_eq!(storage.get_item("token").unwrap(), None);
    }

    #[test]
    fn test_memory_storage_clones_share_entries() {
        let storage = MemoryStorage::new();
        let other = storage.clone();

        storage.set_item("user", "{}").unwrap();
        assert_eq!(other.get_item("user").unwrap().as_deref(), Some("{}"));
    }

    #[test]
    fn test_memory_storage_remove_missing_is_ok() {
        let storage = MemoryStorage::new();
        assert!(storage.remove_item("nothing").is_ok());
    }

    #[test]
    fn test_file_storage_persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("storage.json");

        let storage = FileStorage::open(&path).unwrap();
        storage.set_item("user", r#"{"id":"1"}"#).unwrap();
        storage.set_item("token", "t-1").unwrap();
        drop(storage);

        let reopened = FileStorage::open(&path).unwrap();
        assert_eq!(
            reopened.get_item("user").unwrap().as_deref(),
            Some(r#"{"id":"1"}"#)
        );
        assert_eq!(reopened.get_item("token").unwrap().as_deref(), Some("t-1"));

        reopened.remove_item("token").unwrap();
        drop(reopened);

        let again = FileStorage::open(&path).unwrap();
        assert_eq!(again.get_item("token").unwrap(), None);
        assert!(again.get_item("user").unwrap().is_some());
    }

    #[test]
    fn test_file_storage_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::open(dir.path().join("absent.json")).unwrap();
        assert_eq!(storage.get_item("user").unwrap(), None);
        assert!(!storage.path().exists());
    }

    #[test]
    fn test_file_storage_recovers_from_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");
        fs::write(&path, "{\"user\": \"unterminated").unwrap();

        let storage = FileStorage::open(&path).unwrap();
        assert_eq!(storage.get_item("user").unwrap(), None);
        assert_eq!(storage.get_item("token").unwrap(), None);

        storage.set_item("token", "fresh").unwrap();
        drop(storage);

        let reopened = FileStorage::open(&path).unwrap();
        assert_eq!(reopened.get_item("token").unwrap().as_deref(), Some("fresh"));
    }

    #[test]
    fn test_file_storage_failed_write_keeps_memory_in_step_with_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");

        let storage = FileStorage::open(&path).unwrap();
        storage.set_item("user", "{}").unwrap();
        storage.set_item("token", "t").unwrap();

        // A directory where the temp file goes makes every flush fail
        let blocker = path.with_extension("tmp");
        fs::create_dir(&blocker).unwrap();

        assert!(storage.remove_item("token").is_err());
        assert_eq!(storage.get_item("token").unwrap().as_deref(), Some("t"));
        assert!(storage.remove_item("token").is_err());
        assert!(storage.set_item("user", "{\"id\":\"2\"}").is_err());
        assert_eq!(storage.get_item("user").unwrap().as_deref(), Some("{}"));

        fs::remove_dir(&blocker).unwrap();
        storage.remove_item("token").unwrap();
        drop(storage);

        let reopened = FileStorage::open(&path).unwrap();
        assert_eq!(reopened.get_item("token").unwrap(), None);
        assert_eq!(reopened.get_item("user").unwrap().as_deref(), Some("{}"));
    }

    #[test]
    fn test_arc_storage_delegates() {
        let storage = Arc::new(MemoryStorage::new());
        KeyValueStorage::set_item(&storage, "k", "v").unwrap();
        assert_eq!(storage.get_item("k").unwrap().as_deref(), Some("v"));
    }
}
