//! Durable key-value storage.
//!
//! The site keeps exactly two values across restarts: the selected theme id
//! and an optional speech-synthesis credential. Both are plain strings with no
//! versioning. [`FileStore`] persists them as a JSON object in the data
//! directory; [`MemoryStore`] backs tests and the fallback path when the data
//! directory is unusable.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use tracing::{debug, warn};

use crate::error::{FolioError, Result};

/// Key under which the selected theme id is stored.
pub const THEME_KEY: &str = "portfolio-theme";

/// Key under which the speech-synthesis credential is stored.
pub const VOICE_KEY: &str = "elevenlabs_api_key";

/// File name of the durable store inside the data directory.
pub const STORE_FILE: &str = "storage.json";

/// A string-to-string store that survives restarts.
///
/// Reads are synchronous snapshots. Each key has a single writer (the
/// component that owns it), so no further coordination is needed.
pub trait KeyValueStore: Send + Sync {
    /// Returns the value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Removes `key` from the store.
    fn remove(&self, key: &str) -> Result<()>;
}

/// Shared handle to a store.
pub type SharedStore = Arc<dyn KeyValueStore>;

/// In-memory store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<BTreeMap<String, String>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with `entries`.
    pub fn with_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let map = entries
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Self {
            entries: Mutex::new(map),
        }
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries
            .lock()
            .ok()
            .and_then(|entries| entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(key.to_string(), value.to_string());
        }
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        if let Ok(mut entries) = self.entries.lock() {
            entries.remove(key);
        }
        Ok(())
    }
}

/// JSON-file backed store.
///
/// The whole map is cached in memory and rewritten to disk on every change.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: Mutex<BTreeMap<String, String>>,
}

impl FileStore {
    /// Opens (or creates) the store file inside `data_dir`.
    ///
    /// A missing file is an empty store. A malformed file is reported as
    /// [`FolioError::StorageFormat`].
    pub fn open(data_dir: impl AsRef<Path>) -> Result<Self> {
        let dir = data_dir.as_ref();
        fs::create_dir_all(dir).map_err(|source| FolioError::Storage {
            path: dir.to_path_buf(),
            source,
        })?;

        let path = dir.join(STORE_FILE);
        let entries = match fs::read_to_string(&path) {
            Ok(raw) if raw.trim().is_empty() => BTreeMap::new(),
            Ok(raw) => serde_json::from_str(&raw)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(source) => return Err(FolioError::Storage { path, source }),
        };

        debug!(path = %path.display(), keys = entries.len(), "Opened durable store");
        Ok(Self {
            path,
            entries: Mutex::new(entries),
        })
    }

    fn flush(&self, entries: &BTreeMap<String, String>) -> Result<()> {
        let raw = serde_json::to_string_pretty(entries)?;
        fs::write(&self.path, raw).map_err(|source| FolioError::Storage {
            path: self.path.clone(),
            source,
        })
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries
            .lock()
            .ok()
            .and_then(|entries| entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let Ok(mut entries) = self.entries.lock() else {
            warn!(key, "Durable store lock poisoned; dropping write");
            return Ok(());
        };
        entries.insert(key.to_string(), value.to_string());
        self.flush(&entries)
    }

    fn remove(&self, key: &str) -> Result<()> {
        let Ok(mut entries) = self.entries.lock() else {
            return Ok(());
        };
        if entries.remove(key).is_some() {
            self.flush(&entries)?;
        }
        Ok(())
    }
}

/// Opens the durable store in `data_dir`, falling back to memory.
pub fn open_or_memory(data_dir: &Path) -> SharedStore {
    match FileStore::open(data_dir) {
        Ok(store) => Arc::new(store),
        Err(e) => {
            warn!(error = %e, "Durable store unavailable, settings will not persist");
            Arc::new(MemoryStore::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_roundtrip() {
        let store = MemoryStore::new();
        assert_eq!(store.get(THEME_KEY), None);

        store.set(THEME_KEY, "ocean").unwrap();
        assert_eq!(store.get(THEME_KEY).as_deref(), Some("ocean"));

        store.remove(THEME_KEY).unwrap();
        assert_eq!(store.get(THEME_KEY), None);
    }

    #[test]
    fn test_file_store_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();

        {
            let store = FileStore::open(dir.path()).unwrap();
            store.set(THEME_KEY, "sunset").unwrap();
            store.set(VOICE_KEY, "secret").unwrap();
            store.remove(VOICE_KEY).unwrap();
        }

        let reopened = FileStore::open(dir.path()).unwrap();
        assert_eq!(reopened.get(THEME_KEY).as_deref(), Some("sunset"));
        assert_eq!(reopened.get(VOICE_KEY), None);
    }

    #[test]
    fn test_file_store_rejects_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(STORE_FILE), "[1, 2, 3]").unwrap();

        let err = FileStore::open(dir.path()).unwrap_err();
        assert!(matches!(err, FolioError::StorageFormat(_)));
    }

    #[test]
    fn test_open_or_memory_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        // A file where the directory should be makes create_dir_all fail.
        let blocker = dir.path().join("blocked");
        fs::write(&blocker, "x").unwrap();

        let store = open_or_memory(&blocker);
        store.set(THEME_KEY, "forest").unwrap();
        assert_eq!(store.get(THEME_KEY).as_deref(), Some("forest"));
    }
}
