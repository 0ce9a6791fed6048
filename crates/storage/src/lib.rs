//! # Key-Value Text Store
//!
//! The persistence collaborator seam. The ledgers only ever ask for two
//! operations: load the text under a key, and replace it wholesale. The
//! latest full write wins; there is no diffing, no transaction log and no
//! locking, because exactly one session owns the data at a time.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

pub mod error;

pub use error::StorageError;

/// An opaque key-value text store: `load` returns the saved text or `None`,
/// `save` replaces it.
pub trait TextStore {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn save(&mut self, key: &str, text: &str) -> Result<(), StorageError>;
}

/// A store keeping one `<key>.json` file per key under a data directory.
///
/// The directory is created on first save. Keys are restricted to a flat
/// alphanumeric-and-underscore alphabet so a key can never escape the
/// directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        if key.is_empty() || !key.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Err(StorageError::InvalidKey(key.to_string()));
        }
        Ok(self.root.join(format!("{key}.json")))
    }
}

impl TextStore for FileStore {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(text) => {
                debug!(key, bytes = text.len(), "loaded store file");
                Ok(Some(text))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&mut self, key: &str, text: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.root)?;
        fs::write(&path, text)?;
        debug!(key, bytes = text.len(), "saved store file");
        Ok(())
    }
}

/// An in-memory store for tests and ephemeral sessions.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TextStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn save(&mut self, key: &str, text: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), text.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn file_store_round_trips_text() {
        let dir = tempdir().unwrap();
        let mut store = FileStore::new(dir.path());
        assert!(store.load("orders").unwrap().is_none());

        store.save("orders", "[1,2,3]").unwrap();
        assert_eq!(store.load("orders").unwrap().as_deref(), Some("[1,2,3]"));

        // Last write wins.
        store.save("orders", "[]").unwrap();
        assert_eq!(store.load("orders").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn file_store_creates_its_directory_on_demand() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("data").join("khata");
        let mut store = FileStore::new(&nested);
        store.save("categories", "[]").unwrap();
        assert!(nested.join("categories.json").exists());
    }

    #[test]
    fn file_store_rejects_path_like_keys() {
        let dir = tempdir().unwrap();
        let mut store = FileStore::new(dir.path());
        assert!(store.save("../escape", "x").is_err());
        assert!(store.load("").is_err());
    }

    #[test]
    fn memory_store_round_trips_text() {
        let mut store = MemoryStore::new();
        assert!(store.load("earnings").unwrap().is_none());
        store.save("earnings", "[]").unwrap();
        assert_eq!(store.load("earnings").unwrap().as_deref(), Some("[]"));
    }
}
