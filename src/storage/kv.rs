//! Key-value store abstraction
//!
//! The ledger and the theme flag are each kept as a single string under a
//! fixed key. Any synchronous string map can back the tracker.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{TrackerError, TrackerResult};

use super::file_io::{read_store, set_aside, write_store_atomic, StoreMap};

/// Key holding the JSON array of expenses
pub const EXPENSES_KEY: &str = "expenses";
/// Key holding the dark mode flag
pub const THEME_KEY: &str = "darkMode";

/// A synchronous string key-value store
pub trait KeyValueStore {
    /// Read the value stored under `key`
    fn get(&self, key: &str) -> TrackerResult<Option<String>>;

    /// Overwrite the value stored under `key`
    fn set(&mut self, key: &str, value: &str) -> TrackerResult<()>;
}

/// Store that keeps every key in one JSON object file
///
/// The whole file is rewritten atomically on every `set`.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    entries: StoreMap,
}

impl JsonFileStore {
    /// Open the store at `path`
    ///
    /// A missing file is an empty store. A file that is not a JSON string
    /// map is moved aside and the store starts empty.
    pub fn open(path: impl Into<PathBuf>) -> TrackerResult<Self> {
        let path = path.into();
        let entries = match read_store(&path) {
            Ok(entries) => entries,
            Err(TrackerError::Json(reason)) => {
                match set_aside(&path) {
                    Ok(moved) => warn!(
                        %reason,
                        moved_to = %moved.display(),
                        "store file is malformed, starting empty"
                    ),
                    Err(e) => warn!(%reason, error = %e, "store file is malformed, starting empty"),
                }
                StoreMap::new()
            }
            Err(e) => return Err(e),
        };
        debug!(path = %path.display(), keys = entries.len(), "opened key-value store");
        Ok(Self { path, entries })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> TrackerResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    /// The in-memory map changes only after the file write succeeds
    fn set(&mut self, key: &str, value: &str) -> TrackerResult<()> {
        let mut updated = self.entries.clone();
        updated.insert(key.to_string(), value.to_string());
        write_store_atomic(&self.path, &updated)?;
        self.entries = updated;
        Ok(())
    }
}

/// In-memory store, used by tests and as a scratch backend
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a store with a single entry
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.entries.insert(key.to_string(), value.to_string());
        store
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> TrackerResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> TrackerResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
