//! Storage layer for the expense tracker
//!
//! Wraps a key-value store holding the serialized ledger and the theme flag.
//! The on-disk backend is a single JSON object file written atomically.

pub mod expenses;
pub mod file_io;
pub mod kv;

pub use expenses::ExpenseRepository;
pub use file_io::{read_store, set_aside, write_store_atomic, StoreMap};
pub use kv::{JsonFileStore, KeyValueStore, MemoryStore, EXPENSES_KEY, THEME_KEY};

use crate::config::paths::TrackerPaths;
use crate::error::TrackerError;

/// Owns the key-value store and the in-memory ledger loaded from it
pub struct Storage<S: KeyValueStore = JsonFileStore> {
    store: S,
    pub expenses: ExpenseRepository,
}

impl Storage<JsonFileStore> {
    /// Open the on-disk store under `paths` and load the ledger
    pub fn open(paths: &TrackerPaths) -> Result<Self, TrackerError> {
        paths.ensure_directories()?;
        let mut storage = Self::new(JsonFileStore::open(paths.store_file())?);
        storage.load_all()?;
        Ok(storage)
    }
}

impl<S: KeyValueStore> Storage<S> {
    /// Wrap a store; call [`Storage::load_all`] to read the ledger
    pub fn new(store: S) -> Self {
        Self {
            store,
            expenses: ExpenseRepository::new(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Load all data from the store
    pub fn load_all(&mut self) -> Result<(), TrackerError> {
        self.expenses.load(&self.store)
    }

    /// Persist the full ledger snapshot
    pub fn save_expenses(&mut self) -> Result<(), TrackerError> {
        self.expenses.save(&mut self.store)
    }
}
