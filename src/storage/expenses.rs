//! Expense repository
//!
//! Holds the in-memory ledger and mirrors it to the `expenses` key as a
//! whole-sequence JSON snapshot.

use tracing::{debug, warn};

use crate::error::{TrackerError, TrackerResult};
use crate::models::Expense;

use super::kv::{KeyValueStore, EXPENSES_KEY};

/// Ordered in-memory ledger
#[derive(Debug, Clone, Default)]
pub struct ExpenseRepository {
    records: Vec<Expense>,
}

impl ExpenseRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the in-memory ledger with the stored snapshot
    ///
    /// A missing or unreadable snapshot yields an empty ledger rather than
    /// an error.
    pub fn load<S: KeyValueStore + ?Sized>(&mut self, store: &S) -> TrackerResult<()> {
        self.records = match store.get(EXPENSES_KEY)? {
            None => Vec::new(),
            Some(raw) => match serde_json::from_str::<Vec<Expense>>(&raw) {
                Ok(records) => records,
                Err(e) => {
                    warn!(error = %e, "stored ledger is malformed, starting empty");
                    Vec::new()
                }
            },
        };
        debug!(count = self.records.len(), "loaded ledger");
        Ok(())
    }

    /// Overwrite the stored snapshot with the full ledger
    pub fn save<S: KeyValueStore + ?Sized>(&self, store: &mut S) -> TrackerResult<()> {
        let json = serde_json::to_string(&self.records)
            .map_err(|e| TrackerError::Storage(format!("Failed to serialize ledger: {}", e)))?;
        store.set(EXPENSES_KEY, &json)?;
        debug!(count = self.records.len(), "persisted ledger");
        Ok(())
    }

    pub fn get_all(&self) -> &[Expense] {
        &self.records
    }

    pub fn get(&self, index: usize) -> Option<&Expense> {
        self.records.get(index)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Append an expense, returning its position
    pub fn push(&mut self, expense: Expense) -> usize {
        self.records.push(expense);
        self.records.len() - 1
    }

    /// Insert an expense at `index`, clamped to the end of the ledger
    pub fn insert(&mut self, index: usize, expense: Expense) {
        let index = index.min(self.records.len());
        self.records.insert(index, expense);
    }

    /// Remove the expense at `index`, shifting later entries down
    pub fn remove(&mut self, index: usize) -> Option<Expense> {
        if index < self.records.len() {
            Some(self.records.remove(index))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::kv::MemoryStore;

    fn sample() -> Vec<Expense> {
        vec![
            Expense::new("2024-01-15", "Food", 12.5, "lunch"),
            Expense::new("2024-02-01", "Food", 5.0, "coffee"),
        ]
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let mut store = MemoryStore::new();
        let mut repo = ExpenseRepository::new();
        for expense in sample() {
            repo.push(expense);
        }
        repo.save(&mut store).unwrap();

        let mut reloaded = ExpenseRepository::new();
        reloaded.load(&store).unwrap();
        assert_eq!(reloaded.get_all(), sample().as_slice());
    }

    #[test]
    fn test_load_absent_is_empty() {
        let mut repo = ExpenseRepository::new();
        repo.push(Expense::new("2024-01-01", "Food", 1.0, "x"));
        repo.load(&MemoryStore::new()).unwrap();
        assert!(repo.is_empty());
    }

    #[test]
    fn test_load_malformed_is_empty() {
        for raw in ["not json", "{\"date\":1}", "[{\"date\":\"2024-01-01\"}]", "null"] {
            let store = MemoryStore::with_entry(EXPENSES_KEY, raw);
            let mut repo = ExpenseRepository::new();
            repo.load(&store).unwrap();
            assert!(repo.is_empty(), "expected empty ledger for {raw}");
        }
    }

    #[test]
    fn test_remove_out_of_range() {
        let mut repo = ExpenseRepository::new();
        repo.push(Expense::new("2024-01-01", "Food", 1.0, "x"));
        assert!(repo.remove(3).is_none());
        assert_eq!(repo.len(), 1);
    }
}
