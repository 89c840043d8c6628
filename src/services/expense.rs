//! Expense service
//!
//! Provides the ledger mutations: validated add and confirmed positional
//! delete. Every successful mutation persists the full ledger snapshot.

use tracing::{info, warn};

use crate::error::{TrackerError, TrackerResult};
use crate::models::{Expense, ExpenseInput, Selector};
use crate::storage::{KeyValueStore, Storage};

use super::summary::LedgerView;

/// Question asked before a deletion
pub const DELETE_PROMPT: &str = "Are you sure you want to delete this expense?";

/// A yes/no decision point
pub trait Confirm {
    fn confirm(&mut self, prompt: &str) -> bool;
}

impl<F> Confirm for F
where
    F: FnMut(&str) -> bool,
{
    fn confirm(&mut self, prompt: &str) -> bool {
        self(prompt)
    }
}

/// Answers yes without asking
#[derive(Debug, Clone, Copy, Default)]
pub struct AssumeYes;

impl Confirm for AssumeYes {
    fn confirm(&mut self, _prompt: &str) -> bool {
        true
    }
}

/// Service for ledger mutations
pub struct ExpenseService<'a, S: KeyValueStore> {
    storage: &'a mut Storage<S>,
}

impl<'a, S: KeyValueStore> ExpenseService<'a, S> {
    pub fn new(storage: &'a mut Storage<S>) -> Self {
        Self { storage }
    }

    /// The full ledger in insertion order
    pub fn list(&self) -> &[Expense] {
        self.storage.expenses.get_all()
    }

    /// Filter and aggregate the ledger for display
    pub fn view(&self, selector: Selector) -> LedgerView<'_> {
        LedgerView::build(self.storage.expenses.get_all(), selector)
    }

    /// Validate `input`, append it and persist the ledger
    ///
    /// On a validation error nothing changes. If persisting fails the
    /// appended record is rolled back.
    pub fn add(&mut self, input: &ExpenseInput) -> TrackerResult<Expense> {
        let expense = input.validate()?;

        let index = self.storage.expenses.push(expense.clone());
        if let Err(e) = self.storage.save_expenses() {
            self.storage.expenses.remove(index);
            return Err(e);
        }

        info!(
            index,
            date = %expense.date,
            category = %expense.category,
            amount = expense.amount,
            "added expense"
        );
        Ok(expense)
    }

    /// Delete the expense at ledger position `index` after confirmation
    ///
    /// Out-of-range indices fail with `ExpenseNotFound` before the user is
    /// asked anything. A declined confirmation fails with
    /// `DeleteNotConfirmed` and leaves the ledger untouched.
    pub fn delete(&mut self, index: usize, confirm: &mut dyn Confirm) -> TrackerResult<Expense> {
        let len = self.storage.expenses.len();
        if index >= len {
            warn!(index, len, "delete requested for missing expense");
            return Err(TrackerError::ExpenseNotFound { index, len });
        }

        if !confirm.confirm(DELETE_PROMPT) {
            return Err(TrackerError::DeleteNotConfirmed);
        }

        let removed = self
            .storage
            .expenses
            .remove(index)
            .ok_or(TrackerError::ExpenseNotFound { index, len })?;

        if let Err(e) = self.storage.save_expenses() {
            // Put it back where it was so memory matches the store
            self.storage.expenses.insert(index, removed);
            return Err(e);
        }

        info!(index, description = %removed.description, "deleted expense");
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TrackerPaths;
    use crate::services::PreferenceService;
    use crate::storage::{MemoryStore, EXPENSES_KEY, THEME_KEY};
    use tempfile::TempDir;

    fn storage() -> Storage<MemoryStore> {
        let mut storage = Storage::new(MemoryStore::new());
        storage.load_all().unwrap();
        storage
    }

    fn seeded() -> Storage<MemoryStore> {
        let mut storage = storage();
        let mut service = ExpenseService::new(&mut storage);
        for input in [
            ExpenseInput::new("2024-01-15", "Food", "12.50", "lunch"),
            ExpenseInput::new("2024-02-01", "Food", "5.00", "coffee"),
            ExpenseInput::new("2024-01-20", "Transport", "20.00", "taxi"),
        ] {
            service.add(&input).unwrap();
        }
        storage
    }

    fn stored_ledger(storage: &Storage<MemoryStore>) -> Vec<Expense> {
        let raw = storage.store().get(EXPENSES_KEY).unwrap().unwrap();
        serde_json::from_str(&raw).unwrap()
    }

    #[test]
    fn test_add_appends_and_persists() {
        let mut storage = storage();
        let mut service = ExpenseService::new(&mut storage);

        let added = service
            .add(&ExpenseInput::new("2024-03-05", "Bills", "99.99", "internet"))
            .unwrap();

        assert_eq!(service.list().len(), 1);
        assert_eq!(added, Expense::new("2024-03-05", "Bills", 99.99, "internet"));
        assert_eq!(service.list()[0], added);
        assert_eq!(stored_ledger(&storage), vec![added]);
    }

    #[test]
    fn test_invalid_add_leaves_ledger_unchanged() {
        let mut storage = seeded();
        let before = storage.expenses.get_all().to_vec();
        let mut service = ExpenseService::new(&mut storage);

        let invalid = [
            ExpenseInput::new("", "Food", "1", "x"),
            ExpenseInput::new("2024-01-01", "", "1", "x"),
            ExpenseInput::new("2024-01-01", "Food", "abc", "x"),
            ExpenseInput::new("2024-01-01", "Food", "1", ""),
        ];
        for input in invalid {
            let err = service.add(&input).unwrap_err();
            assert!(err.is_validation(), "expected validation error for {input:?}");
        }

        assert_eq!(storage.expenses.get_all(), before.as_slice());
        assert_eq!(stored_ledger(&storage), before);
    }

    #[test]
    fn test_delete_shifts_later_indices() {
        let mut storage = seeded();
        let mut service = ExpenseService::new(&mut storage);

        let removed = service.delete(0, &mut AssumeYes).unwrap();
        assert_eq!(removed.description, "lunch");
        assert_eq!(service.list()[0].description, "coffee");
        assert_eq!(service.list()[1].description, "taxi");

        // Re-adding appends at the end rather than restoring position 0
        service
            .add(&ExpenseInput::new("2024-01-15", "Food", "12.50", "lunch"))
            .unwrap();
        let order: Vec<_> = service.list().iter().map(|e| e.description.as_str()).collect();
        assert_eq!(order, vec!["coffee", "taxi", "lunch"]);
        assert_eq!(stored_ledger(&storage).len(), 3);
    }

    #[test]
    fn test_declined_delete_is_noop() {
        let mut storage = seeded();
        let mut service = ExpenseService::new(&mut storage);

        let mut asked = None;
        let mut decline = |prompt: &str| {
            asked = Some(prompt.to_string());
            false
        };
        let err = service.delete(1, &mut decline).unwrap_err();

        assert!(matches!(err, TrackerError::DeleteNotConfirmed));
        assert_eq!(asked.as_deref(), Some(DELETE_PROMPT));
        assert_eq!(storage.expenses.len(), 3);
    }

    #[test]
    fn test_out_of_range_delete_is_error_without_prompt() {
        let mut storage = seeded();
        let mut service = ExpenseService::new(&mut storage);

        let mut prompted = false;
        let mut confirm = |_: &str| {
            prompted = true;
            true
        };
        let err = service.delete(3, &mut confirm).unwrap_err();

        assert!(matches!(err, TrackerError::ExpenseNotFound { index: 3, len: 3 }));
        assert!(!prompted);
        assert_eq!(storage.expenses.len(), 3);
    }

    /// Memory store whose writes can be switched to fail
    #[derive(Default)]
    struct FlakyStore {
        inner: MemoryStore,
        fail_writes: bool,
    }

    impl KeyValueStore for FlakyStore {
        fn get(&self, key: &str) -> TrackerResult<Option<String>> {
            self.inner.get(key)
        }

        fn set(&mut self, key: &str, value: &str) -> TrackerResult<()> {
            if self.fail_writes {
                return Err(TrackerError::Storage("disk full".into()));
            }
            self.inner.set(key, value)
        }
    }

    fn flaky_seeded() -> Storage<FlakyStore> {
        let mut storage = Storage::new(FlakyStore::default());
        storage.load_all().unwrap();
        ExpenseService::new(&mut storage)
            .add(&ExpenseInput::new("2024-01-15", "Food", "12.50", "lunch"))
            .unwrap();
        storage
    }

    fn raw_ledger<S: KeyValueStore>(storage: &Storage<S>) -> Option<String> {
        storage.store().get(EXPENSES_KEY).unwrap()
    }

    #[test]
    fn test_failed_save_rolls_back_add() {
        let mut storage = flaky_seeded();
        let before = storage.expenses.get_all().to_vec();
        let stored_before = raw_ledger(&storage);

        storage.store_mut().fail_writes = true;
        let err = ExpenseService::new(&mut storage)
            .add(&ExpenseInput::new("2024-01-16", "Food", "3", "tea"))
            .unwrap_err();
        assert!(matches!(err, TrackerError::Storage(_)));
        assert_eq!(storage.expenses.get_all(), before.as_slice());
        assert_eq!(raw_ledger(&storage), stored_before);

        storage.store_mut().fail_writes = false;
        storage.store_mut().set(THEME_KEY, "enabled").unwrap();
        assert_eq!(storage.expenses.get_all(), before.as_slice());
        assert_eq!(raw_ledger(&storage), stored_before);
    }

    #[test]
    fn test_failed_save_rolls_back_delete() {
        let mut storage = flaky_seeded();
        ExpenseService::new(&mut storage)
            .add(&ExpenseInput::new("2024-01-20", "Transport", "20", "taxi"))
            .unwrap();
        let before = storage.expenses.get_all().to_vec();
        let stored_before = raw_ledger(&storage);

        storage.store_mut().fail_writes = true;
        let err = ExpenseService::new(&mut storage)
            .delete(0, &mut AssumeYes)
            .unwrap_err();
        assert!(matches!(err, TrackerError::Storage(_)));
        assert_eq!(storage.expenses.get_all(), before.as_slice());
        assert_eq!(raw_ledger(&storage), stored_before);

        storage.store_mut().fail_writes = false;
        storage.store_mut().set(THEME_KEY, "enabled").unwrap();
        assert_eq!(storage.expenses.get_all(), before.as_slice());
        assert_eq!(raw_ledger(&storage), stored_before);
    }

    #[test]
    fn test_failed_add_is_not_written_by_a_later_theme_toggle() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let blocker = paths.data_dir().join("store.json.tmp");

        let mut storage = Storage::open(&paths).unwrap();
        std::fs::create_dir(&blocker).unwrap();
        assert!(ExpenseService::new(&mut storage)
            .add(&ExpenseInput::new("2024-01-15", "Food", "12.50", "lunch"))
            .is_err());
        assert!(storage.expenses.is_empty());

        std::fs::remove_dir(&blocker).unwrap();
        PreferenceService::new(&mut storage).toggle_theme().unwrap();

        let reopened = Storage::open(&paths).unwrap();
        assert!(reopened.expenses.is_empty());
        assert_eq!(
            reopened.store().get(THEME_KEY).unwrap().as_deref(),
            Some("enabled")
        );
    }

    #[test]
    fn test_reload_after_mutations_round_trips() {
        let mut storage = seeded();
        ExpenseService::new(&mut storage)
            .delete(1, &mut AssumeYes)
            .unwrap();
        let expected = storage.expenses.get_all().to_vec();

        let mut reloaded = Storage::new(storage.store().clone());
        reloaded.load_all().unwrap();
        assert_eq!(reloaded.expenses.get_all(), expected.as_slice());
    }
}
