//! Business logic layer
//!
//! Services borrow the storage mutably for the duration of one user action,
//! so every action runs validate, mutate, persist to completion before the
//! next one starts. Filtering and aggregation are pure functions.

pub mod expense;
pub mod filter;
pub mod preference;
pub mod summary;

pub use expense::{AssumeYes, Confirm, ExpenseService, DELETE_PROMPT};
pub use filter::{filter, matches_selector, Indexed};
pub use preference::PreferenceService;
pub use summary::{summarize, CategorySum, LedgerView, Summary};
