//! Core data models for the expense tracker
//!
//! This module contains the data structures of the tracking domain:
//! expenses and their raw form input, the month/year selector and the
//! display theme.

pub mod expense;
pub mod selector;
pub mod theme;

pub use expense::{parse_amount, Expense, ExpenseInput, DATE_FORMAT};
pub use selector::{Month, Selector, Year};
pub use theme::{Theme, ThemeChrome};
