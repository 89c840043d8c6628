//! Month/year filtering of the ledger
//!
//! Filtering keeps each surviving record's ledger position so that actions
//! on a filtered row (delete) always address the full ledger.

use crate::models::{Expense, Selector};

/// A ledger record paired with its position in the full ledger
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Indexed<'a> {
    pub index: usize,
    pub expense: &'a Expense,
}

/// Whether an expense passes the selector
///
/// With no criterion set everything passes. Otherwise a record whose date
/// does not parse never matches.
pub fn matches_selector(expense: &Expense, selector: &Selector) -> bool {
    if selector.is_empty() {
        return true;
    }
    expense
        .parsed_date()
        .map_or(false, |date| selector.matches(date))
}

/// Reduce the ledger to the records matching `selector`, in ledger order
pub fn filter<'a>(ledger: &'a [Expense], selector: &Selector) -> Vec<Indexed<'a>> {
    ledger
        .iter()
        .enumerate()
        .filter(|(_, expense)| matches_selector(expense, selector))
        .map(|(index, expense)| Indexed { index, expense })
        .collect()
}
