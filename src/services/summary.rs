//! Per-category aggregation
//!
//! Sums amounts by category in a single pass. Categories keep the order in
//! which they first appear; amounts are accumulated as plain `f64` and only
//! rounded when displayed.

use crate::models::{Expense, Selector};

use super::filter::{filter, Indexed};

/// Total spent in one category
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySum {
    pub category: String,
    pub total: f64,
}

/// Aggregate over a set of expenses
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Summary {
    /// Per-category sums in first-occurrence order
    pub categories: Vec<CategorySum>,
    /// Sum of all amounts
    pub total: f64,
    /// Number of expenses aggregated
    pub count: usize,
}

impl Summary {
    /// Sum for a category, if it occurred
    pub fn category_total(&self, category: &str) -> Option<f64> {
        self.categories
            .iter()
            .find(|c| c.category == category)
            .map(|c| c.total)
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

/// Aggregate expenses into category sums and a grand total
pub fn summarize<'a, I>(records: I) -> Summary
where
    I: IntoIterator<Item = &'a Expense>,
{
    let mut summary = Summary::default();

    for expense in records {
        summary.total += expense.amount;
        summary.count += 1;

        match summary
            .categories
            .iter_mut()
            .find(|c| c.category == expense.category)
        {
            Some(sum) => sum.total += expense.amount,
            None => summary.categories.push(CategorySum {
                category: expense.category.clone(),
                total: expense.amount,
            }),
        }
    }

    summary
}

/// One render cycle's worth of data: the filtered rows and their aggregate
#[derive(Debug, Clone)]
pub struct LedgerView<'a> {
    pub selector: Selector,
    pub entries: Vec<Indexed<'a>>,
    pub summary: Summary,
}

impl<'a> LedgerView<'a> {
    /// Filter the ledger and aggregate the result
    pub fn build(ledger: &'a [Expense], selector: Selector) -> Self {
        let entries = filter(ledger, &selector);
        let summary = summarize(entries.iter().map(|e| e.expense));
        Self {
            selector,
            entries,
            summary,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Month;

    fn ledger() -> Vec<Expense> {
        vec![
            Expense::new("2024-01-15", "Food", 12.5, "lunch"),
            Expense::new("2024-02-01", "Food", 5.0, "coffee"),
            Expense::new("2024-01-20", "Transport", 20.0, "taxi"),
        ]
    }

    #[test]
    fn test_empty_input() {
        let empty: Vec<Expense> = Vec::new();
        let summary = summarize(&empty);
        assert!(summary.categories.is_empty());
        assert_eq!(summary.total, 0.0);
        assert!(summary.is_empty());
    }

    #[test]
    fn test_categories_in_first_occurrence_order() {
        let ledger = vec![
            Expense::new("2024-01-01", "Transport", 1.0, "bus"),
            Expense::new("2024-01-02", "Food", 2.0, "snack"),
            Expense::new("2024-01-03", "Transport", 3.0, "train"),
        ];
        let summary = summarize(&ledger);
        let names: Vec<_> = summary.categories.iter().map(|c| c.category.as_str()).collect();
        assert_eq!(names, vec!["Transport", "Food"]);
        assert_eq!(summary.category_total("Transport"), Some(4.0));
    }

    #[test]
    fn test_total_matches_sum_of_amounts() {
        let ledger = vec![
            Expense::new("2024-01-01", "A", 0.1, "x"),
            Expense::new("2024-01-01", "B", 0.2, "x"),
            Expense::new("2024-01-01", "A", 1234.567, "x"),
            Expense::new("2024-01-01", "C", -3.25, "refund"),
        ];
        for end in 0..=ledger.len() {
            let subset = &ledger[..end];
            let expected: f64 = subset.iter().map(|e| e.amount).sum();
            let summary = summarize(subset);
            assert!((summary.total - expected).abs() < 1e-9);
            let by_category: f64 = summary.categories.iter().map(|c| c.total).sum();
            assert!((by_category - expected).abs() < 1e-9);
        }
    }

    #[test]
    fn test_january_scenario() {
        let ledger = ledger();
        let view = LedgerView::build(&ledger, Selector::all().month(Month::new(1).unwrap()));

        assert_eq!(view.entries.len(), 2);
        assert!((view.summary.total - 32.5).abs() < 1e-9);
        assert_eq!(view.summary.categories.len(), 2);
        assert_eq!(view.summary.category_total("Food"), Some(12.5));
        assert_eq!(view.summary.category_total("Transport"), Some(20.0));
    }
}
