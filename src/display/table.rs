//! Expense table formatting
//!
//! Turns a filtered ledger view into display rows. Each row keeps the
//! record's ledger position, which is what a delete action on that row
//! addresses.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};
use tabled::{Table, Tabled};

use crate::services::LedgerView;

/// One displayed expense
#[derive(Debug, Clone, PartialEq, Tabled)]
pub struct ExpenseRow {
    #[tabled(rename = "#")]
    pub index: usize,
    #[tabled(rename = "Date")]
    pub date: String,
    #[tabled(rename = "Category")]
    pub category: String,
    #[tabled(rename = "Amount")]
    pub amount: String,
    #[tabled(rename = "Description")]
    pub description: String,
}

/// Format an amount with the currency glyph and two decimals
pub fn format_amount(amount: f64, symbol: &str) -> String {
    format!("{}{:.2}", symbol, amount)
}

/// Rows for every entry in `view`, in ledger order
pub fn expense_rows(view: &LedgerView<'_>, symbol: &str) -> Vec<ExpenseRow> {
    view.entries
        .iter()
        .map(|entry| ExpenseRow {
            index: entry.index,
            date: entry.expense.date.clone(),
            category: entry.expense.category.clone(),
            amount: format_amount(entry.expense.amount, symbol),
            description: entry.expense.description.clone(),
        })
        .collect()
}

/// Render rows as a terminal table
pub fn format_expense_table(rows: &[ExpenseRow]) -> String {
    if rows.is_empty() {
        return "No expenses found.".to_string();
    }

    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .modify(Columns::single(3), Alignment::right());
    table.to_string()
}
