//! CSV export
//!
//! Writes the ledger as `Date,Category,Amount,Description` rows. Fields are
//! quoted only when they contain a comma, quote or line break.

use std::io::Write;

use chrono::NaiveDate;

use crate::error::{TrackerError, TrackerResult};
use crate::models::Expense;

/// Header row of every export
pub const CSV_HEADER: [&str; 4] = ["Date", "Category", "Amount", "Description"];

/// File name for an export made on `date`
pub fn export_file_name(date: NaiveDate) -> String {
    format!("expenses_{}.csv", date.format("%Y-%m-%d"))
}

/// Shortest round-trip decimal form, with negative zero written as `0`
fn csv_amount(amount: f64) -> String {
    if amount == 0.0 {
        "0".to_string()
    } else {
        amount.to_string()
    }
}

/// Write `expenses` as CSV to `writer`
///
/// Amounts use the shortest decimal form that round-trips (`12.5`, `5`).
pub fn write_expenses_csv<W: Write>(expenses: &[Expense], writer: W) -> TrackerResult<()> {
    let mut csv_writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);

    csv_writer
        .write_record(CSV_HEADER)
        .map_err(|e| TrackerError::Export(e.to_string()))?;

    for expense in expenses {
        let amount = csv_amount(expense.amount);
        csv_writer
            .write_record([
                expense.date.as_str(),
                expense.category.as_str(),
                amount.as_str(),
                expense.description.as_str(),
            ])
            .map_err(|e| TrackerError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| TrackerError::Export(e.to_string()))?;

    Ok(())
}

/// Render `expenses` as a CSV string
pub fn expenses_to_csv(expenses: &[Expense]) -> TrackerResult<String> {
    let mut buffer = Vec::new();
    write_expenses_csv(expenses, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| TrackerError::Export(e.to_string()))
}
