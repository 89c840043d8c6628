//! Expense model
//!
//! An expense is a dated, categorized amount with a free-text description.
//! Expenses carry no identifier: their identity is their position in the
//! ledger.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{TrackerError, TrackerResult};

/// Layout of every stored expense date
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A single recorded expense
///
/// The date is kept as the text the user entered so that ledgers written by
/// older versions load unchanged; use [`Expense::parsed_date`] for calendar
/// arithmetic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Calendar date in `YYYY-MM-DD` form
    pub date: String,

    /// Short category label
    pub category: String,

    /// Currency-unscaled amount
    pub amount: f64,

    /// Free-text description
    pub description: String,
}

impl Expense {
    /// Create an expense without validation
    pub fn new(
        date: impl Into<String>,
        category: impl Into<String>,
        amount: f64,
        description: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            category: category.into(),
            amount,
            description: description.into(),
        }
    }

    /// Parse the stored date, `None` when it is not a valid `YYYY-MM-DD` date
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.date.trim(), DATE_FORMAT).ok()
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.date, self.category, self.amount, self.description
        )
    }
}

/// Raw values typed into the entry form, before validation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpenseInput {
    pub date: String,
    pub category: String,
    pub amount: String,
    pub description: String,
}

impl ExpenseInput {
    pub fn new(
        date: impl Into<String>,
        category: impl Into<String>,
        amount: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            category: category.into(),
            amount: amount.into(),
            description: description.into(),
        }
    }

    /// Validate the input and build the expense it describes
    ///
    /// Text fields are stored exactly as entered; only blankness is checked.
    /// The date must be a real calendar date and the amount a finite number.
    pub fn validate(&self) -> TrackerResult<Expense> {
        if self.date.trim().is_empty() {
            return Err(TrackerError::missing_field("date"));
        }
        NaiveDate::parse_from_str(self.date.trim(), DATE_FORMAT).map_err(|_| {
            TrackerError::Validation(format!("date '{}' is not a YYYY-MM-DD date", self.date))
        })?;

        if self.category.trim().is_empty() {
            return Err(TrackerError::missing_field("category"));
        }

        let amount = parse_amount(&self.amount)?;

        if self.description.trim().is_empty() {
            return Err(TrackerError::missing_field("description"));
        }

        Ok(Expense {
            date: self.date.clone(),
            category: self.category.clone(),
            amount,
            description: self.description.clone(),
        })
    }
}

/// Parse an amount field, rejecting text, NaN and infinities
pub fn parse_amount(raw: &str) -> TrackerResult<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(TrackerError::missing_field("amount"));
    }

    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(TrackerError::Validation(format!(
            "amount '{}' is not a number",
            raw
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_input() -> ExpenseInput {
        ExpenseInput::new("2024-01-15", "Food", "12.50", "lunch")
    }

    #[test]
    fn test_validate_builds_expense() {
        let expense = valid_input().validate().unwrap();
        assert_eq!(expense, Expense::new("2024-01-15", "Food", 12.5, "lunch"));
    }

    #[test]
    fn test_validate_rejects_blank_fields() {
        let mut input = valid_input();
        input.date.clear();
        assert!(input.validate().unwrap_err().is_validation());

        let mut input = valid_input();
        input.category = "  ".into();
        assert!(input.validate().unwrap_err().is_validation());

        let mut input = valid_input();
        input.description.clear();
        assert!(input.validate().unwrap_err().is_validation());
    }

    #[test]
    fn test_validate_rejects_bad_date() {
        let mut input = valid_input();
        input.date = "2024-02-30".into();
        let err = input.validate().unwrap_err();
        assert!(err.to_string().contains("2024-02-30"));

        input.date = "15/01/2024".into();
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("12.50").unwrap(), 12.5);
        assert_eq!(parse_amount(" 5 ").unwrap(), 5.0);
        assert_eq!(parse_amount("-3").unwrap(), -3.0);
        assert!(parse_amount("abc").is_err());
        assert!(parse_amount("").is_err());
        assert!(parse_amount("NaN").is_err());
        assert!(parse_amount("inf").is_err());
    }

    #[test]
    fn test_parse_amount_rejects_trailing_text() {
        assert!(parse_amount("12abc").unwrap_err().is_validation());
        assert!(parse_amount("12,50").unwrap_err().is_validation());
        assert!(parse_amount("1 000").is_err());
    }

    #[test]
    fn test_parsed_date() {
        let expense = Expense::new("2024-01-15", "Food", 1.0, "x");
        assert_eq!(
            expense.parsed_date(),
            NaiveDate::from_ymd_opt(2024, 1, 15)
        );

        let broken = Expense::new("not a date", "Food", 1.0, "x");
        assert!(broken.parsed_date().is_none());
    }

    #[test]
    fn test_serializes_like_browser_records() {
        let expense = Expense::new("2024-01-15", "Food", 12.5, "lunch");
        let json = serde_json::to_string(&expense).unwrap();
        assert_eq!(
            json,
            r#"{"date":"2024-01-15","category":"Food","amount":12.5,"description":"lunch"}"#
        );
    }
}
