//! Month/year filter selector
//!
//! A selector is derived from the filter controls on every render and is
//! never persisted. Both parts are optional; an absent part does not filter.

use chrono::{Datelike, NaiveDate};
use std::fmt;

use crate::error::{TrackerError, TrackerResult};

/// Calendar month, 1 through 12
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Month(u32);

impl Month {
    pub fn new(month: u32) -> TrackerResult<Self> {
        if (1..=12).contains(&month) {
            Ok(Self(month))
        } else {
            Err(TrackerError::Validation(format!(
                "month must be between 01 and 12, got {}",
                month
            )))
        }
    }

    /// Parse `"01"`..`"12"` (a single digit is also accepted)
    pub fn parse(s: &str) -> TrackerResult<Self> {
        let s = s.trim();
        if s.is_empty() || s.len() > 2 || !s.chars().all(|c| c.is_ascii_digit()) {
            return Err(TrackerError::Validation(format!(
                "month '{}' must be two digits (01-12)",
                s
            )));
        }
        let value: u32 = s
            .parse()
            .map_err(|_| TrackerError::Validation(format!("invalid month '{}'", s)))?;
        Self::new(value)
    }

    pub fn number(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.0)
    }
}

/// Four-digit calendar year
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Year(i32);

impl Year {
    /// Parse exactly four ASCII digits
    pub fn parse(s: &str) -> TrackerResult<Self> {
        let s = s.trim();
        if s.len() != 4 || !s.chars().all(|c| c.is_ascii_digit()) {
            return Err(TrackerError::Validation(format!(
                "year '{}' must be four digits",
                s
            )));
        }
        let value: i32 = s
            .parse()
            .map_err(|_| TrackerError::Validation(format!("invalid year '{}'", s)))?;
        Ok(Self(value))
    }

    pub fn number(&self) -> i32 {
        self.0
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}", self.0)
    }
}

/// Optional month and year criteria, combined with AND
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selector {
    pub month: Option<Month>,
    pub year: Option<Year>,
}

impl Selector {
    /// A selector that matches everything
    pub fn all() -> Self {
        Self::default()
    }

    pub fn month(mut self, month: Month) -> Self {
        self.month = Some(month);
        self
    }

    pub fn year(mut self, year: Year) -> Self {
        self.year = Some(year);
        self
    }

    /// Build a selector from control values; blank text leaves that part unset
    pub fn from_controls(month: &str, year: &str) -> TrackerResult<Self> {
        let month = if month.trim().is_empty() {
            None
        } else {
            Some(Month::parse(month)?)
        };
        let year = if year.trim().is_empty() {
            None
        } else {
            Some(Year::parse(year)?)
        };
        Ok(Self { month, year })
    }

    /// Whether no criterion is set
    pub fn is_empty(&self) -> bool {
        self.month.is_none() && self.year.is_none()
    }

    /// Whether a parsed date satisfies every set criterion
    pub fn matches(&self, date: NaiveDate) -> bool {
        self.month.map_or(true, |m| date.month() == m.number())
            && self.year.map_or(true, |y| date.year() == y.number())
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.month, self.year) {
            (None, None) => write!(f, "all dates"),
            (Some(m), None) => write!(f, "month {}", m),
            (None, Some(y)) => write!(f, "year {}", y),
            (Some(m), Some(y)) => write!(f, "{}-{}", y, m),
        }
    }
}
