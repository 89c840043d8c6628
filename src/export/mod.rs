//! Export module for the expense tracker
//!
//! Serializes the full, unfiltered ledger to CSV and hands the bytes to a
//! download sink under a dated file name.

pub mod csv;

pub use self::csv::{export_file_name, expenses_to_csv, write_expenses_csv, CSV_HEADER};

use std::fs;
use std::path::PathBuf;

use chrono::NaiveDate;
use tracing::info;

use crate::error::{TrackerError, TrackerResult};
use crate::models::Expense;

/// Destination for a finished export file
pub trait DownloadSink {
    /// Deliver `contents` under `file_name`, returning where it ended up
    fn deliver(&mut self, file_name: &str, contents: &[u8]) -> TrackerResult<PathBuf>;
}

/// Sink that writes exports into a directory
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl DownloadSink for DirectorySink {
    fn deliver(&mut self, file_name: &str, contents: &[u8]) -> TrackerResult<PathBuf> {
        fs::create_dir_all(&self.dir).map_err(|e| {
            TrackerError::Export(format!(
                "Failed to create directory {}: {}",
                self.dir.display(),
                e
            ))
        })?;

        let path = self.dir.join(file_name);
        fs::write(&path, contents).map_err(|e| {
            TrackerError::Export(format!("Failed to write {}: {}", path.display(), e))
        })?;
        Ok(path)
    }
}

/// Outcome of a successful export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportReceipt {
    pub file_name: String,
    pub location: PathBuf,
    pub count: usize,
}

/// Export the whole ledger as CSV dated `today`
///
/// An empty ledger fails with `EmptyExport` and nothing is delivered.
pub fn export_ledger(
    expenses: &[Expense],
    today: NaiveDate,
    sink: &mut dyn DownloadSink,
) -> TrackerResult<ExportReceipt> {
    if expenses.is_empty() {
        return Err(TrackerError::EmptyExport);
    }

    let mut contents = Vec::new();
    write_expenses_csv(expenses, &mut contents)?;

    let file_name = export_file_name(today);
    let location = sink.deliver(&file_name, &contents)?;
    info!(count = expenses.len(), path = %location.display(), "exported ledger");

    Ok(ExportReceipt {
        file_name,
        location,
        count: expenses.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[derive(Default)]
    struct RecordingSink {
        delivered: Vec<(String, Vec<u8>)>,
    }

    impl DownloadSink for RecordingSink {
        fn deliver(&mut self, file_name: &str, contents: &[u8]) -> TrackerResult<PathBuf> {
            self.delivered.push((file_name.to_string(), contents.to_vec()));
            Ok(PathBuf::from(file_name))
        }
    }

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 9).unwrap()
    }

    #[test]
    fn test_empty_ledger_produces_no_file() {
        let mut sink = RecordingSink::default();
        let err = export_ledger(&[], day(), &mut sink).unwrap_err();

        assert!(matches!(err, TrackerError::EmptyExport));
        assert!(sink.delivered.is_empty());
    }

    #[test]
    fn test_export_delivers_dated_csv() {
        let expenses = vec![Expense::new("2024-01-15", "Food", 12.5, "lunch")];
        let mut sink = RecordingSink::default();

        let receipt = export_ledger(&expenses, day(), &mut sink).unwrap();

        assert_eq!(receipt.file_name, "expenses_2024-05-09.csv");
        assert_eq!(receipt.count, 1);
        assert_eq!(sink.delivered.len(), 1);
        assert_eq!(
            String::from_utf8(sink.delivered[0].1.clone()).unwrap(),
            "Date,Category,Amount,Description\n2024-01-15,Food,12.5,lunch\n"
        );
    }

    #[test]
    fn test_directory_sink_writes_file() {
        let temp_dir = TempDir::new().unwrap();
        let mut sink = DirectorySink::new(temp_dir.path().join("exports"));
        let expenses = vec![Expense::new("2024-01-20", "Transport", 20.0, "taxi")];

        let receipt = export_ledger(&expenses, day(), &mut sink).unwrap();

        assert_eq!(
            receipt.location,
            temp_dir.path().join("exports").join("expenses_2024-05-09.csv")
        );
        let written = std::fs::read_to_string(&receipt.location).unwrap();
        assert!(written.ends_with("2024-01-20,Transport,20,taxi\n"));
    }

    #[test]
    fn test_directory_sink_untouched_on_empty_export() {
        let temp_dir = TempDir::new().unwrap();
        let mut sink = DirectorySink::new(temp_dir.path());

        assert!(export_ledger(&[], day(), &mut sink).is_err());
        assert_eq!(std::fs::read_dir(temp_dir.path()).unwrap().count(), 0);
    }
}
