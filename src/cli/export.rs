//! CLI command for CSV export

use std::path::PathBuf;

use chrono::Utc;
use clap::Args;

use crate::config::Settings;
use crate::error::TrackerResult;
use crate::export::{export_ledger, DirectorySink};
use crate::storage::{KeyValueStore, Storage};

/// Arguments for `export`
#[derive(Args, Debug, Clone, Default)]
pub struct ExportArgs {
    /// Directory to write the CSV file into (defaults to the configured export directory)
    #[arg(short, long)]
    pub dir: Option<PathBuf>,
}

/// Handle `export`
///
/// Always exports the whole ledger, whatever filter the last listing used.
pub fn handle_export<S: KeyValueStore>(
    storage: &Storage<S>,
    settings: &Settings,
    args: ExportArgs,
) -> TrackerResult<()> {
    let dir = args.dir.unwrap_or_else(|| settings.export_dir());
    let mut sink = DirectorySink::new(dir);

    let receipt = export_ledger(storage.expenses.get_all(), Utc::now().date_naive(), &mut sink)?;
    println!(
        "Exported {} expense{} to: {}",
        receipt.count,
        if receipt.count == 1 { "" } else { "s" },
        receipt.location.display()
    );

    Ok(())
}
