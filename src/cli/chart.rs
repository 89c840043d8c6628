//! CLI command for the category chart

use std::path::PathBuf;

use clap::Args;

use crate::config::Settings;
use crate::display::{format_breakdown, pie_series, ChartHost, SvgChartBackend};
use crate::error::TrackerResult;
use crate::services::{ExpenseService, PreferenceService};
use crate::storage::{KeyValueStore, Storage};

use super::expense::FilterArgs;

/// Default chart file name
pub const DEFAULT_CHART_FILE: &str = "expenses_chart.svg";

/// Arguments for `chart`
#[derive(Args, Debug, Clone)]
pub struct ChartArgs {
    #[command(flatten)]
    pub filter: FilterArgs,
    /// SVG file to write
    #[arg(short, long, default_value = DEFAULT_CHART_FILE)]
    pub output: PathBuf,
}

/// Handle `chart`
pub fn handle_chart<S: KeyValueStore>(
    storage: &mut Storage<S>,
    settings: &Settings,
    args: ChartArgs,
) -> TrackerResult<()> {
    let selector = args.filter.selector()?;
    let theme = PreferenceService::new(storage).load_theme()?;
    let service = ExpenseService::new(storage);
    let view = service.view(selector);
    let series = pie_series(&view.summary, theme);

    let mut host = ChartHost::new(SvgChartBackend::new(&args.output));
    host.render(&series)?;

    println!(
        "Chart for {} written to: {}",
        view.selector,
        host.backend().path().display()
    );
    if series.is_empty() {
        println!("No expenses match this filter.");
    } else {
        print!("{}", format_breakdown(&series, &settings.currency_symbol));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExpenseInput;
    use crate::storage::{MemoryStore, THEME_KEY};
    use tempfile::TempDir;

    #[test]
    fn test_chart_written_with_theme_legend() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("out.svg");
        let mut storage = Storage::new(MemoryStore::with_entry(THEME_KEY, "enabled"));
        storage.load_all().unwrap();
        ExpenseService::new(&mut storage)
            .add(&ExpenseInput::new("2024-01-15", "Food", "12.50", "lunch"))
            .unwrap();

        let args = ChartArgs {
            filter: FilterArgs::default(),
            output: output.clone(),
        };
        handle_chart(&mut storage, &Settings::default(), args).unwrap();

        let svg = std::fs::read_to_string(&output).unwrap();
        assert!(svg.contains("Food"));
        assert!(svg.contains("fill=\"white\""));
    }
}
