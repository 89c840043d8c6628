use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use expense_tracker::cli::{
    handle_add, handle_chart, handle_delete, handle_export, handle_list, handle_theme_command,
    AddArgs, ChartArgs, DeleteArgs, ExportArgs, FilterArgs, ThemeCommands,
};
use expense_tracker::config::{Settings, TrackerPaths};
use expense_tracker::services::PreferenceService;
use expense_tracker::storage::Storage;

#[derive(Parser)]
#[command(
    name = "expenses",
    version,
    about = "Terminal-based personal expense tracker",
    long_about = "Record daily expenses, filter them by month and year, see totals \
                  and a per-category chart, and export everything to CSV."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Add an expense
    Add(AddArgs),

    /// List expenses with totals and a category breakdown
    #[command(alias = "ls")]
    List(FilterArgs),

    /// Delete an expense by its ledger position
    #[command(alias = "rm")]
    Delete(DeleteArgs),

    /// Export all expenses to CSV
    Export(ExportArgs),

    /// Draw the category chart as an SVG file
    Chart(ChartArgs),

    /// Show or toggle the display theme
    Theme {
        #[command(subcommand)]
        action: Option<ThemeCommands>,
    },

    /// Launch the interactive TUI
    #[command(alias = "ui")]
    Tui,

    /// Show current configuration and paths
    Config,
}

/// Route logs to stderr, or to `log_file` while the TUI owns the terminal
fn init_logging(log_file: Option<&Path>) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    match log_file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and logging
    let paths = TrackerPaths::new()?;
    if matches!(cli.command, Some(Commands::Tui)) {
        paths.ensure_directories()?;
        init_logging(Some(&paths.log_file()))?;
    } else {
        init_logging(None)?;
    }

    let settings = Settings::load_or_create(&paths)?;

    // Initialize storage
    let mut storage = Storage::open(&paths)?;

    match cli.command {
        Some(Commands::Add(args)) => handle_add(&mut storage, &settings, args)?,
        Some(Commands::List(filter)) => handle_list(&mut storage, &settings, filter)?,
        Some(Commands::Delete(args)) => handle_delete(&mut storage, &settings, args)?,
        Some(Commands::Export(args)) => handle_export(&storage, &settings, args)?,
        Some(Commands::Chart(args)) => handle_chart(&mut storage, &settings, args)?,
        Some(Commands::Theme { action }) => {
            handle_theme_command(&mut storage, action.unwrap_or_default())?
        }
        Some(Commands::Tui) => expense_tracker::tui::run_tui(&mut storage, &settings)?,
        Some(Commands::Config) => {
            let theme = PreferenceService::new(&mut storage).load_theme()?;
            println!("Expense Tracker Configuration");
            println!("=============================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Store file:       {}", paths.store_file().display());
            println!("Log file:         {}", paths.log_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:  {}", settings.currency_symbol);
            println!("  Categories:       {}", settings.categories.join(", "));
            println!("  Export directory: {}", settings.export_dir().display());
            println!("  Theme:            {}", theme);
        }
        None => {
            println!("Expense Tracker - personal expenses from the terminal");
            println!();
            println!("Run 'expenses --help' for usage information.");
            println!("Run 'expenses tui' to launch the interactive interface.");
        }
    }

    Ok(())
}
