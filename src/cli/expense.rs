//! Expense CLI commands
//!
//! Implements `add`, `list` and `delete`. Every successful mutation is
//! followed by the refreshed ledger view.

use std::io::{self, BufRead, Write};

use chrono::Local;
use clap::Args;

use crate::config::Settings;
use crate::display::{
    expense_rows, format_breakdown, format_expense_table, format_total_line, pie_series,
};
use crate::error::{TrackerError, TrackerResult};
use crate::models::{ExpenseInput, Selector, Theme, DATE_FORMAT};
use crate::services::{AssumeYes, Confirm, ExpenseService, LedgerView, PreferenceService};
use crate::storage::{KeyValueStore, Storage};

/// Month/year filter shared by `list` and `chart`
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Month to show (1-12)
    #[arg(short, long)]
    pub month: Option<String>,
    /// Year to show (YYYY)
    #[arg(short, long)]
    pub year: Option<String>,
}

impl FilterArgs {
    pub fn selector(&self) -> TrackerResult<Selector> {
        Selector::from_controls(
            self.month.as_deref().unwrap_or(""),
            self.year.as_deref().unwrap_or(""),
        )
    }
}

/// Arguments for `add`
#[derive(Args, Debug, Clone)]
pub struct AddArgs {
    /// Expense date (YYYY-MM-DD), defaults to today
    #[arg(short, long)]
    pub date: Option<String>,
    /// Category, defaults to the first configured category
    #[arg(short, long)]
    pub category: Option<String>,
    /// Amount (e.g. "12.50")
    #[arg(short, long, allow_hyphen_values = true)]
    pub amount: String,
    /// What the money was spent on
    #[arg(short = 'D', long)]
    pub description: String,
}

/// Arguments for `delete`
#[derive(Args, Debug, Clone)]
pub struct DeleteArgs {
    /// Ledger position as shown in the `#` column of `list`
    pub index: usize,
    /// Skip confirmation
    #[arg(short, long)]
    pub yes: bool,
}

/// Asks a yes/no question on the terminal
#[derive(Debug, Default)]
pub struct StdinConfirm;

impl Confirm for StdinConfirm {
    fn confirm(&mut self, prompt: &str) -> bool {
        let stdin = io::stdin();
        let mut input = stdin.lock();
        ask(prompt, &mut input, &mut io::stdout())
    }
}

/// Write `prompt` and read one answer line; only "y" or "yes" count as yes
pub fn ask<R: BufRead, W: Write>(prompt: &str, input: &mut R, output: &mut W) -> bool {
    if write!(output, "{} [y/N]: ", prompt).is_err() {
        return false;
    }
    let _ = output.flush();

    let mut answer = String::new();
    match input.read_line(&mut answer) {
        Ok(_) => matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"),
        Err(_) => false,
    }
}

/// Print a ledger view: table, total and category breakdown
pub fn print_view(view: &LedgerView<'_>, settings: &Settings, theme: Theme) {
    let symbol = settings.currency_symbol.as_str();

    println!("Expenses ({})", view.selector);
    println!("{}", format_expense_table(&expense_rows(view, symbol)));
    println!("{}", format_total_line(&view.summary, symbol));

    let breakdown = format_breakdown(&pie_series(&view.summary, theme), symbol);
    if !breakdown.is_empty() {
        println!();
        print!("{}", breakdown);
    }
}

fn print_refreshed<S: KeyValueStore>(
    storage: &mut Storage<S>,
    settings: &Settings,
) -> TrackerResult<()> {
    let theme = PreferenceService::new(storage).load_theme()?;
    let service = ExpenseService::new(storage);
    println!();
    print_view(&service.view(Selector::all()), settings, theme);
    Ok(())
}

/// Handle `add`
pub fn handle_add<S: KeyValueStore>(
    storage: &mut Storage<S>,
    settings: &Settings,
    args: AddArgs,
) -> TrackerResult<()> {
    let date = args
        .date
        .unwrap_or_else(|| Local::now().date_naive().format(DATE_FORMAT).to_string());
    let category = args
        .category
        .unwrap_or_else(|| settings.default_category().to_string());

    let input = ExpenseInput::new(date, category, args.amount, args.description);
    let added = ExpenseService::new(storage).add(&input)?;
    println!("Added expense: {}", added);

    print_refreshed(storage, settings)
}

/// Handle `list`
pub fn handle_list<S: KeyValueStore>(
    storage: &mut Storage<S>,
    settings: &Settings,
    filter: FilterArgs,
) -> TrackerResult<()> {
    let selector = filter.selector()?;
    let theme = PreferenceService::new(storage).load_theme()?;
    let service = ExpenseService::new(storage);
    print_view(&service.view(selector), settings, theme);
    Ok(())
}

/// Handle `delete`
pub fn handle_delete<S: KeyValueStore>(
    storage: &mut Storage<S>,
    settings: &Settings,
    args: DeleteArgs,
) -> TrackerResult<()> {
    if let Some(expense) = storage.expenses.get(args.index) {
        println!("About to delete expense #{}:", args.index);
        println!("  {}", expense);
    }

    let mut confirm: Box<dyn Confirm> = if args.yes {
        Box::new(AssumeYes)
    } else {
        Box::new(StdinConfirm)
    };

    match ExpenseService::new(storage).delete(args.index, confirm.as_mut()) {
        Ok(removed) => {
            println!("Deleted expense: {}", removed);
            print_refreshed(storage, settings)
        }
        Err(TrackerError::DeleteNotConfirmed) => {
            println!("Aborted.");
            Ok(())
        }
        Err(e) => Err(e),
    }
}
