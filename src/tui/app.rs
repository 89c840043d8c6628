//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events.
//! Every action runs validate, mutate, persist and refresh before the next
//! key is read.

use chrono::Utc;
use tracing::debug;

use crate::config::Settings;
use crate::display::{pie_series, ChartHost, PanelBackend};
use crate::error::{TrackerError, TrackerResult};
use crate::export::{export_ledger, DirectorySink};
use crate::models::{Month, Selector, Theme, Year};
use crate::services::{ExpenseService, LedgerView, PreferenceService};
use crate::storage::{JsonFileStore, KeyValueStore, Storage};

use super::styles::Palette;
use super::views::form::EntryForm;
use super::widgets::TextInput;

/// Alert shown when the entry form is rejected
pub const INVALID_INPUT_ALERT: &str = "Please fill all fields with valid values";

/// Which control currently has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Date,
    Category,
    Amount,
    Description,
    Month,
    Year,
    Table,
}

impl Focus {
    const ORDER: [Focus; 7] = [
        Focus::Date,
        Focus::Category,
        Focus::Amount,
        Focus::Description,
        Focus::Month,
        Focus::Year,
        Focus::Table,
    ];

    fn position(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        Self::ORDER[(self.position() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }

    /// Whether this control belongs to the entry form
    pub fn in_form(self) -> bool {
        matches!(
            self,
            Focus::Date | Focus::Category | Focus::Amount | Focus::Description
        )
    }
}

/// Currently active dialog (if any)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    /// Asking whether to delete the expense at this ledger position
    ConfirmDelete(usize),
}

/// Severity of a status bar message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Error,
}

/// Message shown in the status bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub kind: StatusKind,
}

/// Main application state
pub struct App<'a, S: KeyValueStore = JsonFileStore> {
    /// The storage layer
    pub storage: &'a mut Storage<S>,

    /// Application settings
    pub settings: &'a Settings,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Focused control
    pub focus: Focus,

    /// Entry form state
    pub form: EntryForm,

    /// Month filter, `None` for all months
    pub month_filter: Option<Month>,

    /// Year filter text
    pub year_filter: TextInput,

    /// Selector currently applied to the table and chart
    pub selector: Selector,

    /// Selected row in the filtered table
    pub selected_row: usize,

    /// Current display theme
    pub theme: Theme,

    /// Owner of the chart panel's data
    pub chart: ChartHost<PanelBackend>,

    /// Currently active dialog
    pub active_dialog: ActiveDialog,

    /// Status message to display
    pub status: Option<StatusMessage>,
}

impl<'a, S: KeyValueStore> App<'a, S> {
    /// Create the app and draw the initial view
    pub fn new(storage: &'a mut Storage<S>, settings: &'a Settings) -> TrackerResult<Self> {
        let theme = PreferenceService::new(storage).load_theme()?;

        let mut app = Self {
            storage,
            settings,
            should_quit: false,
            focus: Focus::default(),
            form: EntryForm::new(settings),
            month_filter: None,
            year_filter: TextInput::new().label("Year").placeholder("YYYY"),
            selector: Selector::all(),
            selected_row: 0,
            theme,
            chart: ChartHost::new(PanelBackend),
            active_dialog: ActiveDialog::None,
            status: None,
        };
        app.refresh()?;
        Ok(app)
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status = Some(StatusMessage {
            text: message.into(),
            kind: StatusKind::Info,
        });
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.status = Some(StatusMessage {
            text: message.into(),
            kind: StatusKind::Error,
        });
    }

    pub fn clear_status(&mut self) {
        self.status = None;
    }

    pub fn palette(&self) -> Palette {
        Palette::for_theme(self.theme)
    }

    /// The filtered ledger under the applied selector
    pub fn view(&self) -> LedgerView<'_> {
        LedgerView::build(self.storage.expenses.get_all(), self.selector)
    }

    /// Rebuild table selection and chart from the current ledger
    pub fn refresh(&mut self) -> TrackerResult<()> {
        let (rows, series) = {
            let view = self.view();
            (view.entries.len(), pie_series(&view.summary, self.theme))
        };

        if self.selected_row >= rows {
            self.selected_row = rows.saturating_sub(1);
        }
        self.chart.render(&series)
    }

    /// Re-read the filter controls and refresh
    ///
    /// An incomplete year keeps the previously applied selector.
    pub fn apply_filters(&mut self) -> TrackerResult<()> {
        let year_text = self.year_filter.value().trim().to_string();
        let year = match year_text.as_str() {
            "" => None,
            raw => match Year::parse(raw) {
                Ok(year) => Some(year),
                Err(e) => {
                    self.set_error(e.to_string());
                    return Ok(());
                }
            },
        };

        self.selector = Selector {
            month: self.month_filter,
            year,
        };
        self.selected_row = 0;
        debug!(selector = %self.selector, "filters applied");
        self.refresh()
    }

    /// Step the month filter through All, 01 ... 12
    pub fn cycle_month(&mut self, forward: bool) -> TrackerResult<()> {
        let current = self.month_filter.map(|m| m.number()).unwrap_or(0);
        let next = if forward {
            (current + 1) % 13
        } else {
            (current + 12) % 13
        };
        self.month_filter = if next == 0 {
            None
        } else {
            Some(Month::new(next)?)
        };
        self.apply_filters()
    }

    /// Validate and add the form's expense
    ///
    /// On success the date, amount and description fields are cleared; on
    /// a validation error the input is kept for correction.
    pub fn submit_form(&mut self) -> TrackerResult<()> {
        let input = self.form.to_input();

        let result = ExpenseService::new(self.storage).add(&input);
        match result {
            Ok(expense) => {
                self.form.clear_after_submit();
                self.focus = Focus::Date;
                self.set_status(format!(
                    "Added {} expense: {}",
                    expense.category, expense.description
                ));
                self.refresh()
            }
            Err(e) if e.is_validation() => {
                self.set_error(format!("{} ({})", INVALID_INPUT_ALERT, e));
                Ok(())
            }
            Err(e) => Err(e),
        }
    }

    /// Ledger position of the selected table row
    pub fn selected_index(&self) -> Option<usize> {
        self.view().entries.get(self.selected_row).map(|e| e.index)
    }

    /// Ask for confirmation to delete the selected row
    pub fn request_delete(&mut self) {
        if let Some(index) = self.selected_index() {
            self.active_dialog = ActiveDialog::ConfirmDelete(index);
        }
    }

    /// Resolve the delete dialog with the user's answer
    pub fn answer_delete(&mut self, yes: bool) -> TrackerResult<()> {
        let ActiveDialog::ConfirmDelete(index) = self.active_dialog else {
            return Ok(());
        };
        self.active_dialog = ActiveDialog::None;

        let mut answer = |_: &str| yes;
        let result = ExpenseService::new(self.storage).delete(index, &mut answer);
        match result {
            Ok(removed) => {
                self.set_status(format!("Deleted expense: {}", removed.description));
                self.refresh()
            }
            Err(e) if e.is_silent() => Ok(()),
            Err(e @ TrackerError::ExpenseNotFound { .. }) => {
                self.set_error(e.to_string());
                self.refresh()
            }
            Err(e) => Err(e),
        }
    }

    /// Flip the theme and redraw the chart in the new colours
    pub fn toggle_theme(&mut self) -> TrackerResult<()> {
        self.theme = PreferenceService::new(self.storage).toggle_theme()?;
        self.set_status(format!("Switched to {} theme", self.theme));
        self.refresh()
    }

    /// Export the full ledger to the configured directory
    pub fn export(&mut self) -> TrackerResult<()> {
        let mut sink = DirectorySink::new(self.settings.export_dir());
        let result = export_ledger(
            self.storage.expenses.get_all(),
            Utc::now().date_naive(),
            &mut sink,
        );

        match result {
            Ok(receipt) => {
                self.set_status(format!("Exported to {}", receipt.location.display()));
                Ok(())
            }
            Err(e @ TrackerError::EmptyExport) => {
                self.set_error(e.to_string());
                Ok(())
            }
            Err(e) => Err(e),
        }
    }

    /// Move the table selection
    pub fn move_selection(&mut self, down: bool) {
        let rows = self.view().entries.len();
        if down {
            if self.selected_row + 1 < rows {
                self.selected_row += 1;
            }
        } else {
            self.selected_row = self.selected_row.saturating_sub(1);
        }
    }

    /// Check if a dialog is active
    pub fn has_dialog(&self) -> bool {
        !matches!(self.active_dialog, ActiveDialog::None)
    }
}
