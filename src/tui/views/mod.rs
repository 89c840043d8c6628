//! TUI Views module
//!
//! Contains the entry form, filter bar, expense table, chart panel and the
//! header/status lines.

pub mod chart;
pub mod filters;
pub mod form;
pub mod status_bar;
pub mod table;

use ratatui::{widgets::Block, Frame};

use crate::services::DELETE_PROMPT;
use crate::storage::KeyValueStore;

use super::app::{ActiveDialog, App};
use super::dialogs;
use super::layout::AppLayout;

/// Render the entire application
pub fn render<S: KeyValueStore>(frame: &mut Frame, app: &App<'_, S>) {
    let palette = app.palette();
    let area = frame.area();
    frame.render_widget(Block::default().style(palette.base()), area);

    let layout = AppLayout::new(area);

    status_bar::render_header(frame, app, layout.header);
    form::render(frame, app, layout.form);
    filters::render(frame, app, layout.filters);
    table::render(frame, app, layout.table);
    chart::render(frame, app, layout.chart);
    status_bar::render(frame, app, layout.status_bar);

    if let ActiveDialog::ConfirmDelete(index) = app.active_dialog {
        dialogs::confirm::render(
            frame,
            DELETE_PROMPT,
            app.storage.expenses.get(index),
            &app.settings.currency_symbol,
            &palette,
        );
    }
}
