//! Month and year filter controls

use ratatui::{
    layout::Rect,
    widgets::{Block, Borders},
    Frame,
};

use crate::storage::KeyValueStore;
use crate::tui::app::{App, Focus};
use crate::tui::layout::halves;

use super::form::selector_line;

/// Render the filter bar
pub fn render<S: KeyValueStore>(frame: &mut Frame, app: &App<'_, S>, area: Rect) {
    let palette = app.palette();
    let focused = matches!(app.focus, Focus::Month | Focus::Year);

    let block = Block::default()
        .title(" Filter ")
        .title_style(palette.title())
        .borders(Borders::ALL)
        .border_style(palette.border(focused))
        .style(palette.base());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let (month_area, year_area) = halves(inner);

    let month = app
        .month_filter
        .map(|m| m.to_string())
        .unwrap_or_else(|| "All".to_string());
    frame.render_widget(
        selector_line("Month", &month, app.focus == Focus::Month, &palette),
        month_area,
    );

    app.year_filter
        .render(year_area, frame.buffer_mut(), app.focus == Focus::Year, &palette);
}
