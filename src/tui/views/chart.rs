//! Category chart panel
//!
//! Draws the live chart's slices as a legend with share bars.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::display::format_amount;
use crate::display::report::{format_bar, format_percentage, truncate};
use crate::storage::KeyValueStore;
use crate::tui::app::App;
use crate::tui::styles::css_color;

/// Render the chart panel
pub fn render<S: KeyValueStore>(frame: &mut Frame, app: &App<'_, S>, area: Rect) {
    let palette = app.palette();

    let block = Block::default()
        .title(" By Category ")
        .title_style(palette.title())
        .borders(Borders::ALL)
        .border_style(palette.border(false))
        .style(palette.base());

    let series = match app.chart.current() {
        Some(chart) if !chart.series().is_empty() => chart.series(),
        _ => {
            let text = Paragraph::new("Nothing to chart yet.")
                .block(block)
                .style(Style::default().fg(palette.muted));
            frame.render_widget(text, area);
            return;
        }
    };

    let symbol = app.settings.currency_symbol.as_str();
    let legend = Style::default().fg(css_color(series.legend_color));
    let max_value = series
        .slices
        .iter()
        .map(|s| s.value)
        .fold(0.0_f64, f64::max);
    let bar_width = (area.width as usize).saturating_sub(4).min(24);

    let mut lines = Vec::with_capacity(series.slices.len() * 2);
    for slice in &series.slices {
        let colour = Style::default().fg(css_color(slice.color));
        lines.push(Line::from(vec![
            Span::styled("■ ", colour),
            Span::styled(truncate(&slice.label, 16), legend),
            Span::styled(
                format!(
                    "  {}  {}",
                    format_amount(slice.value, symbol),
                    format_percentage(slice.share * 100.0)
                ),
                legend,
            ),
        ]));
        lines.push(Line::from(Span::styled(
            format!("  {}", format_bar(slice.value, max_value, bar_width)),
            colour,
        )));
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
