//! Expense table view
//!
//! Shows the filtered ledger with the total of the visible rows.

use ratatui::{
    layout::{Alignment, Constraint, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::display::{expense_rows, format_amount};
use crate::storage::KeyValueStore;
use crate::tui::app::{App, Focus};

/// Render the expense table
pub fn render<S: KeyValueStore>(frame: &mut Frame, app: &App<'_, S>, area: Rect) {
    let palette = app.palette();
    let is_focused = app.focus == Focus::Table;
    let symbol = app.settings.currency_symbol.as_str();
    let view = app.view();

    let total = Line::from(format!(
        " Total: {} ",
        format_amount(view.summary.total, symbol)
    ))
    .alignment(Alignment::Right);

    let block = Block::default()
        .title(format!(" Expenses ({}) ", view.selector))
        .title_style(palette.title())
        .title_bottom(total)
        .borders(Borders::ALL)
        .border_style(palette.border(is_focused))
        .style(palette.base());

    if view.is_empty() {
        let text = Paragraph::new("No expenses. Fill in the form above to add one.")
            .block(block)
            .style(Style::default().fg(palette.muted));
        frame.render_widget(text, area);
        return;
    }

    let widths = [
        Constraint::Length(4),  // Index
        Constraint::Length(11), // Date
        Constraint::Length(14), // Category
        Constraint::Length(12), // Amount
        Constraint::Min(10),    // Description
    ];

    let bold = Style::default().add_modifier(Modifier::BOLD);
    let header = Row::new(vec![
        Cell::from("#").style(bold),
        Cell::from("Date").style(bold),
        Cell::from("Category").style(bold),
        Cell::from("Amount").style(bold),
        Cell::from("Description").style(bold),
    ])
    .style(Style::default().fg(palette.accent))
    .height(1);

    let rows: Vec<Row> = expense_rows(&view, symbol)
        .into_iter()
        .map(|row| {
            Row::new(vec![
                Cell::from(row.index.to_string()),
                Cell::from(row.date),
                Cell::from(row.category),
                Cell::from(Line::from(row.amount).alignment(Alignment::Right)),
                Cell::from(row.description),
            ])
        })
        .collect();

    let highlight = if is_focused {
        Style::default()
            .fg(palette.background)
            .bg(palette.focus)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .highlight_style(highlight)
        .highlight_symbol(if is_focused { "▶ " } else { "  " });

    let mut state = TableState::default().with_selected(Some(app.selected_row));
    frame.render_stateful_widget(table, area, &mut state);
}
