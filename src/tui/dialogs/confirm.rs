//! Delete confirmation dialog
//!
//! Shows the expense about to be removed and the y/n answer keys.

use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::display::format_amount;
use crate::models::Expense;
use crate::tui::layout::centered_rect_fixed;
use crate::tui::styles::Palette;

fn field<'a>(label: &'a str, value: String, palette: &Palette) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("{:>12}: ", label), palette.label()),
        Span::styled(value, Style::default().fg(palette.text)),
    ])
}

/// Render the prompt for deleting `expense`
pub fn render(
    frame: &mut Frame,
    prompt: &str,
    expense: Option<&Expense>,
    symbol: &str,
    palette: &Palette,
) {
    let area = centered_rect_fixed(60, 10, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Delete Expense ")
        .title_style(
            Style::default()
                .fg(palette.error)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.error))
        .style(palette.base());

    let mut lines = vec![
        Line::from(Span::styled(prompt, Style::default().fg(palette.text))),
        Line::from(""),
    ];
    if let Some(expense) = expense {
        lines.push(field("Date", expense.date.clone(), palette));
        lines.push(field("Category", expense.category.clone(), palette));
        lines.push(field("Amount", format_amount(expense.amount, symbol), palette));
        lines.push(field("Description", expense.description.clone(), palette));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("[y]", Style::default().fg(palette.success)),
        Span::raw(" delete   "),
        Span::styled("[n/Esc]", Style::default().fg(palette.muted)),
        Span::raw(" keep"),
    ]));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Left);

    frame.render_widget(paragraph, area);
}
