//! Header and status bar
//!
//! The header shows the title and the theme toggle; the status bar shows
//! alerts and key hints.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::storage::KeyValueStore;
use crate::tui::app::{App, Focus, StatusKind};

/// Render the header line
pub fn render_header<S: KeyValueStore>(frame: &mut Frame, app: &App<'_, S>, area: Rect) {
    let palette = app.palette();
    let chrome = app.theme.chrome();

    let title = " Expense Tracker";
    let toggle = format!("[Ctrl+T] {} ", chrome.button_label);
    let padding = (area.width as usize)
        .saturating_sub(title.chars().count() + toggle.chars().count() + 1)
        .max(1);

    let line = Line::from(vec![
        Span::styled(title, palette.title()),
        Span::raw(" ".repeat(padding)),
        Span::styled(toggle, Style::default().fg(palette.muted)),
    ]);
    frame.render_widget(Paragraph::new(line).style(palette.base()), area);
}

/// Key hints for the focused control
fn hints(focus: Focus) -> &'static str {
    match focus {
        Focus::Table => " ↑↓:Select  d:Delete  e:Export  t:Theme  q:Quit ",
        Focus::Category | Focus::Month => " ←→:Change  Tab:Next  Ctrl+E:Export  Esc:Quit ",
        _ => " Tab:Next  Enter:Save  Ctrl+E:Export  Esc:Quit ",
    }
}

/// Render the status bar
pub fn render<S: KeyValueStore>(frame: &mut Frame, app: &App<'_, S>, area: Rect) {
    let palette = app.palette();
    let mut spans = vec![];

    if let Some(status) = &app.status {
        let colour = match status.kind {
            StatusKind::Info => palette.success,
            StatusKind::Error => palette.error,
        };
        spans.push(Span::styled(
            format!(" {}", status.text),
            Style::default().fg(colour).add_modifier(Modifier::BOLD),
        ));
    }

    let hints = hints(app.focus);
    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding_len = (area.width as usize)
        .saturating_sub(left_len)
        .saturating_sub(hints.chars().count());

    spans.push(Span::raw(" ".repeat(padding_len.max(1))));
    spans.push(Span::styled(hints, Style::default().fg(palette.muted)));

    frame.render_widget(Paragraph::new(Line::from(spans)).style(palette.base()), area);
}
