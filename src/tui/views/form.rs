//! Entry form
//!
//! Date, category, amount and description controls for adding an expense.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders},
    Frame,
};

use crate::config::Settings;
use crate::models::ExpenseInput;
use crate::storage::KeyValueStore;
use crate::tui::app::{App, Focus};
use crate::tui::layout::halves;
use crate::tui::styles::Palette;
use crate::tui::widgets::TextInput;

/// State of the entry form
#[derive(Debug, Clone)]
pub struct EntryForm {
    pub date: TextInput,
    pub categories: Vec<String>,
    pub category_index: usize,
    pub amount: TextInput,
    pub description: TextInput,
}

impl EntryForm {
    pub fn new(settings: &Settings) -> Self {
        let categories = if settings.categories.is_empty() {
            vec![settings.default_category().to_string()]
        } else {
            settings.categories.clone()
        };

        Self {
            date: TextInput::new().label("Date").placeholder("YYYY-MM-DD"),
            categories,
            category_index: 0,
            amount: TextInput::new().label("Amount").placeholder("0.00"),
            description: TextInput::new()
                .label("Description")
                .placeholder("What was it for?"),
        }
    }

    /// Selected category
    pub fn category(&self) -> &str {
        self.categories
            .get(self.category_index)
            .map(String::as_str)
            .unwrap_or_default()
    }

    pub fn cycle_category(&mut self, forward: bool) {
        let len = self.categories.len();
        if len == 0 {
            return;
        }
        self.category_index = if forward {
            (self.category_index + 1) % len
        } else {
            (self.category_index + len - 1) % len
        };
    }

    /// Text field for a focused control, if it is one
    pub fn input_mut(&mut self, focus: Focus) -> Option<&mut TextInput> {
        match focus {
            Focus::Date => Some(&mut self.date),
            Focus::Amount => Some(&mut self.amount),
            Focus::Description => Some(&mut self.description),
            _ => None,
        }
    }

    /// Raw values as typed
    pub fn to_input(&self) -> ExpenseInput {
        ExpenseInput::new(
            self.date.value(),
            self.category(),
            self.amount.value(),
            self.description.value(),
        )
    }

    /// Reset after a successful add; the category stays selected
    pub fn clear_after_submit(&mut self) {
        self.date.clear();
        self.amount.clear();
        self.description.clear();
    }
}

/// Render a `< value >` selector the way a drop-down would show it
pub fn selector_line<'a>(label: &'a str, value: &'a str, focused: bool, palette: &Palette) -> Line<'a> {
    let value_style = if focused {
        palette.border(true)
    } else {
        ratatui::style::Style::default().fg(palette.text)
    };
    Line::from(vec![
        Span::styled(label, palette.label()),
        Span::styled(": ", palette.label()),
        Span::styled("< ", value_style),
        Span::styled(value, value_style),
        Span::styled(" >", value_style),
    ])
}

/// Render the entry form
pub fn render<S: KeyValueStore>(frame: &mut Frame, app: &App<'_, S>, area: Rect) {
    let palette = app.palette();
    let focused = app.focus.in_form();

    let block = Block::default()
        .title(" Add Expense (Enter to save) ")
        .title_style(palette.title())
        .borders(Borders::ALL)
        .border_style(palette.border(focused))
        .style(palette.base());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(inner);

    let (date_area, category_area) = halves(rows[0]);
    let (amount_area, description_area) = halves(rows[1]);

    let form = &app.form;
    form.date
        .render(date_area, frame.buffer_mut(), app.focus == Focus::Date, &palette);
    frame.render_widget(
        selector_line(
            "Category",
            form.category(),
            app.focus == Focus::Category,
            &palette,
        ),
        category_area,
    );
    form.amount
        .render(amount_area, frame.buffer_mut(), app.focus == Focus::Amount, &palette);
    form.description.render(
        description_area,
        frame.buffer_mut(),
        app.focus == Focus::Description,
        &palette,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_cycles_through_settings() {
        let settings = Settings::default();
        let mut form = EntryForm::new(&settings);
        assert_eq!(form.category(), "Food");

        form.cycle_category(false);
        assert_eq!(form.category(), "Other");
        form.cycle_category(true);
        form.cycle_category(true);
        assert_eq!(form.category(), "Transport");
    }

    #[test]
    fn test_clear_keeps_category() {
        let settings = Settings::default();
        let mut form = EntryForm::new(&settings);
        form.cycle_category(true);
        form.date = form.date.clone().content("2024-01-01");
        form.amount = form.amount.clone().content("3");
        form.description = form.description.clone().content("bus");

        let input = form.to_input();
        assert_eq!(input, ExpenseInput::new("2024-01-01", "Transport", "3", "bus"));

        form.clear_after_submit();
        assert_eq!(form.to_input(), ExpenseInput::new("", "Transport", "", ""));
    }

    #[test]
    fn test_empty_category_list_falls_back() {
        let settings = Settings {
            categories: Vec::new(),
            ..Settings::default()
        };
        let form = EntryForm::new(&settings);
        assert_eq!(form.category(), "Other");
    }
}
