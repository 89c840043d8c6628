//! Layout definitions for the TUI
//!
//! Defines the overall layout structure: header, entry form, filters,
//! table and chart panels, status bar.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions for the TUI
pub struct AppLayout {
    /// Title and theme toggle
    pub header: Rect,
    /// Entry form
    pub form: Rect,
    /// Month/year filter controls
    pub filters: Rect,
    /// Expense table
    pub table: Rect,
    /// Category chart and legend
    pub chart: Rect,
    /// Status bar at the bottom
    pub status_bar: Rect,
}

impl AppLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Header
                Constraint::Length(4), // Form
                Constraint::Length(3), // Filters
                Constraint::Min(5),    // Table and chart
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
            .split(vertical[3]);

        Self {
            header: vertical[0],
            form: vertical[1],
            filters: vertical[2],
            table: body[0],
            chart: body[1],
            status_bar: vertical[4],
        }
    }
}

/// Split a one-line area into two halves
pub fn halves(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);
    (chunks[0], chunks[1])
}

/// Create a fixed-size centered rect for dialogs
pub fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}
