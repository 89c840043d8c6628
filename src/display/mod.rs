//! Display formatting for terminal output
//!
//! Provides the expense table, summary lines and the category chart with its
//! drawing backends.

pub mod chart;
pub mod report;
pub mod svg;
pub mod table;

pub use chart::{
    palette_color, pie_series, Chart, ChartBackend, ChartHost, PanelBackend, PieSeries, PieSlice,
    PALETTE,
};
pub use report::{format_breakdown, format_total_line};
pub use self::svg::SvgChartBackend;
pub use table::{expense_rows, format_amount, format_expense_table, ExpenseRow};
