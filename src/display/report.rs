//! Summary formatting for terminal output
//!
//! Renders the total line and the per-category breakdown shown under the
//! expense table.

use crate::services::Summary;

use super::chart::PieSeries;
use super::table::format_amount;

/// Format a percentage with appropriate precision
pub fn format_percentage(pct: f64) -> String {
    if pct < 0.1 && pct > 0.0 {
        format!("{:.2}%", pct)
    } else if pct < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return " ".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Truncate a string to a maximum number of characters with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        "...".chars().take(max_len).collect()
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{}...", head)
    }
}

/// The line showing the total of the current view
pub fn format_total_line(summary: &Summary, symbol: &str) -> String {
    format!(
        "Total: {} ({} expense{})",
        format_amount(summary.total, symbol),
        summary.count,
        if summary.count == 1 { "" } else { "s" }
    )
}

/// Per-category breakdown with share bars
pub fn format_breakdown(series: &PieSeries, symbol: &str) -> String {
    if series.is_empty() {
        return String::new();
    }

    let label_width = series
        .slices
        .iter()
        .map(|s| s.label.chars().count().min(20))
        .max()
        .unwrap_or(8)
        .max(8);
    let max_value = series
        .slices
        .iter()
        .map(|s| s.value)
        .fold(0.0_f64, f64::max);

    let mut output = String::new();
    output.push_str("By category\n");
    output.push_str(&separator(label_width + 40));
    output.push('\n');

    for slice in &series.slices {
        output.push_str(&format!(
            "{:<label_width$}  {:>12}  {:>6}  {}\n",
            truncate(&slice.label, 20),
            format_amount(slice.value, symbol),
            format_percentage(slice.share * 100.0),
            format_bar(slice.value, max_value, 16),
            label_width = label_width,
        ));
    }

    output
}
