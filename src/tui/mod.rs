//! Terminal User Interface module
//!
//! This module provides the interactive expense tracker using ratatui: an
//! entry form, month/year filters, the expense table, a category chart panel
//! and a confirmation dialog for deletions.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout and colours
pub mod layout;
pub mod styles;

pub use app::App;
pub use terminal::run_tui;
