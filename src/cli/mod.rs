//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod chart;
pub mod expense;
pub mod export;
pub mod theme;

pub use chart::{handle_chart, ChartArgs};
pub use expense::{
    handle_add, handle_delete, handle_list, AddArgs, DeleteArgs, FilterArgs, StdinConfirm,
};
pub use export::{handle_export, ExportArgs};
pub use theme::{handle_theme_command, ThemeCommands};
