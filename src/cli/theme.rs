//! Theme CLI commands

use clap::Subcommand;

use crate::error::TrackerResult;
use crate::models::Theme;
use crate::services::PreferenceService;
use crate::storage::{KeyValueStore, Storage};

/// Theme subcommands
#[derive(Subcommand, Debug, Clone, Copy, Default)]
pub enum ThemeCommands {
    /// Show the current theme
    #[default]
    Show,
    /// Switch between light and dark
    Toggle,
}

fn print_theme(theme: Theme) {
    let chrome = theme.chrome();
    println!("Theme: {}", theme);
    println!("Toggle button: {}", chrome.button_label);
}

/// Handle a theme command
pub fn handle_theme_command<S: KeyValueStore>(
    storage: &mut Storage<S>,
    cmd: ThemeCommands,
) -> TrackerResult<()> {
    let mut service = PreferenceService::new(storage);

    match cmd {
        ThemeCommands::Show => print_theme(service.load_theme()?),
        ThemeCommands::Toggle => print_theme(service.toggle_theme()?),
    }

    Ok(())
}
