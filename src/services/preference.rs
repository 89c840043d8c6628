//! Theme preference service
//!
//! Persists the dark mode flag next to the ledger and flips it on request.

use tracing::info;

use crate::error::TrackerResult;
use crate::models::Theme;
use crate::storage::{KeyValueStore, Storage, THEME_KEY};

/// Service for the display theme preference
pub struct PreferenceService<'a, S: KeyValueStore> {
    storage: &'a mut Storage<S>,
}

impl<'a, S: KeyValueStore> PreferenceService<'a, S> {
    pub fn new(storage: &'a mut Storage<S>) -> Self {
        Self { storage }
    }

    /// Read the stored theme; absent or unrecognised values mean light
    pub fn load_theme(&self) -> TrackerResult<Theme> {
        let stored = self.storage.store().get(THEME_KEY)?;
        Ok(Theme::from_stored(stored.as_deref()))
    }

    /// Store `theme` as the current preference
    pub fn set_theme(&mut self, theme: Theme) -> TrackerResult<()> {
        self.storage
            .store_mut()
            .set(THEME_KEY, theme.as_stored())
    }

    /// Flip the current theme, persist it and return the new value
    pub fn toggle_theme(&mut self) -> TrackerResult<Theme> {
        let theme = self.load_theme()?.toggled();
        self.set_theme(theme)?;
        info!(%theme, "theme toggled");
        Ok(theme)
    }
}
