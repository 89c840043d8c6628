//! User settings for the expense tracker
//!
//! Manages presentation preferences that are not part of the ledger itself:
//! the currency glyph, the offered category set and the export directory.
//! The display theme lives in the key-value store next to the ledger instead.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::paths::TrackerPaths;
use crate::error::TrackerError;

/// User settings for the expense tracker
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Glyph prefixed to every displayed amount
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Categories offered by the entry form, in display order
    #[serde(default = "default_categories")]
    pub categories: Vec<String>,

    /// Directory that receives CSV exports (current directory when unset)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub export_dir: Option<PathBuf>,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "₹".to_string()
}

fn default_categories() -> Vec<String> {
    ["Food", "Transport", "Shopping", "Bills", "Entertainment", "Health", "Other"]
        .iter()
        .map(|c| c.to_string())
        .collect()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            categories: default_categories(),
            export_dir: None,
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &TrackerPaths) -> Result<Self, TrackerError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                TrackerError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                TrackerError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // No file yet; defaults apply
            Ok(Settings::default())
        }
    }

    /// Category preselected by the entry form
    pub fn default_category(&self) -> &str {
        self.categories.first().map(String::as_str).unwrap_or("Other")
    }

    /// Directory used for CSV exports
    pub fn export_dir(&self) -> PathBuf {
        self.export_dir.clone().unwrap_or_else(|| PathBuf::from("."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.currency_symbol, "₹");
        assert_eq!(settings.default_category(), "Food");
        assert_eq!(settings.export_dir(), PathBuf::from("."));
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(
            paths.settings_file(),
            r#"{"currency_symbol": "$", "categories": ["Rent"]}"#,
        )
        .unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.currency_symbol, "$");
        assert_eq!(loaded.default_category(), "Rent");
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"currency_symbol": "€"}"#).unwrap();
        assert_eq!(settings.currency_symbol, "€");
        assert_eq!(settings.schema_version, 1);
        assert!(!settings.categories.is_empty());
    }

    #[test]
    fn test_empty_category_list_falls_back() {
        let mut settings = Settings::default();
        settings.categories.clear();
        assert_eq!(settings.default_category(), "Other");
    }
}
