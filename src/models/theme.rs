//! Display theme preference
//!
//! The theme is a binary flag stored as `"enabled"` (dark) or `"disabled"`
//! (light). Anything else, including an absent value, reads as light.

use std::fmt;

/// Stored value meaning dark mode is on
pub const DARK_ENABLED: &str = "enabled";
/// Stored value meaning dark mode is off
pub const DARK_DISABLED: &str = "disabled";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// Labels and styles for the theme toggle control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeChrome {
    /// Text shown on the toggle button
    pub button_label: &'static str,
    /// Style class of the toggle button
    pub button_class: &'static str,
    /// Class applied to the page body, if any
    pub body_class: Option<&'static str>,
}

impl Theme {
    /// Decode a stored flag
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some(DARK_ENABLED) => Theme::Dark,
            _ => Theme::Light,
        }
    }

    /// Encode for storage
    pub fn as_stored(&self) -> &'static str {
        match self {
            Theme::Dark => DARK_ENABLED,
            Theme::Light => DARK_DISABLED,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Toggle control appearance; the button offers the opposite theme
    pub fn chrome(&self) -> ThemeChrome {
        match self {
            Theme::Dark => ThemeChrome {
                button_label: "☀️ Light Mode",
                button_class: "btn btn-light",
                body_class: Some("dark-mode"),
            },
            Theme::Light => ThemeChrome {
                button_label: "🌙 Dark Mode",
                button_class: "btn btn-secondary",
                body_class: None,
            },
        }
    }

    /// Chart legend text colour
    pub fn legend_color(&self) -> &'static str {
        match self {
            Theme::Dark => "white",
            Theme::Light => "#666",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Light => write!(f, "light"),
            Theme::Dark => write!(f, "dark"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_stored_defaults_to_light() {
        assert_eq!(Theme::from_stored(Some("enabled")), Theme::Dark);
        assert_eq!(Theme::from_stored(Some("disabled")), Theme::Light);
        assert_eq!(Theme::from_stored(Some("ENABLED")), Theme::Light);
        assert_eq!(Theme::from_stored(None), Theme::Light);
    }

    #[test]
    fn test_stored_round_trip() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_eq!(Theme::from_stored(Some(theme.as_stored())), theme);
        }
    }

    #[test]
    fn test_chrome_offers_opposite_theme() {
        assert_eq!(Theme::Dark.chrome().button_label, "☀️ Light Mode");
        assert_eq!(Theme::Light.chrome().button_label, "🌙 Dark Mode");
        assert_eq!(Theme::Dark.chrome().body_class, Some("dark-mode"));
    }

    #[test]
    fn test_legend_color() {
        assert_eq!(Theme::Dark.legend_color(), "white");
        assert_eq!(Theme::Light.legend_color(), "#666");
    }
}
