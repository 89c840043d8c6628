//! Theme-aware colours for the TUI

use ratatui::style::{Color, Modifier, Style};

use crate::models::Theme;

/// Colours used by every view for one theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub text: Color,
    pub muted: Color,
    pub accent: Color,
    pub border: Color,
    pub focus: Color,
    pub error: Color,
    pub success: Color,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self {
                background: Color::Rgb(0xf8, 0xf9, 0xfa),
                text: Color::Rgb(0x21, 0x25, 0x29),
                muted: Color::Rgb(0x6c, 0x75, 0x7d),
                accent: Color::Rgb(0x0d, 0x6e, 0xfd),
                border: Color::Rgb(0xad, 0xb5, 0xbd),
                focus: Color::Rgb(0x0d, 0x6e, 0xfd),
                error: Color::Rgb(0xdc, 0x35, 0x45),
                success: Color::Rgb(0x19, 0x87, 0x54),
            },
            Theme::Dark => Self {
                background: Color::Rgb(0x12, 0x12, 0x12),
                text: Color::Rgb(0xe0, 0xe0, 0xe0),
                muted: Color::Rgb(0x9e, 0x9e, 0x9e),
                accent: Color::Rgb(0x36, 0xa2, 0xeb),
                border: Color::Rgb(0x44, 0x44, 0x44),
                focus: Color::Rgb(0xff, 0xce, 0x56),
                error: Color::Rgb(0xff, 0x63, 0x84),
                success: Color::Rgb(0x4b, 0xc0, 0xc0),
            },
        }
    }

    pub fn base(&self) -> Style {
        Style::default().fg(self.text).bg(self.background)
    }

    pub fn border(&self, focused: bool) -> Style {
        Style::default().fg(if focused { self.focus } else { self.border })
    }

    pub fn title(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    pub fn label(&self) -> Style {
        Style::default().fg(self.muted)
    }
}

/// Parse a CSS-style colour (`#rrggbb`, `#rgb` or `white`)
pub fn css_color(value: &str) -> Color {
    if value.eq_ignore_ascii_case("white") {
        return Color::White;
    }

    let hex = value.trim_start_matches('#');
    let channel = |s: &str| u8::from_str_radix(s, 16).ok();

    let rgb = match hex.len() {
        _ if !hex.is_ascii() => None,
        6 => channel(&hex[0..2])
            .zip(channel(&hex[2..4]))
            .zip(channel(&hex[4..6]))
            .map(|((r, g), b)| (r, g, b)),
        3 => {
            let doubled: String = hex.chars().flat_map(|c| [c, c]).collect();
            channel(&doubled[0..2])
                .zip(channel(&doubled[2..4]))
                .zip(channel(&doubled[4..6]))
                .map(|((r, g), b)| (r, g, b))
        }
        _ => None,
    };

    match rgb {
        Some((r, g, b)) => Color::Rgb(r, g, b),
        None => Color::Reset,
    }
}
