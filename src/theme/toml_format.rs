// TOML theme format parser
//
// This is the native theme format for dogdex. Each theme explicitly defines
// all semantic colors - no automatic mapping from palette slots.
//
// Format version: 1

use ratatui::style::Color;
use serde::Deserialize;

/// Root structure for TOML theme files
#[derive(Debug, Clone, Deserialize)]
pub struct TomlTheme {
    pub meta: ThemeMeta,
    pub ui: UiColors,
    pub panels: PanelColors,
}

/// Theme metadata
#[derive(Debug, Clone, Deserialize)]
pub struct ThemeMeta {
    pub name: String,
    #[allow(dead_code)] // For future schema evolution
    pub version: u32,
    #[serde(default)]
    #[allow(dead_code)] // Metadata for theme attribution
    pub author: Option<String>,
}

/// Base UI chrome colors
#[derive(Debug, Clone, Deserialize)]
pub struct UiColors {
    pub background: String,
    pub foreground: String,
    pub border: String,
    pub border_focused: String,
    pub title: String,
    pub status_bar: String,
    pub selection_bg: String,
    pub selection_fg: String,
    /// Optional muted/secondary text color (falls back to border)
    pub muted: Option<String>,
    /// Optional border style: "plain", "rounded", "double", "thick" (default: plain)
    pub border_type: Option<String>,
}

/// Section identity colors (focused border per content panel) plus the
/// accent used for card decorations (icons, image URLs)
#[derive(Debug, Clone, Deserialize)]
pub struct PanelColors {
    pub breeds: String,
    pub facts: String,
    pub care: String,
    pub accent: String,
}

impl TomlTheme {
    /// Parse a TOML theme from string
    pub fn from_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Parse a color string to ratatui Color
    /// Supports:
    /// - Hex format: #RRGGBB
    /// - ANSI format: ansi:0-15, ansi:fg, ansi:bg (for terminal-native colors)
    pub fn parse_color(value: &str) -> Color {
        // Handle ANSI color codes (inherits terminal colors)
        if let Some(ansi) = value.strip_prefix("ansi:") {
            return match ansi {
                "0" => Color::Black,
                "1" => Color::Red,
                "2" => Color::Green,
                "3" => Color::Yellow,
                "4" => Color::Blue,
                "5" => Color::Magenta,
                "6" => Color::Cyan,
                "7" => Color::White,
                "8" => Color::DarkGray,
                "9" => Color::LightRed,
                "10" => Color::LightGreen,
                "11" => Color::LightYellow,
                "12" => Color::LightBlue,
                "13" => Color::LightMagenta,
                "14" => Color::LightCyan,
                "15" => Color::Gray,
                "fg" => Color::Reset, // Use terminal default foreground
                "bg" => Color::Reset, // Use terminal default background
                _ => Color::White,
            };
        }

        // Handle hex format
        let hex = value.trim_start_matches('#');
        if hex.len() != 6 {
            return Color::White; // fallback
        }
        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(255);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(255);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(255);
        Color::Rgb(r, g, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_color_hex_and_ansi() {
        assert_eq!(TomlTheme::parse_color("#ff0000"), Color::Rgb(255, 0, 0));
        assert_eq!(TomlTheme::parse_color("00ff00"), Color::Rgb(0, 255, 0));
        assert_eq!(TomlTheme::parse_color("ansi:4"), Color::Blue);
        assert_eq!(TomlTheme::parse_color("ansi:fg"), Color::Reset);
        assert_eq!(TomlTheme::parse_color("#bad"), Color::White);
    }

    #[test]
    fn parse_theme() {
        let toml = r##"
[meta]
name = "Test Theme"
version = 1

[ui]
background = "#1e1e2e"
foreground = "#cdd6f4"
border = "#45475a"
border_focused = "#f5c2e7"
title = "#cdd6f4"
status_bar = "#cdd6f4"
selection_bg = "#45475a"
selection_fg = "#cdd6f4"

[panels]
breeds = "#f9e2af"
facts = "#89b4fa"
care = "#f38ba8"
accent = "#a6e3a1"
"##;

        let theme = TomlTheme::from_str(toml).unwrap();
        assert_eq!(theme.meta.name, "Test Theme");
        assert_eq!(theme.meta.version, 1);
        assert_eq!(theme.ui.background, "#1e1e2e");
        assert!(theme.ui.muted.is_none());
        assert_eq!(theme.panels.breeds, "#f9e2af");
    }

    #[test]
    fn theme_missing_section_fails() {
        let toml = r##"
[meta]
name = "Broken"
version = 1
"##;
        assert!(TomlTheme::from_str(toml).is_err());
    }
}
