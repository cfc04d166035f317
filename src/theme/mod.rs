// Theme system for the TUI
//
// - TomlTheme: on-disk format with explicit semantic color definitions
// - Theme: final resolved theme with all colors ready for use
//
// Theme loading priority:
// 1. External TOML themes from ~/.config/dogdex/themes/*.toml
// 2. Bundled themes (extracted on first run)
// 3. Fallback to hardcoded default

mod bundled;
mod toml_format;

pub use toml_format::TomlTheme;

use crate::tui::app::Section;
use ratatui::style::Color;
use ratatui::widgets::BorderType;
use std::path::PathBuf;

/// Theme configuration options
#[derive(Debug, Clone)]
pub struct ThemeConfig {
    /// Use theme's background color (true) or terminal's default (false)
    pub use_theme_background: bool,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            use_theme_background: true,
        }
    }
}

/// Complete resolved theme ready for use in the TUI.
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,

    // ─── UI Element Colors ───────────────────────────────────
    pub title: Color,
    pub status_bar: Color,
    pub border: Color,
    pub highlight: Color, // Maps to border_focused

    // ─── Section Identity Colors ─────────────────────────────
    pub panel_breeds: Color,
    pub panel_facts: Color,
    pub panel_care: Color,

    // ─── Card Decoration ─────────────────────────────────────
    pub accent: Color,

    // ─── Terminal Colors ─────────────────────────────────────
    pub background: Color,
    pub foreground: Color,

    // ─── Selection Colors ────────────────────────────────────
    pub selection: Color,
    pub selection_fg: Color,

    // ─── Secondary/Muted Text ────────────────────────────────
    pub muted: Color,

    // ─── Border Style ────────────────────────────────────────
    pub border_type: BorderType,
}

impl Theme {
    /// Load theme by name with default configuration
    pub fn by_name(name: &str) -> Self {
        Self::by_name_with_config(name, &ThemeConfig::default())
    }

    /// Load theme by name with custom configuration
    pub fn by_name_with_config(name: &str, config: &ThemeConfig) -> Self {
        if let Some(theme) = Self::load_toml(name, config) {
            return theme;
        }

        // Ultimate fallback: hardcoded default
        Self::hardcoded_default(config)
    }

    /// Load from TOML theme file or bundled theme
    fn load_toml(name: &str, config: &ThemeConfig) -> Option<Self> {
        // Try external TOML file first
        if let Some(themes_dir) = Self::themes_dir() {
            let toml_path = themes_dir.join(format!("{}.toml", name));

            if toml_path.exists() {
                if let Ok(contents) = std::fs::read_to_string(&toml_path) {
                    if let Ok(toml_theme) = TomlTheme::from_str(&contents) {
                        return Some(Self::from_toml(toml_theme, config));
                    }
                }
            }

            // Try with spaces replaced by underscores
            let normalized = name.replace(' ', "_");
            let normalized_path = themes_dir.join(format!("{}.toml", normalized));

            if normalized_path.exists() {
                if let Ok(contents) = std::fs::read_to_string(&normalized_path) {
                    if let Ok(toml_theme) = TomlTheme::from_str(&contents) {
                        return Some(Self::from_toml(toml_theme, config));
                    }
                }
            }
        }

        // Try bundled themes (compiled into binary)
        let normalized = name.replace(' ', "_");
        let filename = format!("{}.toml", normalized);
        for theme in bundled::BUNDLED_THEMES {
            if theme.filename == filename || theme.filename.eq_ignore_ascii_case(&filename) {
                if let Ok(toml_theme) = TomlTheme::from_str(theme.content) {
                    return Some(Self::from_toml(toml_theme, config));
                }
            }
        }

        None
    }

    /// Get themes directory path
    fn themes_dir() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".config").join("dogdex").join("themes"))
    }

    /// Parse border type string to BorderType enum
    fn parse_border_type(value: Option<&String>) -> BorderType {
        match value.map(|s| s.as_str()) {
            Some("rounded") => BorderType::Rounded,
            Some("double") => BorderType::Double,
            Some("thick") => BorderType::Thick,
            _ => BorderType::Plain,
        }
    }

    /// Create theme from the TOML format
    fn from_toml(toml: TomlTheme, config: &ThemeConfig) -> Self {
        let parse = TomlTheme::parse_color;

        let background = if config.use_theme_background {
            parse(&toml.ui.background)
        } else {
            Color::Reset
        };

        Self {
            name: toml.meta.name.clone(),

            title: parse(&toml.ui.title),
            status_bar: parse(&toml.ui.status_bar),
            border: parse(&toml.ui.border),
            highlight: parse(&toml.ui.border_focused),

            panel_breeds: parse(&toml.panels.breeds),
            panel_facts: parse(&toml.panels.facts),
            panel_care: parse(&toml.panels.care),
            accent: parse(&toml.panels.accent),

            background,
            foreground: parse(&toml.ui.foreground),
            selection: parse(&toml.ui.selection_bg),
            selection_fg: parse(&toml.ui.selection_fg),

            // Muted text (explicit or fallback to border)
            muted: toml
                .ui
                .muted
                .as_ref()
                .map(|m| parse(m))
                .unwrap_or_else(|| parse(&toml.ui.border)),

            border_type: Self::parse_border_type(toml.ui.border_type.as_ref()),
        }
    }

    /// Hardcoded fallback when no themes can be loaded
    fn hardcoded_default(config: &ThemeConfig) -> Self {
        // Kennel Dark colors
        let background = if config.use_theme_background {
            Color::Rgb(38, 35, 33)
        } else {
            Color::Reset
        };

        Self {
            name: "Kennel Dark (Fallback)".to_string(),

            title: Color::Rgb(217, 160, 91),
            status_bar: Color::Rgb(217, 160, 91),
            border: Color::Rgb(60, 56, 51),
            highlight: Color::Rgb(217, 160, 91),

            panel_breeds: Color::Rgb(201, 153, 92),
            panel_facts: Color::Rgb(107, 152, 184),
            panel_care: Color::Rgb(181, 109, 109),
            accent: Color::Rgb(93, 169, 161),

            background,
            foreground: Color::Rgb(216, 208, 199),
            selection: Color::Rgb(61, 54, 49),
            selection_fg: Color::Rgb(239, 233, 225),

            muted: Color::Rgb(140, 131, 121),
            border_type: BorderType::Rounded,
        }
    }

    /// Identity color for a content section (used for the focused border
    /// and the tab highlight)
    pub fn section_color(&self, section: Section) -> Color {
        match section {
            Section::Breeds => self.panel_breeds,
            Section::Facts => self.panel_facts,
            Section::Care => self.panel_care,
        }
    }

    /// List all available themes (bundled + external)
    pub fn list_available() -> Vec<String> {
        let mut themes: Vec<String> = Vec::new();

        // Add bundled themes (always available)
        for name in bundled::list_bundled_themes() {
            themes.push(name.to_string());
        }

        // Add external themes from config dir
        if let Some(themes_dir) = Self::themes_dir() {
            if let Ok(entries) = std::fs::read_dir(themes_dir) {
                for entry in entries.flatten() {
                    let path = entry.path();
                    if path.extension().is_some_and(|ext| ext == "toml") {
                        if let Some(stem) = path.file_stem() {
                            // Convert filename format (underscore) to display format (space)
                            let display_name = stem.to_string_lossy().replace('_', " ");
                            if !themes.iter().any(|t| t.eq_ignore_ascii_case(&display_name)) {
                                themes.push(display_name);
                            }
                        }
                    }
                }
            }
        }

        themes
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::by_name("Kennel Dark")
    }
}

/// Ensure themes directory exists and extract bundled themes on first run
pub fn ensure_themes_extracted() {
    let Some(themes_dir) = Theme::themes_dir() else {
        return;
    };

    if std::fs::create_dir_all(&themes_dir).is_err() {
        return;
    }

    // Check if we've already extracted (marker file)
    let marker = themes_dir.join(".extracted_v1");
    if marker.exists() {
        return;
    }

    // Extract bundled TOML themes
    for theme in bundled::BUNDLED_THEMES {
        let path = themes_dir.join(theme.filename);
        // Only write if file doesn't exist (don't overwrite user modifications)
        if !path.exists() {
            let _ = std::fs::write(&path, theme.content);
        }
    }

    let _ = std::fs::write(&marker, "1");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_themes_all_parse() {
        for bundled in bundled::BUNDLED_THEMES {
            let parsed = TomlTheme::from_str(bundled.content);
            assert!(
                parsed.is_ok(),
                "bundled theme {} should parse: {:?}",
                bundled.filename,
                parsed.err()
            );
        }
    }

    #[test]
    fn bundled_names_match_listing() {
        let names = bundled::list_bundled_themes();
        assert_eq!(names.len(), bundled::BUNDLED_THEMES.len());
        for (name, bundled) in names.iter().zip(bundled::BUNDLED_THEMES) {
            let parsed = TomlTheme::from_str(bundled.content).unwrap();
            assert_eq!(&parsed.meta.name, name);
        }
    }

    #[test]
    fn unknown_theme_falls_back_to_default() {
        let theme = Theme::by_name("No Such Theme Anywhere");
        assert_eq!(theme.name, "Kennel Dark (Fallback)");
    }

    #[test]
    fn terminal_background_respected() {
        let config = ThemeConfig {
            use_theme_background: false,
        };
        let theme = Theme::by_name_with_config("No Such Theme Anywhere", &config);
        assert_eq!(theme.background, Color::Reset);
    }

    #[test]
    fn section_colors_are_distinct_in_fallback() {
        let theme = Theme::hardcoded_default(&ThemeConfig::default());
        assert_ne!(
            theme.section_color(Section::Breeds),
            theme.section_color(Section::Facts)
        );
        assert_ne!(
            theme.section_color(Section::Facts),
            theme.section_color(Section::Care)
        );
    }
}
