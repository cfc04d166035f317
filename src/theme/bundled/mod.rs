//! Bundled TOML themes (compiled into binary, extracted on first run)
//!
//! These themes are written to ~/.config/dogdex/themes/ on first run.
//! Users can then modify them freely. Each theme lives in its own module
//! file; see kennel_dark.rs for the flagship theme.

mod kennel_dark;
mod kennel_light;
mod nord;

pub use kennel_dark::THEME as KENNEL_DARK;
pub use kennel_light::THEME as KENNEL_LIGHT;
pub use nord::THEME as NORD;

/// Bundled theme: name and TOML content
pub struct BundledTheme {
    pub filename: &'static str,
    pub content: &'static str,
}

/// All bundled themes
pub const BUNDLED_THEMES: &[BundledTheme] = &[
    BundledTheme {
        filename: "Kennel_Dark.toml",
        content: KENNEL_DARK,
    },
    BundledTheme {
        filename: "Kennel_Light.toml",
        content: KENNEL_LIGHT,
    },
    BundledTheme {
        filename: "Nord.toml",
        content: NORD,
    },
];

/// List bundled theme names (for display)
pub fn list_bundled_themes() -> Vec<&'static str> {
    vec!["Kennel Dark", "Kennel Light", "Nord"]
}
