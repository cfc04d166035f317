//! Config serialization to TOML
//!
//! Single source of truth for the config file format. The template is written
//! on first run and by `dogdex config --reset`.

use super::Config;

impl Config {
    /// Render this config as a commented TOML document
    pub fn to_toml(&self) -> String {
        format!(
            r#"# dogdex configuration
#
# Precedence: environment variables > this file > built-in defaults
# Env overrides: DOGDEX_THEME, DOGDEX_THEME_BACKGROUND, DOGDEX_TUI,
#                DOGDEX_TICK_MS, DOGDEX_LOG_LEVEL, DOGDEX_LOG_DIR

# Theme name. Bundled: "Kennel Dark", "Kennel Light", "Nord".
# Drop your own TOML themes into ~/.config/dogdex/themes/
theme = "{theme}"

# Use the theme's background color (false inherits the terminal background)
use_theme_background = {use_theme_background}

# Run the terminal UI. When false, all sections print to stdout and exit.
enable_tui = {enable_tui}

# Milliseconds between animation ticks
tick_rate_ms = {tick_rate_ms}

[logging]
# Log level filter: "error", "warn", "info", "debug", "trace"
level = "{level}"

# Also write logs to rotating files (the TUI captures logs in-memory either way)
file_enabled = {file_enabled}
file_dir = "{file_dir}"
file_prefix = "{file_prefix}"
# Rotation policy: "hourly", "daily", "never"
file_rotation = "{file_rotation}"
"#,
            theme = self.theme,
            use_theme_background = self.use_theme_background,
            enable_tui = self.enable_tui,
            tick_rate_ms = self.tick_rate_ms,
            level = self.logging.level,
            file_enabled = self.logging.file_enabled,
            file_dir = self.logging.file_dir.display(),
            file_prefix = self.logging.file_prefix,
            file_rotation = self.logging.file_rotation.as_str(),
        )
    }
}
