//! Application configuration
//!
//! Configuration is loaded in order of precedence:
//! 1. Environment variables (highest priority)
//! 2. Config file (~/.config/dogdex/config.toml)
//! 3. Built-in defaults (lowest priority)

use serde::Deserialize;
use std::path::PathBuf;

mod serialization;

#[cfg(test)]
mod tests;

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Theme name, e.g. "Kennel Dark", "Kennel Light", "Nord"
    pub theme: String,

    /// Use theme's background color (true) or terminal's default (false)
    pub use_theme_background: bool,

    /// Whether to run the TUI (false renders all sections to stdout and exits)
    pub enable_tui: bool,

    /// Milliseconds between animation ticks (entrance highlight, toast expiry)
    pub tick_rate_ms: u64,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: "Kennel Dark".to_string(),
            use_theme_background: true,
            enable_tui: true,
            tick_rate_ms: 200,
            logging: LoggingConfig::default(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level filter: "error", "warn", "info", "debug", "trace"
    pub level: String,

    /// Also write logs to rotating files
    pub file_enabled: bool,

    /// Directory for log files
    pub file_dir: PathBuf,

    /// Log file name prefix
    pub file_prefix: String,

    /// Rotation policy for log files
    pub file_rotation: LogRotation,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file_enabled: false,
            file_dir: PathBuf::from("./logs"),
            file_prefix: "dogdex".to_string(),
            file_rotation: LogRotation::Daily,
        }
    }
}

/// Log file rotation policy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogRotation {
    Hourly,
    Daily,
    Never,
}

impl LogRotation {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogRotation::Hourly => "hourly",
            LogRotation::Daily => "daily",
            LogRotation::Never => "never",
        }
    }

    fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "hourly" => Some(LogRotation::Hourly),
            "daily" => Some(LogRotation::Daily),
            "never" => Some(LogRotation::Never),
            _ => None,
        }
    }
}

/// Config file structure (subset of Config that makes sense to persist)
#[derive(Debug, Deserialize, Default)]
pub(crate) struct FileConfig {
    pub theme: Option<String>,
    pub use_theme_background: Option<bool>,
    pub enable_tui: Option<bool>,
    pub tick_rate_ms: Option<u64>,

    /// Optional [logging] section
    pub logging: Option<FileLogging>,
}

/// [logging] section of the config file
#[derive(Debug, Deserialize, Default)]
pub(crate) struct FileLogging {
    pub level: Option<String>,
    pub file_enabled: Option<bool>,
    pub file_dir: Option<String>,
    pub file_prefix: Option<String>,
    pub file_rotation: Option<String>,
}

impl Config {
    /// Get the config file path: ~/.config/dogdex/config.toml
    /// Uses Unix-style ~/.config on all platforms for consistency
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("dogdex").join("config.toml"))
    }

    /// Create config file with defaults if it doesn't exist
    /// Called during startup to help users discover configuration options
    pub fn ensure_config_exists() {
        let Some(path) = Self::config_path() else {
            return;
        };

        // Don't overwrite existing config
        if path.exists() {
            return;
        }

        if let Some(parent) = path.parent() {
            if std::fs::create_dir_all(parent).is_err() {
                return; // Silently fail - config is optional
            }
        }

        // Use Config::default().to_toml() as single source of truth
        let template = Self::default().to_toml();

        // Write config (ignore errors - config is optional)
        let _ = std::fs::write(&path, template);
    }

    /// Load file config if it exists
    ///
    /// A config file that exists but cannot be parsed aborts the program with
    /// an actionable message rather than silently falling back to defaults
    /// while the user debugs the wrong thing.
    fn load_file_config() -> FileConfig {
        let Some(path) = Self::config_path() else {
            return FileConfig::default();
        };

        match std::fs::read_to_string(&path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("Error: failed to parse config file {}", path.display());
                    eprintln!();
                    eprintln!("  {}", e);
                    eprintln!();
                    eprintln!("Fix the file, or regenerate it with: dogdex config --reset");
                    std::process::exit(1);
                }
            },
            Err(_) => FileConfig::default(),
        }
    }

    /// Apply a parsed file config on top of this one
    fn apply_file(&mut self, file: FileConfig) {
        if let Some(theme) = file.theme {
            self.theme = theme;
        }
        if let Some(bg) = file.use_theme_background {
            self.use_theme_background = bg;
        }
        if let Some(tui) = file.enable_tui {
            self.enable_tui = tui;
        }
        if let Some(tick) = file.tick_rate_ms {
            self.tick_rate_ms = tick;
        }
        if let Some(logging) = file.logging {
            if let Some(level) = logging.level {
                self.logging.level = level;
            }
            if let Some(enabled) = logging.file_enabled {
                self.logging.file_enabled = enabled;
            }
            if let Some(dir) = logging.file_dir {
                self.logging.file_dir = PathBuf::from(dir);
            }
            if let Some(prefix) = logging.file_prefix {
                self.logging.file_prefix = prefix;
            }
            if let Some(rotation) = logging.file_rotation {
                if let Some(parsed) = LogRotation::parse(&rotation) {
                    self.logging.file_rotation = parsed;
                }
            }
        }
    }

    /// Apply environment variable overrides (highest precedence)
    fn apply_env(&mut self) {
        if let Ok(theme) = std::env::var("DOGDEX_THEME") {
            self.theme = theme;
        }
        if let Ok(bg) = std::env::var("DOGDEX_THEME_BACKGROUND") {
            self.use_theme_background = bg != "0" && !bg.eq_ignore_ascii_case("false");
        }
        if let Ok(tui) = std::env::var("DOGDEX_TUI") {
            self.enable_tui = tui != "0" && !tui.eq_ignore_ascii_case("false");
        }
        if let Ok(tick) = std::env::var("DOGDEX_TICK_MS") {
            if let Ok(parsed) = tick.parse() {
                self.tick_rate_ms = parsed;
            }
        }
        if let Ok(level) = std::env::var("DOGDEX_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(dir) = std::env::var("DOGDEX_LOG_DIR") {
            self.logging.file_dir = PathBuf::from(dir);
        }
    }

    /// Load the effective configuration: defaults, then file, then env
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply_file(Self::load_file_config());
        config.apply_env();
        config
    }
}
