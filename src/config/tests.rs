//! Configuration tests
//!
//! The round-trip test guards the serialized template: every field written by
//! `to_toml()` must parse back through `FileConfig`.

use super::*;

#[test]
fn config_roundtrip_default() {
    let config = Config::default();
    let toml_str = config.to_toml();

    let parsed: Result<FileConfig, _> = toml::from_str(&toml_str);
    assert!(
        parsed.is_ok(),
        "Default config should round-trip.\nTOML:\n{}\nError: {:?}",
        toml_str,
        parsed.err()
    );

    let file = parsed.unwrap();
    assert_eq!(file.theme.as_deref(), Some("Kennel Dark"));
    assert_eq!(file.use_theme_background, Some(true));
    assert_eq!(file.enable_tui, Some(true));
    assert_eq!(file.tick_rate_ms, Some(200));

    let logging = file.logging.expect("[logging] section should be present");
    assert_eq!(logging.level.as_deref(), Some("info"));
    assert_eq!(logging.file_enabled, Some(false));
    assert_eq!(logging.file_rotation.as_deref(), Some("daily"));
}

#[test]
fn file_values_override_defaults() {
    let file: FileConfig = toml::from_str(
        r#"
theme = "Nord"
tick_rate_ms = 100

[logging]
level = "debug"
file_rotation = "never"
"#,
    )
    .unwrap();

    let mut config = Config::default();
    config.apply_file(file);

    assert_eq!(config.theme, "Nord");
    assert_eq!(config.tick_rate_ms, 100);
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.logging.file_rotation, LogRotation::Never);
    // Untouched fields keep their defaults
    assert!(config.enable_tui);
    assert_eq!(config.logging.file_prefix, "dogdex");
}

#[test]
fn partial_file_config_is_fine() {
    let file: FileConfig = toml::from_str(r#"theme = "Kennel Light""#).unwrap();
    let mut config = Config::default();
    config.apply_file(file);

    assert_eq!(config.theme, "Kennel Light");
    assert_eq!(config.tick_rate_ms, 200);
}

#[test]
fn unknown_rotation_keeps_default() {
    let file: FileConfig = toml::from_str(
        r#"
[logging]
file_rotation = "weekly"
"#,
    )
    .unwrap();

    let mut config = Config::default();
    config.apply_file(file);
    assert_eq!(config.logging.file_rotation, LogRotation::Daily);
}

#[test]
fn env_overrides_beat_everything() {
    // No other test touches these variables, so this is race-free
    std::env::set_var("DOGDEX_THEME", "Nord");
    std::env::set_var("DOGDEX_TICK_MS", "123");
    std::env::set_var("DOGDEX_TUI", "false");

    let mut config = Config::default();
    config.apply_env();

    assert_eq!(config.theme, "Nord");
    assert_eq!(config.tick_rate_ms, 123);
    assert!(!config.enable_tui);

    std::env::remove_var("DOGDEX_THEME");
    std::env::remove_var("DOGDEX_TICK_MS");
    std::env::remove_var("DOGDEX_TUI");
}

#[test]
fn rotation_parse_accepts_known_values() {
    assert_eq!(LogRotation::parse("hourly"), Some(LogRotation::Hourly));
    assert_eq!(LogRotation::parse("DAILY"), Some(LogRotation::Daily));
    assert_eq!(LogRotation::parse("never"), Some(LogRotation::Never));
    assert_eq!(LogRotation::parse("sometimes"), None);
}
