//! Configuration tests

use super::*;
use std::collections::HashMap;
use std::path::PathBuf;

fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

fn no_env() -> impl Fn(&str) -> Option<String> {
    |_| None
}

// ─────────────────────────────────────────────────────────────────────────────
// Round-trip tests
// ─────────────────────────────────────────────────────────────────────────────

/// Verify that serialized config can be parsed back.
#[test]
fn test_config_roundtrip_default() {
    let config = Config::default();
    let toml_str = config.to_toml();

    let parsed: Result<FileConfig, _> = toml::from_str(&toml_str);
    assert!(
        parsed.is_ok(),
        "Default config should round-trip.\nTOML:\n{}\nError: {:?}",
        toml_str,
        parsed.err()
    );

    let resolved = Config::resolve(parsed.unwrap(), no_env());
    assert_eq!(resolved, config);
}

/// Initial text is free-form; quotes and newlines must survive serialization
#[test]
fn test_config_roundtrip_awkward_initial_text() {
    let config = Config {
        initial_text: "say \"hi\"\nthen\tleave \\".to_string(),
        ..Config::default()
    };

    let file: FileConfig = toml::from_str(&config.to_toml()).expect("valid TOML");
    assert_eq!(file.initial_text.as_deref(), Some("say \"hi\"\nthen\tleave \\"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Precedence
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_file_overrides_defaults() {
    let file: FileConfig = toml::from_str(
        r#"
max_length = 140
theme = "Terminal"
initial_text = "draft"

[logging]
level = "debug"
file_enabled = true
file_rotation = "hourly"
"#,
    )
    .unwrap();

    let config = Config::resolve(file, no_env());
    assert_eq!(config.max_length, 140);
    assert_eq!(config.theme, "Terminal");
    assert_eq!(config.initial_text, "draft");
    assert_eq!(config.logging.level, "debug");
    assert!(config.logging.file_enabled);
    assert_eq!(config.logging.file_rotation, LogRotation::Hourly);
    // Unset keys keep their defaults
    assert_eq!(config.logging.file_prefix, "charcount");
}

#[test]
fn test_env_overrides_file() {
    let file: FileConfig = toml::from_str("max_length = 140\ntheme = \"Terminal\"").unwrap();
    let env = env_from(&[("CHARCOUNT_MAX_LENGTH", "50"), ("CHARCOUNT_THEME", "Classic")]);

    let config = Config::resolve(file, env);
    assert_eq!(config.max_length, 50);
    assert_eq!(config.theme, "Classic");
}

#[test]
fn test_unparseable_env_falls_through_to_file() {
    let file: FileConfig = toml::from_str("max_length = 140").unwrap();
    let env = env_from(&[("CHARCOUNT_MAX_LENGTH", "lots")]);

    assert_eq!(Config::resolve(file, env).max_length, 140);
}

#[test]
fn test_zero_max_length_falls_back() {
    let file: FileConfig = toml::from_str("max_length = 0").unwrap();
    assert_eq!(Config::resolve(file, no_env()).max_length, DEFAULT_MAX_LENGTH);
}

#[test]
fn test_unknown_rotation_defaults_to_daily() {
    assert_eq!(LogRotation::parse("weekly"), LogRotation::Daily);
    assert_eq!(LogRotation::parse("NEVER"), LogRotation::Never);
}

#[test]
fn test_rotation_drives_appender_schedule() {
    use tracing_appender::rolling::Rotation;

    assert_eq!(LogRotation::Hourly.rotation(), Rotation::HOURLY);
    assert_eq!(LogRotation::default().rotation(), Rotation::DAILY);
    assert_eq!(LogRotation::parse("never").rotation(), Rotation::NEVER);
}

// ─────────────────────────────────────────────────────────────────────────────
// File loading
// ─────────────────────────────────────────────────────────────────────────────

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("charcount-config-{}-{}", name, std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn test_missing_file_is_defaults() {
    let path = scratch_dir("missing").join("nope.toml");
    let file = Config::load_file_config(&path).expect("missing file is fine");
    assert_eq!(Config::resolve(file, no_env()), Config::default());
}

#[test]
fn test_broken_file_is_an_error() {
    let path = scratch_dir("broken").join("config.toml");
    std::fs::write(&path, "max_length = [oops").unwrap();

    let err = Config::load_file_config(&path).unwrap_err();
    assert!(format!("{:#}", err).contains("Failed to parse config file"));
}
