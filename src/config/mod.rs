//! Configuration for the character counter
//!
//! Configuration is loaded in order of precedence:
//! 1. Command-line flags (highest priority, applied by the caller)
//! 2. Environment variables
//! 3. Config file (~/.config/charcount/config.toml)
//! 4. Built-in defaults (lowest priority)

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

// ─────────────────────────────────────────────────────────────────────────────
// Submodules
// ─────────────────────────────────────────────────────────────────────────────

mod logging;
mod serialization;

#[cfg(test)]
mod tests;

pub use logging::{FileLogging, LogRotation, LoggingConfig};

// ─────────────────────────────────────────────────────────────────────────────
// Constants
// ─────────────────────────────────────────────────────────────────────────────

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Maximum length used when nothing else is configured
pub const DEFAULT_MAX_LENGTH: usize = 280;

/// Theme used when nothing else is configured
pub const DEFAULT_THEME: &str = "Classic";

// ─────────────────────────────────────────────────────────────────────────────
// Application Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Application configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Maximum number of characters the field accepts (read once at startup)
    pub max_length: usize,

    /// Text the field starts with
    pub initial_text: String,

    /// Theme name: "Classic", "Terminal"
    pub theme: String,

    /// Use theme's background color (true) or terminal's default (false)
    pub use_theme_background: bool,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_length: DEFAULT_MAX_LENGTH,
            initial_text: String::new(),
            theme: DEFAULT_THEME.to_string(),
            use_theme_background: true,
            logging: LoggingConfig::default(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// File Configuration (deserialization layer)
// ─────────────────────────────────────────────────────────────────────────────

/// Config file structure
#[derive(Debug, Deserialize, Default)]
pub(crate) struct FileConfig {
    pub max_length: Option<usize>,
    pub initial_text: Option<String>,
    pub theme: Option<String>,
    pub use_theme_background: Option<bool>,

    /// Optional [logging] section
    pub logging: Option<FileLogging>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Configuration Loading
// ─────────────────────────────────────────────────────────────────────────────

impl Config {
    /// Get the config file path: ~/.config/charcount/config.toml
    /// Uses Unix-style ~/.config on all platforms for consistency
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("charcount").join("config.toml"))
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

        // Write config (ignore errors - config is optional)
        let _ = std::fs::write(&path, Self::default().to_toml());
    }

    /// Read and parse a config file
    ///
    /// A missing file means defaults. A file that exists but cannot be read or
    /// parsed is an error: a broken config should fail fast, not silently fall
    /// back to defaults while the user debugs the wrong thing.
    pub(crate) fn load_file_config(path: &Path) -> Result<FileConfig> {
        match std::fs::read_to_string(path) {
            Ok(contents) => toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config file {}", path.display())),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(FileConfig::default()),
            Err(e) => Err(e)
                .with_context(|| format!("Cannot read config file {}", path.display())),
        }
    }

    /// Load configuration: env vars -> file -> defaults
    pub fn from_env() -> Result<Self> {
        let file = match Self::config_path() {
            Some(path) => Self::load_file_config(&path)?,
            None => FileConfig::default(),
        };
        Ok(Self::resolve(file, |key| std::env::var(key).ok()))
    }

    /// Merge a parsed file with environment lookups
    pub(crate) fn resolve(file: FileConfig, env: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        // Max length: env > file > default
        let max_length = env("CHARCOUNT_MAX_LENGTH")
            .and_then(|v| v.parse().ok())
            .or(file.max_length)
            .unwrap_or(defaults.max_length);
        let max_length = Self::validated_max_length(max_length);

        // Theme: env > file > default
        let theme = env("CHARCOUNT_THEME")
            .or(file.theme)
            .unwrap_or(defaults.theme);

        // Initial text: file only
        let initial_text = file.initial_text.unwrap_or(defaults.initial_text);

        let use_theme_background = file
            .use_theme_background
            .unwrap_or(defaults.use_theme_background);

        let logging = LoggingConfig::from_file(file.logging);

        Self {
            max_length,
            initial_text,
            theme,
            use_theme_background,
            logging,
        }
    }

    /// A zero limit makes every ratio meaningless; fall back to the default
    pub fn validated_max_length(max_length: usize) -> usize {
        if max_length == 0 {
            eprintln!(
                "Warning: max_length must be positive, using {}",
                DEFAULT_MAX_LENGTH
            );
            DEFAULT_MAX_LENGTH
        } else {
            max_length
        }
    }
}
