//! Config serialization to TOML
//!
//! Single source of truth for config file format.

use super::Config;

/// Quote a string as a TOML basic string
fn toml_string(s: &str) -> String {
    toml::Value::String(s.to_string()).to_string()
}

impl Config {
    /// Serialize the configuration as a commented config file
    pub fn to_toml(&self) -> String {
        format!(
            r#"# charcount configuration

# Maximum number of characters the field accepts
max_length = {max_length}

# Text the field starts with
initial_text = {initial_text}

# Theme: Classic, Terminal
theme = {theme}

# Use theme's background color (true) or terminal's default (false)
use_theme_background = {use_bg}

# Logging configuration (RUST_LOG env var overrides)
[logging]
level = {log_level}
# File logging (in addition to the TUI buffer)
file_enabled = {log_file_enabled}
file_dir = {log_file_dir}
file_rotation = "{log_file_rotation}"  # hourly, daily, never
file_prefix = {log_file_prefix}
"#,
            max_length = self.max_length,
            initial_text = toml_string(&self.initial_text),
            theme = toml_string(&self.theme),
            use_bg = self.use_theme_background,
            log_level = toml_string(&self.logging.level),
            log_file_enabled = self.logging.file_enabled,
            log_file_dir = toml_string(&self.logging.file_dir.display().to_string()),
            log_file_rotation = self.logging.file_rotation.as_str(),
            log_file_prefix = toml_string(&self.logging.file_prefix),
        )
    }
}
