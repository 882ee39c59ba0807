//! Clipboard access for the copy action
//!
//! Uses `arboard` crate for cross-platform support (Windows, macOS, Linux).
//! The clipboard is created fresh each time to avoid holding resources.
//!
//! The widget only talks to [`ClipboardWriter`], so tests can swap in a
//! recorder or a clipboard that always fails.

use anyhow::{Context, Result};
use arboard::Clipboard;

/// Outbound-only clipboard
pub trait ClipboardWriter {
    /// Replace the clipboard contents with `text`
    fn write_text(&mut self, text: &str) -> Result<()>;
}

/// The host system clipboard
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

impl ClipboardWriter for SystemClipboard {
    /// Common failure cases: no display server (headless Linux), permission denied.
    fn write_text(&mut self, text: &str) -> Result<()> {
        copy_to_clipboard(text)
    }
}

/// Copy text to the system clipboard
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard = Clipboard::new().context("Failed to access clipboard")?;
    clipboard
        .set_text(text)
        .context("Failed to set clipboard text")?;
    Ok(())
}

/// Test doubles shared by the counter and TUI tests
#[cfg(test)]
pub(crate) mod testing {
    use super::ClipboardWriter;
    use anyhow::{bail, Result};

    /// Records every write
    #[derive(Debug, Default)]
    pub struct RecordingClipboard {
        pub writes: Vec<String>,
    }

    impl ClipboardWriter for RecordingClipboard {
        fn write_text(&mut self, text: &str) -> Result<()> {
            self.writes.push(text.to_string());
            Ok(())
        }
    }

    /// Fails every write, counting the attempts
    #[derive(Debug, Default)]
    pub struct DeniedClipboard {
        pub attempts: usize,
    }

    impl ClipboardWriter for DeniedClipboard {
        fn write_text(&mut self, _text: &str) -> Result<()> {
            self.attempts += 1;
            bail!("clipboard access denied")
        }
    }
}
