// TUI application state
//
// Holds the counter widget plus everything around it that only the terminal
// front end cares about: which element has focus, the theme, the clipboard
// and the captured logs.

use super::input::InputHandler;
use crate::clipboard::{ClipboardWriter, SystemClipboard};
use crate::config::Config;
use crate::counter::{CopyOutcome, CounterWidget};
use crate::logging::LogBuffer;
use crate::theme::{Theme, ThemeConfig};
use crossterm::event::KeyCode;

/// Focusable elements, in Tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Nothing focused (the field is blurred)
    None,
    /// The text field
    #[default]
    Field,
    /// The clear control
    Clear,
    /// The copy control
    Copy,
}

impl Focus {
    /// Next element (Tab)
    pub fn next(self) -> Self {
        match self {
            Focus::None => Focus::Field,
            Focus::Field => Focus::Clear,
            Focus::Clear => Focus::Copy,
            Focus::Copy => Focus::Field,
        }
    }

    /// Previous element (Shift+Tab)
    pub fn prev(self) -> Self {
        match self {
            Focus::None => Focus::Copy,
            Focus::Field => Focus::Copy,
            Focus::Clear => Focus::Field,
            Focus::Copy => Focus::Clear,
        }
    }

    pub fn is_control(self) -> bool {
        matches!(self, Focus::Clear | Focus::Copy)
    }
}

/// Main application state for the TUI
pub struct App {
    /// The counter itself
    pub widget: CounterWidget,

    /// Current color theme
    pub theme: Theme,

    /// Which element receives keyboard input
    pub focus: Focus,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Log buffer for the status bar
    pub log_buffer: LogBuffer,

    /// Where copied text goes
    clipboard: Box<dyn ClipboardWriter>,

    /// Input handler for flexible key behavior
    input_handler: InputHandler,
}

impl App {
    /// Create app state from config, writing to the system clipboard
    pub fn with_config(config: &Config, log_buffer: LogBuffer) -> Self {
        Self::with_clipboard(config, log_buffer, Box::new(SystemClipboard))
    }

    pub fn with_clipboard(
        config: &Config,
        log_buffer: LogBuffer,
        clipboard: Box<dyn ClipboardWriter>,
    ) -> Self {
        let theme_config = ThemeConfig {
            use_theme_background: config.use_theme_background,
        };

        let mut app = Self {
            widget: CounterWidget::new(config.max_length, config.initial_text.clone()),
            theme: Theme::by_name_with_config(&config.theme, &theme_config),
            focus: Focus::None,
            should_quit: false,
            log_buffer,
            clipboard,
            input_handler: InputHandler::default(),
        };
        app.set_focus(Focus::default());
        app
    }

    /// Move focus, keeping the widget's focus flag in sync
    pub fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
        if focus == Focus::Field {
            self.widget.focus();
        } else {
            self.widget.blur();
        }
    }

    pub fn focus_next(&mut self) {
        self.set_focus(self.focus.next());
    }

    pub fn focus_prev(&mut self) {
        self.set_focus(self.focus.prev());
    }

    /// Clear the field; focus returns to it
    pub fn clear(&mut self) {
        self.widget.clear_text();
        self.focus = Focus::Field;
    }

    /// Copy the field to the clipboard
    pub fn copy(&mut self) -> CopyOutcome {
        self.widget.copy_text(self.clipboard.as_mut())
    }

    /// Paste into the field; ignored unless the field has focus
    pub fn paste(&mut self, text: &str) {
        if self.focus != Focus::Field {
            tracing::debug!("Ignoring paste while the text field is not focused");
            return;
        }
        self.widget.handle_paste(text);
    }

    /// Press the focused control
    pub fn activate_focused(&mut self) {
        match self.focus {
            Focus::Clear => self.clear(),
            Focus::Copy => {
                self.copy();
            }
            Focus::Field | Focus::None => {}
        }
    }

    /// Advance timers (paste correction, pulse, labels, notifications)
    pub fn tick(&mut self) {
        self.widget.tick();
    }

    /// Cancel outstanding timers before exit
    pub fn teardown(&mut self) {
        self.widget.teardown();
    }

    /// Handle a key press - returns true if the action should be triggered
    /// Uses the configured behavior for each key (state-change or repeatable)
    pub fn handle_key_press(&mut self, key: KeyCode) -> bool {
        self.input_handler.handle_key_press(key)
    }

    /// Handle a key release
    pub fn handle_key_release(&mut self, key: KeyCode) {
        self.input_handler.handle_key_release(key);
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::clipboard::testing::RecordingClipboard;
    use crate::counter::BorderState;
    use anyhow::Result;
    use std::sync::{Arc, Mutex};

    /// Clipboard that shares its record with the test
    #[derive(Clone, Default)]
    pub(crate) struct SharedClipboard(pub Arc<Mutex<RecordingClipboard>>);

    impl ClipboardWriter for SharedClipboard {
        fn write_text(&mut self, text: &str) -> Result<()> {
            self.0.lock().unwrap().write_text(text)
        }
    }

    pub(crate) fn test_app(max_length: usize, text: &str) -> (App, SharedClipboard) {
        let config = Config {
            max_length,
            initial_text: text.to_string(),
            ..Config::default()
        };
        let clipboard = SharedClipboard::default();
        let app = App::with_clipboard(&config, LogBuffer::new(), Box::new(clipboard.clone()));
        (app, clipboard)
    }

    #[test]
    fn test_starts_with_field_focused() {
        let (app, _) = test_app(10, "");
        assert_eq!(app.focus, Focus::Field);
        assert!(app.widget.has_focus());
        assert_eq!(app.widget.display().visual.border, BorderState::Focused);
    }

    #[test]
    fn test_focus_cycle() {
        let (mut app, _) = test_app(10, "");
        app.focus_next();
        assert_eq!(app.focus, Focus::Clear);
        assert!(!app.widget.has_focus());
        app.focus_next();
        assert_eq!(app.focus, Focus::Copy);
        app.focus_next();
        assert_eq!(app.focus, Focus::Field);
        app.focus_prev();
        assert_eq!(app.focus, Focus::Copy);
    }

    #[test]
    fn test_clear_returns_focus_to_field() {
        let (mut app, _) = test_app(10, "hello");
        app.set_focus(Focus::Clear);
        app.activate_focused();
        assert_eq!(app.focus, Focus::Field);
        assert!(app.widget.has_focus());
        assert_eq!(app.widget.text(), "");
    }

    #[test]
    fn test_copy_control_writes_clipboard() {
        let (mut app, clipboard) = test_app(10, "hello");
        app.set_focus(Focus::Copy);
        app.activate_focused();
        assert_eq!(clipboard.0.lock().unwrap().writes, vec!["hello".to_string()]);
    }

    #[test]
    fn test_paste_ignored_when_field_blurred() {
        let (mut app, _) = test_app(10, "");
        app.set_focus(Focus::None);
        app.paste("ignored");
        assert_eq!(app.widget.text(), "");

        app.set_focus(Focus::Field);
        app.paste("kept");
        assert_eq!(app.widget.text(), "kept");
    }

    #[test]
    fn test_config_theme_applied() {
        let config = Config {
            theme: "Terminal".to_string(),
            ..Config::default()
        };
        let app = App::with_clipboard(
            &config,
            LogBuffer::new(),
            Box::new(RecordingClipboard::default()),
        );
        assert_eq!(app.theme.name, "Terminal");
        assert_eq!(app.widget.max_length(), config.max_length);
    }
}
