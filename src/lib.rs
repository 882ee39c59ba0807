// charcount - live character counter for a bounded text field
//
// A terminal text area that shows how many characters have been typed, how
// many remain, and a progress bar, with actions to clear or copy the text.
//
// Architecture:
// - Counter (pure): text buffer, metrics, visual state, timers, notifications
// - Clipboard: outbound-only writes through a swappable trait
// - TUI (ratatui): renders the widget's display regions and routes input
// - Config/logging: the usual env > file > defaults layering and tracing setup
//
// The counter module never touches the terminal, so the widget can be driven
// headlessly from tests.

pub mod cli;
pub mod clipboard;
pub mod config;
pub mod counter;
pub mod logging;
pub mod theme;
pub mod tui;

pub use clipboard::{ClipboardWriter, SystemClipboard};
pub use counter::{CounterWidget, DerivedMetrics, NotificationKind, VisualState};
