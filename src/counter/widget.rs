//! The counter widget
//!
//! Owns the text buffer, the display regions it writes to and every timer
//! that animates them. The widget never draws anything itself: the TUI reads
//! [`DisplayRegions`] each frame, and tests read the same struct headlessly.
//!
//! Every time-dependent operation has an `*_at(now)` twin. The plain versions
//! use `Instant::now()`; tests drive the clock explicitly.

use super::buffer::TextBuffer;
use super::label::ActionLabel;
use super::metrics::DerivedMetrics;
use super::notification::{Notification, NotificationKind, Notifications};
use super::timer::Timer;
use super::visual::{visual_state, VisualState};
use crate::clipboard::ClipboardWriter;
use std::borrow::Cow;
use std::time::{Duration, Instant};

/// How long the count display pulses after an update
pub const PULSE_DURATION: Duration = Duration::from_millis(300);

pub const MSG_NOTHING_TO_COPY: &str = "No text to copy!";
pub const MSG_COPIED: &str = "Text copied to clipboard!";
pub const MSG_COPY_FAILED: &str = "Failed to copy text";

/// Everything the widget shows, as last written by `update_counter`
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DisplayRegions {
    /// Count display: characters typed
    pub count_text: String,
    /// Remaining display: characters left (may be negative)
    pub remaining_text: String,
    /// Progress fill width in percent, as computed (not capped)
    pub progress_width: f64,
    /// Progress label, e.g. "50%"
    pub progress_label: String,
    /// Count display is pulsing
    pub pulse: bool,
    /// Palette and border state
    pub visual: VisualState,
}

/// Cursor movements understood by the text field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorMove {
    Left,
    Right,
    Home,
    End,
}

/// Result of a copy action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    /// Buffer was blank; the clipboard was not touched
    NothingToCopy,
    Copied,
    Failed,
}

/// A bounded text field with live usage feedback
#[derive(Debug, Clone)]
pub struct CounterWidget {
    buffer: TextBuffer,
    max_length: usize,
    has_focus: bool,
    metrics: DerivedMetrics,
    display: DisplayRegions,
    pulse: Timer,
    /// Zero-delay deferred paste correction
    paste_fixup: Timer,
    clear_label: ActionLabel,
    copy_label: ActionLabel,
    notifications: Notifications,
}

impl CounterWidget {
    /// Create the widget and render metrics for any pre-populated text
    pub fn new(max_length: usize, initial_text: impl Into<String>) -> Self {
        Self::new_at(max_length, initial_text, Instant::now())
    }

    pub fn new_at(max_length: usize, initial_text: impl Into<String>, now: Instant) -> Self {
        let buffer = TextBuffer::new(initial_text);
        let metrics = DerivedMetrics::for_text(buffer.as_str(), max_length);

        let mut widget = Self {
            buffer,
            max_length,
            has_focus: false,
            metrics,
            display: DisplayRegions::default(),
            pulse: Timer::new(PULSE_DURATION),
            paste_fixup: Timer::new(Duration::ZERO),
            clear_label: ActionLabel::clear(),
            copy_label: ActionLabel::copy(),
            notifications: Notifications::new(),
        };
        widget.update_counter_at(now);
        widget
    }

    // ─────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────

    pub fn text(&self) -> &str {
        self.buffer.as_str()
    }

    pub fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }

    pub fn has_focus(&self) -> bool {
        self.has_focus
    }

    pub fn metrics(&self) -> &DerivedMetrics {
        &self.metrics
    }

    pub fn display(&self) -> &DisplayRegions {
        &self.display
    }

    pub fn clear_label(&self) -> &ActionLabel {
        &self.clear_label
    }

    pub fn copy_label(&self) -> &ActionLabel {
        &self.copy_label
    }

    pub fn notifications(&self) -> &Notifications {
        &self.notifications
    }

    /// Whether a paste correction is waiting for the next tick
    #[cfg(test)]
    pub(crate) fn has_pending_paste(&self) -> bool {
        self.paste_fixup.is_armed()
    }

    // ─────────────────────────────────────────────────────────────────────
    // Rendering
    // ─────────────────────────────────────────────────────────────────────

    /// Recompute metrics and rewrite every display region
    pub fn update_counter(&mut self) {
        self.update_counter_at(Instant::now());
    }

    pub fn update_counter_at(&mut self, now: Instant) {
        let metrics = DerivedMetrics::for_text(self.buffer.as_str(), self.max_length);

        self.display.count_text = metrics.current_length.to_string();
        self.display.remaining_text = metrics.remaining.to_string();
        self.display.progress_width = metrics.percentage;
        self.display.progress_label = format!("{}%", metrics.rounded_percentage());

        // Pulse the count display
        self.display.pulse = true;
        self.pulse.arm(now);

        self.display.visual = visual_state(&metrics, self.has_focus);
        self.metrics = metrics;
    }

    /// Recompute only the visual state (focus changes)
    fn refresh_visual(&mut self) {
        self.display.visual = visual_state(&self.metrics, self.has_focus);
    }

    // ─────────────────────────────────────────────────────────────────────
    // Focus
    // ─────────────────────────────────────────────────────────────────────

    pub fn focus(&mut self) {
        self.has_focus = true;
        self.refresh_visual();
    }

    pub fn blur(&mut self) {
        self.has_focus = false;
        self.refresh_visual();
    }

    // ─────────────────────────────────────────────────────────────────────
    // Editing
    // ─────────────────────────────────────────────────────────────────────

    /// Type a character; rejected once the buffer is full
    pub fn insert_char(&mut self, c: char) -> bool {
        self.insert_char_at(c, Instant::now())
    }

    pub fn insert_char_at(&mut self, c: char, now: Instant) -> bool {
        let inserted = self.buffer.insert_char(c, Some(self.max_length));
        self.update_counter_at(now);
        inserted
    }

    pub fn backspace(&mut self) -> bool {
        self.backspace_at(Instant::now())
    }

    pub fn backspace_at(&mut self, now: Instant) -> bool {
        let removed = self.buffer.backspace();
        self.update_counter_at(now);
        removed
    }

    pub fn delete(&mut self) -> bool {
        self.delete_at(Instant::now())
    }

    pub fn delete_at(&mut self, now: Instant) -> bool {
        let removed = self.buffer.delete();
        self.update_counter_at(now);
        removed
    }

    pub fn move_cursor(&mut self, movement: CursorMove) {
        self.move_cursor_at(movement, Instant::now());
    }

    /// Cursor keys still refresh the counter, same as any other key release
    pub fn move_cursor_at(&mut self, movement: CursorMove, now: Instant) {
        match movement {
            CursorMove::Left => self.buffer.move_left(),
            CursorMove::Right => self.buffer.move_right(),
            CursorMove::Home => self.buffer.move_home(),
            CursorMove::End => self.buffer.move_end(),
        }
        self.update_counter_at(now);
    }

    /// Replace the text programmatically, without any length limit
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.set_text_at(text, Instant::now());
    }

    pub fn set_text_at(&mut self, text: impl Into<String>, now: Instant) {
        self.buffer.set(text);
        self.update_counter_at(now);
    }

    /// Paste `text` at the cursor
    ///
    /// The text lands in full first; trimming to the limit happens on the
    /// next tick. Terminals deliver pasted line breaks as `\r` or `\r\n`;
    /// both are stored as `\n`.
    pub fn handle_paste(&mut self, text: &str) {
        self.handle_paste_at(text, Instant::now());
    }

    pub fn handle_paste_at(&mut self, text: &str, now: Instant) {
        let text = normalize_line_breaks(text);
        self.buffer.insert_str(&text);
        self.update_counter_at(now);
        self.paste_fixup.arm(now);
    }

    fn correct_paste(&mut self, now: Instant) {
        let before = self.buffer.len();
        if self.buffer.truncate_chars(self.max_length) {
            tracing::debug!(
                "Paste exceeded limit: kept {} of {} characters",
                self.max_length,
                before
            );
        }
        self.update_counter_at(now);
    }

    // ─────────────────────────────────────────────────────────────────────
    // Actions
    // ─────────────────────────────────────────────────────────────────────

    /// Empty the field, give it focus and confirm on the clear control
    pub fn clear_text(&mut self) {
        self.clear_text_at(Instant::now());
    }

    pub fn clear_text_at(&mut self, now: Instant) {
        self.buffer.clear();
        self.has_focus = true;
        self.update_counter_at(now);
        self.clear_label.confirm(now);
        tracing::info!("Text cleared");
    }

    /// Copy the whole buffer to `clipboard`
    ///
    /// A blank buffer (after trimming) short-circuits with an error
    /// notification. A failed write is logged and reported, never retried.
    pub fn copy_text(&mut self, clipboard: &mut dyn ClipboardWriter) -> CopyOutcome {
        self.copy_text_at(clipboard, Instant::now())
    }

    pub fn copy_text_at(
        &mut self,
        clipboard: &mut dyn ClipboardWriter,
        now: Instant,
    ) -> CopyOutcome {
        if self.buffer.as_str().trim().is_empty() {
            self.show_notification_at(MSG_NOTHING_TO_COPY, NotificationKind::Error, now);
            return CopyOutcome::NothingToCopy;
        }

        match clipboard.write_text(self.buffer.as_str()) {
            Ok(()) => {
                tracing::info!("Copied {} characters to clipboard", self.metrics.current_length);
                self.show_notification_at(MSG_COPIED, NotificationKind::Success, now);
                self.copy_label.confirm(now);
                CopyOutcome::Copied
            }
            Err(e) => {
                tracing::error!("Failed to copy text: {:#}", e);
                self.show_notification_at(MSG_COPY_FAILED, NotificationKind::Error, now);
                CopyOutcome::Failed
            }
        }
    }

    /// Show a transient notification
    pub fn show_notification(&mut self, message: impl Into<String>, kind: NotificationKind) {
        self.show_notification_at(message, kind, Instant::now());
    }

    pub fn show_notification_at(
        &mut self,
        message: impl Into<String>,
        kind: NotificationKind,
        now: Instant,
    ) {
        let notification = Notification::new(message, kind, now);
        tracing::debug!(
            "Notification ({}): {}",
            notification.kind.as_str(),
            notification.message
        );
        self.notifications.push(notification);
    }

    // ─────────────────────────────────────────────────────────────────────
    // Timers
    // ─────────────────────────────────────────────────────────────────────

    /// Run every timer that is due
    ///
    /// The deferred paste correction goes first so it lands before any other
    /// scheduled work.
    pub fn tick(&mut self) {
        self.tick_at(Instant::now());
    }

    pub fn tick_at(&mut self, now: Instant) {
        if self.paste_fixup.fire(now) {
            self.correct_paste(now);
        }

        if self.pulse.fire(now) {
            self.display.pulse = false;
        }

        self.clear_label.tick(now);
        self.copy_label.tick(now);
        self.notifications.tick(now);
    }

    /// Cancel every outstanding timer and drop notifications
    pub fn teardown(&mut self) {
        self.paste_fixup.cancel();
        self.pulse.cancel();
        self.display.pulse = false;
        self.clear_label.reset();
        self.copy_label.reset();
        self.notifications.clear();
    }
}

/// Fold `\r\n` and lone `\r` into `\n`
fn normalize_line_breaks(text: &str) -> Cow<'_, str> {
    if text.contains('\r') {
        Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"))
    } else {
        Cow::Borrowed(text)
    }
}
