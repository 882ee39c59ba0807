// TUI module - Terminal User Interface
//
// This module manages the terminal UI using ratatui. It handles:
// - Terminal initialization and cleanup
// - Event loop (keyboard input, bracketed paste, timer ticks)
// - Rendering the UI

pub mod app;
pub mod components;
pub mod input;
pub mod ui;

use crate::config::Config;
use crate::counter::CursorMove;
use crate::logging::LogBuffer;
use anyhow::{Context, Result};
use app::{App, Focus};
use crossterm::{
    event::{
        self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;

/// Interval between timer ticks (pulse, labels, toasts, paste correction)
const TICK_INTERVAL: Duration = Duration::from_millis(50);

/// Run the TUI
///
/// Sets up the terminal, runs the event loop, and restores the terminal
/// when done, even if the loop failed.
pub async fn run_tui(config: Config, log_buffer: LogBuffer) -> Result<()> {
    // Set up terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)
        .context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let mut app = App::with_config(&config, log_buffer);
    tracing::info!(
        "Counter ready (limit {}, {} chars)",
        config.max_length,
        app.widget.metrics().current_length
    );

    // Run the event loop
    let result = run_event_loop(&mut terminal, &mut app).await;
    app.teardown();

    // Restore terminal
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableBracketedPaste
    )
    .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

/// Main event loop
///
/// Waits on terminal input and the tick interval with tokio::select!,
/// whichever comes first. Timers are advanced before every draw so the
/// frame always reflects their current state.
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    let mut tick_interval = tokio::time::interval(TICK_INTERVAL);

    loop {
        app.tick();

        terminal
            .draw(|f| ui::draw(f, app))
            .context("Failed to draw terminal")?;

        tokio::select! {
            // Keyboard input and pasted text
            _ = async {
                if event::poll(Duration::from_millis(10)).unwrap_or(false) {
                    match event::read() {
                        Ok(Event::Key(key_event)) => handle_key_event(app, key_event),
                        Ok(Event::Paste(text)) => app.paste(&text),
                        Ok(_) => {}
                        Err(e) => tracing::warn!("Failed to read terminal event: {}", e),
                    }
                }
            } => {}

            // Periodic tick for timers and redraws
            _ = tick_interval.tick() => {}
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Handle keyboard input
/// Layered dispatch: Global → Field (typing) → Controls
fn handle_key_event(app: &mut App, key_event: KeyEvent) {
    if key_event.kind == KeyEventKind::Release {
        app.handle_key_release(key_event.code);
        return;
    }

    // Layer 1: Global keys (work regardless of focus)
    if handle_global_keys(app, &key_event) {
        return;
    }

    // Layer 2: The text field takes everything it can type
    if app.focus == Focus::Field {
        handle_field_keys(app, &key_event);
        return;
    }

    if key_event.kind != KeyEventKind::Press {
        return;
    }

    // Layer 3: Control navigation (use InputHandler for debounce)
    let key = key_event.code;
    match key {
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            if app.handle_key_press(key) {
                app.should_quit = true;
            }
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            if app.handle_key_press(key) {
                if app.focus.is_control() {
                    app.activate_focused();
                } else {
                    app.set_focus(Focus::Field);
                }
            }
        }
        KeyCode::Esc => {
            if app.handle_key_press(key) {
                app.set_focus(Focus::None);
            }
        }
        KeyCode::Right => {
            if app.handle_key_press(key) {
                app.focus_next();
            }
        }
        KeyCode::Left => {
            if app.handle_key_press(key) {
                app.focus_prev();
            }
        }
        _ => {}
    }
}

/// Handle global keys - returns true if handled
/// Global keys work the same regardless of focus
fn handle_global_keys(app: &mut App, key_event: &KeyEvent) -> bool {
    if key_event.kind != KeyEventKind::Press {
        return false;
    }

    let key = key_event.code;
    let ctrl = key_event.modifiers.contains(KeyModifiers::CONTROL);

    match key {
        KeyCode::Char('c') | KeyCode::Char('q') if ctrl => {
            app.should_quit = true;
            true
        }
        KeyCode::Char('l') if ctrl => {
            if app.handle_key_press(key) {
                app.clear();
            }
            true
        }
        KeyCode::Char('y') if ctrl => {
            if app.handle_key_press(key) {
                app.copy();
            }
            true
        }
        KeyCode::Tab => {
            if app.handle_key_press(key) {
                if key_event.modifiers.contains(KeyModifiers::SHIFT) {
                    app.focus_prev();
                } else {
                    app.focus_next();
                }
            }
            true
        }
        KeyCode::BackTab => {
            if app.handle_key_press(key) {
                app.focus_prev();
            }
            true
        }
        _ => false,
    }
}

/// Editing keys while the field has focus
///
/// These bypass the InputHandler: typing and cursor keys repeat freely.
fn handle_field_keys(app: &mut App, key_event: &KeyEvent) {
    if key_event.code == KeyCode::Esc {
        app.set_focus(Focus::None);
        return;
    }

    let widget = &mut app.widget;
    match key_event.code {
        KeyCode::Char(c)
            if !key_event
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            widget.insert_char(c);
        }
        KeyCode::Enter => {
            widget.insert_char('\n');
        }
        KeyCode::Backspace => {
            widget.backspace();
        }
        KeyCode::Delete => {
            widget.delete();
        }
        KeyCode::Left => widget.move_cursor(CursorMove::Left),
        KeyCode::Right => widget.move_cursor(CursorMove::Right),
        KeyCode::Home => widget.move_cursor(CursorMove::Home),
        KeyCode::End => widget.move_cursor(CursorMove::End),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::counter::LabelState;
    use app::tests::test_app;

    fn press(app: &mut App, code: KeyCode) {
        press_with(app, code, KeyModifiers::NONE);
    }

    fn press_with(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
        handle_key_event(app, KeyEvent::new(code, modifiers));
        let mut release = KeyEvent::new(code, modifiers);
        release.kind = KeyEventKind::Release;
        handle_key_event(app, release);
    }

    fn type_str(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_typing_updates_counter() {
        let (mut app, _) = test_app(10, "");
        type_str(&mut app, "Hello");

        assert_eq!(app.widget.text(), "Hello");
        assert_eq!(app.widget.display().count_text, "5");
        assert_eq!(app.widget.display().remaining_text, "5");
    }

    #[test]
    fn test_typing_stops_at_limit() {
        let (mut app, _) = test_app(3, "");
        type_str(&mut app, "abcdef");

        assert_eq!(app.widget.text(), "abc");
    }

    #[test]
    fn test_q_types_into_field_but_quits_elsewhere() {
        let (mut app, _) = test_app(10, "");
        press(&mut app, KeyCode::Char('q'));
        assert_eq!(app.widget.text(), "q");
        assert!(!app.should_quit);

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.focus, Focus::None);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_ctrl_c_quits_from_field() {
        let (mut app, _) = test_app(10, "");
        press_with(&mut app, KeyCode::Char('c'), KeyModifiers::CONTROL);

        assert!(app.should_quit);
        assert_eq!(app.widget.text(), "");
    }

    #[test]
    fn test_tab_cycles_focus() {
        let (mut app, _) = test_app(10, "");
        assert_eq!(app.focus, Focus::Field);

        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focus, Focus::Clear);
        assert!(!app.widget.has_focus());

        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focus, Focus::Copy);
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.focus, Focus::Clear);
        press(&mut app, KeyCode::Left);
        assert_eq!(app.focus, Focus::Field);
        assert!(app.widget.has_focus());
    }

    #[test]
    fn test_enter_on_clear_control() {
        let (mut app, _) = test_app(10, "Hello");
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.widget.text(), "");
        assert_eq!(app.focus, Focus::Field);
        assert_eq!(app.widget.clear_label().state(), LabelState::Confirmation);
    }

    #[test]
    fn test_space_on_copy_control() {
        let (mut app, clipboard) = test_app(10, "Hello");
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Char(' '));

        assert_eq!(clipboard.0.lock().unwrap().writes, vec!["Hello".to_string()]);
        assert_eq!(app.widget.copy_label().text(), "Copied!");
        assert_eq!(app.widget.text(), "Hello");
    }

    #[test]
    fn test_ctrl_shortcuts() {
        let (mut app, clipboard) = test_app(10, "Hi");
        press_with(&mut app, KeyCode::Char('y'), KeyModifiers::CONTROL);
        assert_eq!(clipboard.0.lock().unwrap().writes.len(), 1);

        press_with(&mut app, KeyCode::Char('l'), KeyModifiers::CONTROL);
        assert_eq!(app.widget.text(), "");
    }

    #[test]
    fn test_editing_keys() {
        let (mut app, _) = test_app(10, "abc");
        press(&mut app, KeyCode::Left);
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.widget.text(), "ac");

        press(&mut app, KeyCode::Home);
        press(&mut app, KeyCode::Delete);
        assert_eq!(app.widget.text(), "c");

        press(&mut app, KeyCode::End);
        press(&mut app, KeyCode::Enter);
        type_str(&mut app, "d");
        assert_eq!(app.widget.text(), "c\nd");
        assert_eq!(app.widget.display().count_text, "3");
    }

    #[test]
    fn test_paste_ignored_without_field_focus() {
        let (mut app, _) = test_app(10, "");
        press(&mut app, KeyCode::Esc);
        app.paste("Hello");
        assert_eq!(app.widget.text(), "");

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.focus, Focus::Field);
        app.paste("Hello");
        assert_eq!(app.widget.text(), "Hello");
    }
}
