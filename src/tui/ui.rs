// UI rendering logic
//
// Every frame is drawn from scratch out of the app state. The layout is a
// single column; toasts are painted last so they sit above everything.

use super::app::App;
use super::components::{
    controls, counter_row, progress_bar, status_bar, text_area, title_bar, toast,
};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::Block,
    Frame,
};
use std::time::Instant;

/// Main UI render function - called on every frame
pub fn draw(f: &mut Frame, app: &App) {
    draw_at(f, app, Instant::now());
}

/// Render with an explicit clock for the toast animation
pub fn draw_at(f: &mut Frame, app: &App, now: Instant) {
    let area = f.area();

    // Themed background (Color::Reset when the theme background is off)
    f.render_widget(
        Block::default().style(
            Style::default()
                .bg(app.theme.background)
                .fg(app.theme.foreground),
        ),
        area,
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title bar
            Constraint::Min(5),    // Text area
            Constraint::Length(1), // Counter row
            Constraint::Length(1), // Progress bar
            Constraint::Length(3), // Controls
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    title_bar::render(f, chunks[0], app);
    text_area::render(f, chunks[1], app);
    counter_row::render(f, chunks[2], app);
    progress_bar::render(f, chunks[3], app);
    controls::render(f, chunks[4], app);
    status_bar::render(f, chunks[5], app);

    toast::render(f, area, app.widget.notifications().iter(), &app.theme, now);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::app::tests::test_app;
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};
    use std::time::Duration;

    fn buffer_text(buffer: &Buffer) -> String {
        let area = buffer.area;
        let mut out = String::new();
        for y in 0..area.height {
            for x in 0..area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    fn render_at(app: &App, now: Instant) -> String {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw_at(f, app, now)).unwrap();
        buffer_text(terminal.backend().buffer())
    }

    fn render(app: &App) -> String {
        render_at(app, Instant::now())
    }

    #[test]
    fn test_draw_shows_counts_and_percentage() {
        let (app, _) = test_app(10, "Hello");
        let screen = render(&app);

        assert!(screen.contains("Character Counter"));
        assert!(screen.contains("limit 10"));
        assert!(screen.contains("Hello"));
        assert!(screen.contains("Characters: 5"));
        assert!(screen.contains("Remaining: 5"));
        assert!(screen.contains("50%"));
        assert!(screen.contains("Clear Text"));
        assert!(screen.contains("Copy Text"));
    }

    #[test]
    fn test_draw_shows_placeholder_when_empty() {
        let (app, _) = test_app(280, "");
        let screen = render(&app);

        assert!(screen.contains("Start typing..."));
        assert!(screen.contains("Characters: 0"));
        assert!(screen.contains("0%"));
    }

    #[test]
    fn test_draw_shows_overflow_values() {
        let (mut app, _) = test_app(4, "");
        app.widget.set_text("abcdef");
        let screen = render(&app);

        assert!(screen.contains("Remaining: -2"));
        assert!(screen.contains("150%"));
    }

    #[test]
    fn test_draw_shows_confirmation_and_toast() {
        let (mut app, _) = test_app(280, "some text");
        app.clear();
        app.widget.insert_char('x');
        app.copy();

        // Toasts stay off-screen for their entry delay
        let screen = render(&app);
        assert!(screen.contains("Cleared!"));
        assert!(screen.contains("Copied!"));
        assert!(!screen.contains("Text copied to clipboard!"));

        let screen = render_at(&app, Instant::now() + Duration::from_millis(500));
        assert!(screen.contains("Text copied to clipboard!"));
    }

    #[test]
    fn test_draw_with_a_huge_toast_stack() {
        let (mut app, _) = test_app(10, "Hello");
        let t0 = Instant::now();
        for _ in 0..30_000 {
            app.widget
                .show_notification_at("again", crate::counter::NotificationKind::Info, t0);
        }
        let screen = render_at(&app, t0 + Duration::from_millis(500));
        assert!(screen.contains("again"));
    }

    #[test]
    fn test_draw_on_tiny_terminal_does_not_panic() {
        let (app, _) = test_app(10, "Hello");
        let backend = TestBackend::new(8, 4);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw(f, &app)).unwrap();
    }
}
