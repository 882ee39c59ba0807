// Status bar component
//
// Key hints on the left; the most recent warning or error from the log
// buffer on the right, so failures stay visible after their toast leaves.

use crate::logging::{LogEntry, LogLevel};
use crate::tui::app::{App, Focus};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::Line,
    widgets::Paragraph,
    Frame,
};

/// Key hints for the current focus
fn hints(focus: Focus) -> &'static str {
    match focus {
        Focus::Field => " Tab focus │ ^L clear │ ^Y copy │ Esc blur │ ^Q quit",
        Focus::Clear | Focus::Copy => " Enter press │ ←/→ move │ Tab focus │ q quit",
        Focus::None => " Tab focus │ ^L clear │ ^Y copy │ q quit",
    }
}

/// One-line summary of a captured log entry, e.g.
/// `12:30:05 ERROR counter::widget: Failed to copy text`
fn problem_line(entry: &LogEntry) -> String {
    let target = entry
        .target
        .strip_prefix("charcount::")
        .unwrap_or(&entry.target);
    format!(
        "{} {} {}: {} ",
        entry.timestamp.format("%H:%M:%S"),
        entry.level.as_str(),
        target,
        entry.message
    )
}

/// Render the status bar
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    let left = Paragraph::new(hints(app.focus)).style(Style::default().fg(app.theme.muted));
    f.render_widget(left, chunks[0]);

    if let Some(entry) = app.log_buffer.latest_at_least(LogLevel::Warn) {
        let color = match entry.level {
            LogLevel::Error => app.theme.danger.start,
            _ => app.theme.warning.start,
        };
        let line = Line::from(problem_line(&entry))
            .right_aligned()
            .style(Style::default().fg(color));
        f.render_widget(Paragraph::new(line), chunks[1]);
    }
}
