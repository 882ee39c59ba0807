// Controls component
//
// The clear and copy buttons. Labels come from the widget so the timed
// confirmation text shows up here without any extra state.

use crate::counter::{ActionLabel, LabelState};
use crate::theme::Theme;
use crate::tui::app::{App, Focus};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

fn render_button(f: &mut Frame, area: Rect, label: &ActionLabel, focused: bool, theme: &Theme) {
    let border_color = if focused {
        theme.highlight
    } else {
        theme.border
    };

    let mut text_style = match label.state() {
        LabelState::Default => Style::default().fg(theme.foreground),
        LabelState::Confirmation => Style::default().fg(theme.notify_success),
    };
    if focused {
        text_style = text_style.add_modifier(Modifier::BOLD);
    }

    let button = Paragraph::new(label.text())
        .alignment(Alignment::Center)
        .style(text_style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(theme.border_type)
                .border_style(Style::default().fg(border_color)),
        );

    f.render_widget(button, area);
}

/// Render the clear and copy controls side by side
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(16),
            Constraint::Length(1),
            Constraint::Length(16),
            Constraint::Min(0),
        ])
        .split(area);

    render_button(
        f,
        chunks[0],
        app.widget.clear_label(),
        app.focus == Focus::Clear,
        &app.theme,
    );
    render_button(
        f,
        chunks[2],
        app.widget.copy_label(),
        app.focus == Focus::Copy,
        &app.theme,
    );
}
