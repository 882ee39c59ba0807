// Counter row component
//
// Count and remaining displays. The count pulses (bold + highlight) right
// after an update; the remaining count takes the usage palette's color.

use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the count and remaining displays
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let display = app.widget.display();
    let theme = &app.theme;

    let count_style = if display.pulse {
        Style::default()
            .fg(theme.highlight)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.foreground)
    };

    let remaining_color = theme.palette(display.visual.palette).start;

    let line = Line::from(vec![
        Span::styled(" Characters: ", Style::default().fg(theme.muted)),
        Span::styled(display.count_text.clone(), count_style),
        Span::styled("  │  ", Style::default().fg(theme.muted)),
        Span::styled("Remaining: ", Style::default().fg(theme.muted)),
        Span::styled(
            display.remaining_text.clone(),
            Style::default()
                .fg(remaining_color)
                .add_modifier(Modifier::BOLD),
        ),
    ]);

    f.render_widget(Paragraph::new(line), area);
}
