// Progress bar component
//
// Renders usage as a gradient fill with the rounded percentage centered on
// top. The fill is capped at the bar's width even when the buffer overflows;
// the label still shows the real percentage.

use crate::theme::Gradient;
use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Number of filled cells for `fill_percent` (0..=100) of `width`
pub fn filled_cells(fill_percent: f64, width: u16) -> u16 {
    ((width as f64) * fill_percent / 100.0).round() as u16
}

/// Build the bar as one styled span per cell
fn bar_line(
    width: u16,
    filled: u16,
    label: &str,
    gradient: Gradient,
    track: Color,
    text: Color,
) -> Line<'static> {
    let label_width = label.width() as u16;
    let label_start = width.saturating_sub(label_width) / 2;
    let mut label_chars = label.chars();

    let spans: Vec<Span<'static>> = (0..width)
        .map(|i| {
            let ch = if i >= label_start && i < label_start + label_width {
                label_chars.next().unwrap_or(' ')
            } else {
                ' '
            };

            let bg = if i < filled {
                // Gradient spans the filled part only
                let t = if filled > 1 {
                    i as f64 / (filled - 1) as f64
                } else {
                    0.0
                };
                gradient.at(t)
            } else {
                track
            };

            Span::styled(
                ch.to_string(),
                Style::default().bg(bg).fg(text).add_modifier(Modifier::BOLD),
            )
        })
        .collect();

    Line::from(spans)
}

/// Render the usage progress bar
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    if area.width < 2 || area.height == 0 {
        return;
    }

    let display = app.widget.display();
    let theme = &app.theme;

    // One cell of padding on each side
    let bar_area = Rect::new(area.x + 1, area.y, area.width - 2, 1);
    let filled = filled_cells(app.widget.metrics().fill_percent(), bar_area.width);
    let gradient = theme.palette(display.visual.palette);

    let line = bar_line(
        bar_area.width,
        filled,
        &display.progress_label,
        gradient,
        theme.muted,
        theme.notify_text,
    );

    f.render_widget(Paragraph::new(line), bar_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::counter::DerivedMetrics;

    #[test]
    fn test_filled_cells() {
        assert_eq!(filled_cells(0.0, 40), 0);
        assert_eq!(filled_cells(50.0, 40), 20);
        assert_eq!(filled_cells(100.0, 40), 40);
    }

    #[test]
    fn test_overflowing_text_fills_exactly_the_bar() {
        let metrics = DerivedMetrics::compute(15, 10);
        assert_eq!(filled_cells(metrics.fill_percent(), 40), 40);
    }

    #[test]
    fn test_bar_line_centers_label() {
        let gradient = Gradient::new(Color::Rgb(0, 0, 0), Color::Rgb(100, 100, 100));
        let line = bar_line(10, 5, "50%", gradient, Color::Gray, Color::White);

        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, "   50%    ");

        assert_eq!(line.spans[0].style.bg, Some(Color::Rgb(0, 0, 0)));
        assert_eq!(line.spans[4].style.bg, Some(Color::Rgb(100, 100, 100)));
        assert_eq!(line.spans[5].style.bg, Some(Color::Gray));
    }
}
