// Text area component
//
// The editable field. Its border color is the widget's border state; the
// view scrolls so the cursor stays visible.

use crate::tui::app::{App, Focus};
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthChar;

const PLACEHOLDER: &str = "Start typing...";

/// Display column (in cells) of the cursor on its line
fn cursor_column(text: &str, line: usize, col: usize) -> usize {
    text.split('\n')
        .nth(line)
        .unwrap_or("")
        .chars()
        .take(col)
        .map(|c| c.width().unwrap_or(0))
        .sum()
}

/// Render the text field
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let widget = &app.widget;
    let theme = &app.theme;
    let border_color = theme.border_color(widget.display().visual.border);

    let block = Block::default()
        .title(" Text ")
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);

    let text = widget.text();
    let (line, col) = widget.buffer().cursor_line_col();
    let cursor_x = cursor_column(text, line, col);

    // Keep the cursor inside the viewport
    let scroll_y = line.saturating_sub(inner.height.saturating_sub(1) as usize);
    let scroll_x = cursor_x.saturating_sub(inner.width.saturating_sub(1) as usize);

    let paragraph = if text.is_empty() {
        Paragraph::new(PLACEHOLDER).style(Style::default().fg(theme.muted))
    } else {
        Paragraph::new(text)
            .style(Style::default().fg(theme.foreground))
            .scroll((scroll_y as u16, scroll_x as u16))
    };

    f.render_widget(paragraph.block(block), area);

    if app.focus == Focus::Field && inner.width > 0 && inner.height > 0 {
        f.set_cursor_position((
            inner.x + (cursor_x - scroll_x) as u16,
            inner.y + (line - scroll_y) as u16,
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_column_uses_display_width() {
        assert_eq!(cursor_column("abc", 0, 2), 2);
        assert_eq!(cursor_column("日本", 0, 2), 4);
        assert_eq!(cursor_column("one\ntwo", 1, 1), 1);
        assert_eq!(cursor_column("", 3, 0), 0);
    }
}
