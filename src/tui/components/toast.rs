//! Toast notification component
//!
//! Renders the widget's notifications stacked in the top-right corner on top
//! of all other content. Each toast slides in from the right edge and slides
//! back out before it is dropped; the timing lives in
//! [`Notification::offset`](crate::counter::Notification::offset).

use crate::counter::Notification;
use crate::theme::Theme;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use std::time::Instant;
use unicode_width::UnicodeWidthStr;

/// Rows taken by one toast (text plus borders)
const TOAST_HEIGHT: u16 = 3;

/// Placement of the `index`th toast, or None when it is entirely offscreen
pub fn toast_rect(area: Rect, message: &str, index: usize, offset: f64) -> Option<Rect> {
    // Add 4 for padding and border
    let width = (message.width() as u16)
        .saturating_add(4)
        .min(area.width.saturating_sub(2));
    let rows = u16::try_from(index)
        .unwrap_or(u16::MAX)
        .saturating_mul(TOAST_HEIGHT);
    let y = area.y.saturating_add(1).saturating_add(rows);
    if width == 0 || y.saturating_add(TOAST_HEIGHT) > area.bottom() {
        return None;
    }

    let rest_x = area.right().saturating_sub(width + 1);
    let travel = (area.right() - rest_x) as f64;
    let x = rest_x + (travel * offset.clamp(0.0, 1.0)).round() as u16;
    if x >= area.right() {
        return None;
    }

    // Clip whatever has slid past the right edge
    Some(Rect::new(x, y, width.min(area.right() - x), TOAST_HEIGHT))
}

fn render_toast(f: &mut Frame, rect: Rect, notification: &Notification, theme: &Theme) {
    let bg = theme.notification_color(notification.kind);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(Style::default().fg(theme.notify_text).bg(bg))
        .style(Style::default().bg(bg));

    let text = Paragraph::new(notification.message.as_str())
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(theme.notify_text)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        )
        .block(block);

    // Clear the area first so the toast appears on top
    f.render_widget(Clear, rect);
    f.render_widget(text, rect);
}

/// How many toasts fit below the top margin
fn visible_slots(area: Rect) -> usize {
    (area.height.saturating_sub(1) / TOAST_HEIGHT) as usize
}

/// Render the live notifications that fit, oldest at the top
pub fn render<'a>(
    f: &mut Frame,
    area: Rect,
    notifications: impl Iterator<Item = &'a Notification>,
    theme: &Theme,
    now: Instant,
) {
    for (index, notification) in notifications.take(visible_slots(area)).enumerate() {
        let offset = notification.offset(now);
        if let Some(rect) = toast_rect(area, &notification.message, index, offset) {
            render_toast(f, rect, notification, theme);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_rect_at_rest() {
        let area = Rect::new(0, 0, 80, 24);
        let rect = toast_rect(area, "Copied", 0, 0.0).unwrap();

        assert_eq!(rect.width, 10);
        assert_eq!(rect.x, 69);
        assert_eq!(rect.y, 1);
    }

    #[test]
    fn test_toasts_stack_downwards() {
        let area = Rect::new(0, 0, 80, 24);
        let first = toast_rect(area, "one", 0, 0.0).unwrap();
        let second = toast_rect(area, "two", 1, 0.0).unwrap();

        assert_eq!(second.y, first.y + TOAST_HEIGHT);
    }

    #[test]
    fn test_toast_slides_offscreen() {
        let area = Rect::new(0, 0, 80, 24);
        let halfway = toast_rect(area, "Copied", 0, 0.5).unwrap();

        assert!(halfway.x > 69);
        assert!(halfway.right() <= area.right());
        assert!(toast_rect(area, "Copied", 0, 1.0).is_none());
    }

    #[test]
    fn test_far_down_the_stack_does_not_overflow() {
        let area = Rect::new(0, 0, 80, 24);
        assert!(toast_rect(area, "deep", 30_000, 0.0).is_none());
        assert!(toast_rect(area, "deep", usize::MAX, 0.0).is_none());
        assert_eq!(visible_slots(area), 7);
    }

    #[test]
    fn test_toast_that_does_not_fit_is_skipped() {
        let area = Rect::new(0, 0, 80, 6);
        assert!(toast_rect(area, "first", 0, 0.0).is_some());
        assert!(toast_rect(area, "second", 1, 0.0).is_none());
    }
}
