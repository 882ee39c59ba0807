// Theme support for the TUI
//
// Provides color palettes that can be configured via config file.
// "Terminal" uses the terminal's ANSI palette, "Classic" uses true color (RGB).

use crate::counter::{BorderState, NotificationKind, Palette};
use ratatui::style::Color;
use ratatui::widgets::BorderType;

/// Theme configuration options
#[derive(Debug, Clone)]
pub struct ThemeConfig {
    /// Use theme's background color (true) or terminal's default (false)
    pub use_theme_background: bool,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            use_theme_background: true,
        }
    }
}

/// Two-stop horizontal gradient
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gradient {
    pub start: Color,
    pub end: Color,
}

impl Gradient {
    pub const fn new(start: Color, end: Color) -> Self {
        Self { start, end }
    }

    /// Color at position `t` (0.0 = start, 1.0 = end)
    ///
    /// Only RGB stops can be blended; ANSI stops switch at the midpoint.
    pub fn at(&self, t: f64) -> Color {
        let t = t.clamp(0.0, 1.0);
        match (self.start, self.end) {
            (Color::Rgb(r1, g1, b1), Color::Rgb(r2, g2, b2)) => {
                let lerp = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
                Color::Rgb(lerp(r1, r2), lerp(g1, g2), lerp(b1, b2))
            }
            _ if t < 0.5 => self.start,
            _ => self.end,
        }
    }
}

/// Color palette for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,

    // Usage palettes (remaining text uses the start color)
    pub success: Gradient,
    pub warning: Gradient,
    pub danger: Gradient,

    // Field border states
    pub border: Color,
    pub border_focused: Color,
    pub border_overflow: Color,

    // Notification backgrounds
    pub notify_success: Color,
    pub notify_error: Color,
    pub notify_info: Color,
    pub notify_text: Color,

    // Chrome
    pub title: Color,
    pub highlight: Color,
    pub muted: Color,
    pub background: Color,
    pub foreground: Color,
    pub border_type: BorderType,
}

impl Theme {
    /// Load theme by name; unknown names fall back to Classic
    pub fn by_name_with_config(name: &str, config: &ThemeConfig) -> Self {
        let mut theme = match name.to_lowercase().as_str() {
            "terminal" => Self::terminal(),
            _ => Self::classic(),
        };
        if !config.use_theme_background {
            theme.background = Color::Reset;
        }
        theme
    }

    /// Classic theme - flat UI colors on a dark slate
    pub fn classic() -> Self {
        Self {
            name: "Classic".to_string(),
            success: Gradient::new(Color::Rgb(0x2e, 0xcc, 0x71), Color::Rgb(0x34, 0x98, 0xdb)),
            warning: Gradient::new(Color::Rgb(0xe6, 0x7e, 0x22), Color::Rgb(0xd3, 0x54, 0x00)),
            danger: Gradient::new(Color::Rgb(0xe7, 0x4c, 0x3c), Color::Rgb(0xc0, 0x39, 0x2b)),
            border: Color::Rgb(0xe0, 0xe0, 0xe0),          // neutral
            border_focused: Color::Rgb(0x34, 0x98, 0xdb),  // accent blue
            border_overflow: Color::Rgb(0xe7, 0x4c, 0x3c), // red
            notify_success: Color::Rgb(0x2e, 0xcc, 0x71),
            notify_error: Color::Rgb(0xe7, 0x4c, 0x3c),
            notify_info: Color::Rgb(0x34, 0x98, 0xdb),
            notify_text: Color::White,
            title: Color::Rgb(0x34, 0x98, 0xdb),
            highlight: Color::Rgb(0xf1, 0xc4, 0x0f),
            muted: Color::Rgb(0x95, 0xa5, 0xa6),
            background: Color::Rgb(0x1e, 0x27, 0x2e),
            foreground: Color::Rgb(0xec, 0xf0, 0xf1),
            border_type: BorderType::Rounded,
        }
    }

    /// Terminal theme - uses terminal's ANSI palette
    pub fn terminal() -> Self {
        Self {
            name: "Terminal".to_string(),
            success: Gradient::new(Color::Green, Color::Blue),
            warning: Gradient::new(Color::Yellow, Color::LightRed),
            danger: Gradient::new(Color::Red, Color::LightRed),
            border: Color::Gray,
            border_focused: Color::Blue,
            border_overflow: Color::Red,
            notify_success: Color::Green,
            notify_error: Color::Red,
            notify_info: Color::Blue,
            notify_text: Color::White,
            title: Color::Cyan,
            highlight: Color::Yellow,
            muted: Color::DarkGray,
            background: Color::Reset,
            foreground: Color::Reset,
            border_type: BorderType::Plain,
        }
    }

    pub fn palette(&self, palette: Palette) -> Gradient {
        match palette {
            Palette::Success => self.success,
            Palette::Warning => self.warning,
            Palette::Danger => self.danger,
        }
    }

    pub fn border_color(&self, border: BorderState) -> Color {
        match border {
            BorderState::Focused => self.border_focused,
            BorderState::Unfocused => self.border,
            BorderState::Overflow => self.border_overflow,
        }
    }

    pub fn notification_color(&self, kind: NotificationKind) -> Color {
        match kind {
            NotificationKind::Success => self.notify_success,
            NotificationKind::Error => self.notify_error,
            NotificationKind::Info => self.notify_info,
        }
    }
}
