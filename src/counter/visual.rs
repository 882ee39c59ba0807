//! Visual state mapping
//!
//! Usage thresholds are decided here, colors are not. The TUI maps a
//! [`VisualState`] onto the active theme.

use super::metrics::DerivedMetrics;

/// Percentage at which the palette turns to warning
pub const WARNING_THRESHOLD: f64 = 75.0;

/// Percentage at which the palette turns to danger
pub const DANGER_THRESHOLD: f64 = 90.0;

/// Percentage at which the field border signals overflow
pub const OVERFLOW_THRESHOLD: f64 = 100.0;

/// Palette for the remaining-count text and the progress fill
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Palette {
    #[default]
    Success,
    Warning,
    Danger,
}

impl Palette {
    pub fn for_percentage(percentage: f64) -> Self {
        if percentage >= DANGER_THRESHOLD {
            Self::Danger
        } else if percentage >= WARNING_THRESHOLD {
            Self::Warning
        } else {
            Self::Success
        }
    }
}

/// Border treatment for the text field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BorderState {
    /// Field has input focus (accent)
    Focused,
    /// Field is idle (neutral)
    #[default]
    Unfocused,
    /// Buffer reached the limit (red); wins over focus
    Overflow,
}

/// Combined visual state applied by the rendering layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VisualState {
    pub palette: Palette,
    pub border: BorderState,
}

/// Map metrics and focus onto a visual state
pub fn visual_state(metrics: &DerivedMetrics, has_focus: bool) -> VisualState {
    let percentage = metrics.percentage;

    let border = if percentage >= OVERFLOW_THRESHOLD {
        BorderState::Overflow
    } else if has_focus {
        BorderState::Focused
    } else {
        BorderState::Unfocused
    };

    VisualState {
        palette: Palette::for_percentage(percentage),
        border,
    }
}
