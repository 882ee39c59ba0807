//! Derived metrics for the text buffer
//!
//! Recomputed on every change and never stored as a source of truth.

/// Count the characters in `text` the way the counter sees them
///
/// One Unicode scalar value counts as one character.
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Length-based metrics for the current buffer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedMetrics {
    /// Characters currently in the buffer
    pub current_length: usize,
    /// `max_length - current_length`, negative when the buffer overflows
    pub remaining: i64,
    /// `current_length / max_length * 100`, unclamped
    pub percentage: f64,
}

impl DerivedMetrics {
    /// Compute metrics for a buffer of `current_length` characters
    ///
    /// A zero `max_length` has no meaningful ratio: an empty buffer reads as
    /// 0% and anything else as 100%.
    pub fn compute(current_length: usize, max_length: usize) -> Self {
        let remaining = max_length as i64 - current_length as i64;

        let percentage = if max_length == 0 {
            if current_length == 0 {
                0.0
            } else {
                100.0
            }
        } else {
            (current_length as f64 / max_length as f64) * 100.0
        };

        Self {
            current_length,
            remaining,
            percentage,
        }
    }

    /// Compute metrics straight from the buffer text
    pub fn for_text(text: &str, max_length: usize) -> Self {
        Self::compute(char_len(text), max_length)
    }

    /// Percentage rounded half away from zero, as shown on the progress label
    pub fn rounded_percentage(&self) -> i64 {
        self.percentage.round() as i64
    }

    /// Progress fill width in percent, capped to the bar
    pub fn fill_percent(&self) -> f64 {
        self.percentage.clamp(0.0, 100.0)
    }
}
