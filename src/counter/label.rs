//! Control labels that briefly confirm an action
//!
//! `Default ⇄ Confirmation`: the action switches to the confirmation text and
//! arms a revert timer. Repeating the action inside the window only pushes the
//! revert out.

use super::timer::Timer;
use std::time::{Duration, Instant};

/// How long a confirmation label stays up
pub const CONFIRMATION_DURATION: Duration = Duration::from_millis(1000);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LabelState {
    #[default]
    Default,
    Confirmation,
}

/// A button label with a timed confirmation state
#[derive(Debug, Clone)]
pub struct ActionLabel {
    default_text: &'static str,
    confirmation_text: &'static str,
    state: LabelState,
    revert: Timer,
}

impl ActionLabel {
    pub fn new(default_text: &'static str, confirmation_text: &'static str) -> Self {
        Self {
            default_text,
            confirmation_text,
            state: LabelState::Default,
            revert: Timer::new(CONFIRMATION_DURATION),
        }
    }

    /// Label of the clear control
    pub fn clear() -> Self {
        Self::new("Clear Text", "Cleared!")
    }

    /// Label of the copy control
    pub fn copy() -> Self {
        Self::new("Copy Text", "Copied!")
    }

    pub fn text(&self) -> &'static str {
        match self.state {
            LabelState::Default => self.default_text,
            LabelState::Confirmation => self.confirmation_text,
        }
    }

    pub fn state(&self) -> LabelState {
        self.state
    }

    /// Show the confirmation text and (re)start the revert timer
    pub fn confirm(&mut self, now: Instant) {
        self.state = LabelState::Confirmation;
        self.revert.arm(now);
    }

    /// Revert to the default text once the timer is due
    pub fn tick(&mut self, now: Instant) {
        if self.revert.fire(now) {
            self.state = LabelState::Default;
        }
    }

    /// Drop any pending revert and show the default text
    pub fn reset(&mut self) {
        self.revert.cancel();
        self.state = LabelState::Default;
    }

    #[cfg(test)]
    pub(crate) fn has_pending_revert(&self) -> bool {
        self.revert.is_armed()
    }
}
