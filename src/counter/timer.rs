//! One-shot timers driven by the caller's clock
//!
//! A timer is just a deadline. Arming an armed timer moves the deadline
//! instead of scheduling a second firing, and `cancel` makes it inert.

use std::time::{Duration, Instant};

/// Cancelable one-shot timer
#[derive(Debug, Clone)]
pub struct Timer {
    duration: Duration,
    deadline: Option<Instant>,
}

impl Timer {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            deadline: None,
        }
    }

    /// Start (or restart) the timer from `now`
    pub fn arm(&mut self, now: Instant) {
        self.deadline = Some(now + self.duration);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Fire if the deadline has passed. Returns true exactly once per arming.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(1);

    #[test]
    fn test_fires_once_after_deadline() {
        let t0 = Instant::now();
        let mut timer = Timer::new(MS * 300);
        timer.arm(t0);

        assert!(!timer.fire(t0 + MS * 299));
        assert!(timer.fire(t0 + MS * 300));
        assert!(!timer.fire(t0 + MS * 301));
        assert!(!timer.is_armed());
    }

    #[test]
    fn test_rearm_moves_deadline() {
        let t0 = Instant::now();
        let mut timer = Timer::new(MS * 1000);
        timer.arm(t0);
        timer.arm(t0 + MS * 600);

        assert!(!timer.fire(t0 + MS * 1000));
        assert!(timer.fire(t0 + MS * 1600));
    }

    #[test]
    fn test_cancel() {
        let t0 = Instant::now();
        let mut timer = Timer::new(MS * 10);
        timer.arm(t0);
        timer.cancel();
        assert!(!timer.fire(t0 + MS * 100));
        assert!(!timer.is_armed());
    }
}
