//! Transient notifications
//!
//! Every notification runs its own lifecycle from the moment it is created:
//! it waits off-screen briefly, slides in, stays up, slides out and is
//! removed. Nothing is shared between notifications and there is no cap.

use std::time::{Duration, Instant};

/// Delay before a new notification starts sliding in
pub const ENTER_DELAY: Duration = Duration::from_millis(100);

/// Time from creation until the notification starts sliding out
pub const DISPLAY_WINDOW: Duration = Duration::from_millis(3000);

/// Length of the slide-out animation
pub const LEAVE_DURATION: Duration = Duration::from_millis(300);

/// What a notification is reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotificationKind {
    #[default]
    Info,
    Success,
    Error,
}

impl NotificationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

/// Lifecycle phase of a notification
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Phase {
    /// Created but still off-screen
    Entering,
    /// Fully on screen
    Visible,
    /// Sliding out; the value is how far out it is (0.0..=1.0)
    Leaving(f64),
    /// Gone; will be removed on the next tick
    Expired,
}

/// A single transient notification
#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    created_at: Instant,
}

impl Notification {
    pub fn new(message: impl Into<String>, kind: NotificationKind, now: Instant) -> Self {
        Self {
            message: message.into(),
            kind,
            created_at: now,
        }
    }

    pub fn phase(&self, now: Instant) -> Phase {
        let elapsed = now.saturating_duration_since(self.created_at);

        if elapsed < ENTER_DELAY {
            Phase::Entering
        } else if elapsed < DISPLAY_WINDOW {
            Phase::Visible
        } else if elapsed < DISPLAY_WINDOW + LEAVE_DURATION {
            let out = (elapsed - DISPLAY_WINDOW).as_nanos() as f64 / LEAVE_DURATION.as_nanos() as f64;
            Phase::Leaving(out)
        } else {
            Phase::Expired
        }
    }

    /// Fraction of the notification's width pushed off the right edge
    ///
    /// 1.0 = fully off-screen, 0.0 = fully shown.
    pub fn offset(&self, now: Instant) -> f64 {
        match self.phase(now) {
            Phase::Entering | Phase::Expired => 1.0,
            Phase::Visible => 0.0,
            Phase::Leaving(out) => out,
        }
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        self.phase(now) == Phase::Expired
    }
}

/// All live notifications, oldest first
#[derive(Debug, Clone, Default)]
pub struct Notifications {
    items: Vec<Notification>,
}

impl Notifications {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, notification: Notification) {
        self.items.push(notification);
    }

    /// Remove notifications whose lifecycle has finished
    pub fn tick(&mut self, now: Instant) {
        self.items.retain(|n| !n.is_expired(now));
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn last(&self) -> Option<&Notification> {
        self.items.last()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}
