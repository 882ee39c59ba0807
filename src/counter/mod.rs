// Counter module - the character counter's behavior, free of any terminal code
//
// - buffer: text content and cursor
// - metrics: length, remaining and percentage
// - visual: thresholds to palette/border state
// - timer/label/notification: the timed presentation states
// - widget: ties it all together behind the user-facing operations

pub mod buffer;
pub mod label;
pub mod metrics;
pub mod notification;
pub mod timer;
pub mod visual;
pub mod widget;

pub use buffer::TextBuffer;
pub use label::{ActionLabel, LabelState};
pub use metrics::DerivedMetrics;
pub use notification::{Notification, NotificationKind, Notifications, Phase};
pub use timer::Timer;
pub use visual::{visual_state, BorderState, Palette, VisualState};
pub use widget::{CopyOutcome, CounterWidget, CursorMove, DisplayRegions};
