// Components module - reusable UI building blocks
//
// Rendered top to bottom:
// - Title bar: App name and the configured limit
// - Text area: The editable field
// - Counter row: Character count and remaining count
// - Progress bar: Gradient usage gauge
// - Controls: Clear and copy buttons
// - Status bar: Key hints and the latest warning
//
// Toasts are drawn last as an overlay.

pub mod controls;
pub mod counter_row;
pub mod progress_bar;
pub mod status_bar;
pub mod text_area;
pub mod title_bar;
pub mod toast;
