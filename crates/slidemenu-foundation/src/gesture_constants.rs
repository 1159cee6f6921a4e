//! Shared gesture constants for touch/pointer handling.
//!
//! Values are in logical pixels.

/// Drag threshold in logical pixels.
///
/// A pointer has to travel further than this from its press position before
/// the scroll container starts following it. Matches the usual platform
/// touch slop (Android uses ~8dp for `ViewConfiguration.TOUCH_SLOP`).
pub const DRAG_THRESHOLD: f32 = 8.0;

/// Duration of an animated `smooth_scroll_to`, matching the platform default.
pub const SMOOTH_SCROLL_DURATION_MILLIS: u64 = 250;
