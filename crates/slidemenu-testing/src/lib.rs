//! Testing utilities for the sliding menu

pub mod assertions;
pub mod recording;
pub mod rule;

pub use assertions::{assert_approx_eq, assert_monotonic, assert_rect_approx_eq};
pub use recording::{RecordedEvent, RecordingListener};
pub use rule::{SlidingMenuTestRule, TouchInjectionScope, FRAME_NANOS, PANEL_HEIGHT};

pub mod prelude {
    pub use crate::assertions::*;
    pub use crate::recording::{RecordedEvent, RecordingListener};
    pub use crate::rule::{SlidingMenuTestRule, TouchInjectionScope};
}
