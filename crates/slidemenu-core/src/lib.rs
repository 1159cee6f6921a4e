//! Core runtime pieces for the sliding menu widget.
//!
//! The widget is single threaded and event driven. The only runtime service it
//! needs is a frame clock that animations can hook into; the host drains it
//! once per rendered frame.

mod frame_clock;

pub use frame_clock::*;

pub mod prelude {
    pub use crate::frame_clock::{FrameCallbackId, FrameCallbackRegistration, FrameClock};
}
