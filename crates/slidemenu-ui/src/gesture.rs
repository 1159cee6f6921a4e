//! Touch session tracking and gesture classification.
//!
//! Classification runs in two phases. On pointer down the menu decides
//! whether to intercept at all, so taps meant for the menu's own children or
//! for content far from the edge are left alone. For gestures it does own, the
//! release is classified against the scroll position it ended at.

use crate::MenuGeometry;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TouchPhase {
    #[default]
    Idle,
    Down,
    Moving,
    Released,
}

/// Per-gesture state, reset on every pointer down.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TouchSession {
    phase: TouchPhase,
    start_x: f32,
}

impl TouchSession {
    pub fn on_down(&mut self, x: f32) {
        self.phase = TouchPhase::Down;
        self.start_x = x;
    }

    /// Any horizontal difference from the press position counts as movement.
    pub fn on_move(&mut self, x: f32) {
        if self.phase == TouchPhase::Down && x != self.start_x {
            self.phase = TouchPhase::Moving;
        }
    }

    /// Ends the touch. Returns whether the finger moved during it.
    pub fn on_release(&mut self) -> bool {
        let moved = self.has_moved();
        self.phase = TouchPhase::Released;
        moved
    }

    pub fn phase(&self) -> TouchPhase {
        self.phase
    }

    pub fn is_touching(&self) -> bool {
        matches!(self.phase, TouchPhase::Down | TouchPhase::Moving)
    }

    pub fn has_moved(&self) -> bool {
        self.phase == TouchPhase::Moving
    }

    pub fn start_x(&self) -> f32 {
        self.start_x
    }
}

/// What to do with a pointer down, decided before the menu sees the gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterceptDecision {
    Intercept,
    /// Leave the whole gesture to the child under the pointer.
    PassToChild,
}

pub fn classify_down(
    geometry: &MenuGeometry,
    is_menu_open: bool,
    x: f32,
    sliding_crack: i32,
) -> InterceptDecision {
    let x = x as i32;
    let ignore = if is_menu_open {
        geometry.is_over_open_menu(x)
    } else {
        geometry.is_beyond_sliding_crack(x, sliding_crack)
    };
    if ignore {
        InterceptDecision::PassToChild
    } else {
        InterceptDecision::Intercept
    }
}

/// Outcome of a released gesture the menu owned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseOutcome {
    /// A drag ended closer to the closed position.
    DragClose,
    /// A drag ended closer to the open position.
    DragOpen,
    /// A tap on the visible content strip of an open menu.
    TapClose,
    /// Let the scroll container finish the gesture.
    FallThrough,
}

impl ReleaseOutcome {
    pub fn is_toggle(self) -> bool {
        !matches!(self, ReleaseOutcome::FallThrough)
    }
}

pub fn classify_release(
    geometry: &MenuGeometry,
    moved: bool,
    scroll_x: i32,
    is_menu_open: bool,
    x: f32,
) -> ReleaseOutcome {
    if moved && geometry.is_past_half_toward_close(scroll_x) {
        ReleaseOutcome::DragClose
    } else if moved && geometry.is_past_half_toward_open(scroll_x) {
        ReleaseOutcome::DragOpen
    } else if !moved && is_menu_open && geometry.is_on_content_strip(x as i32) {
        ReleaseOutcome::TapClose
    } else {
        ReleaseOutcome::FallThrough
    }
}

#[cfg(test)]
#[path = "tests/gesture_tests.rs"]
mod tests;
