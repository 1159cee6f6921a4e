//! Horizontal scroll container.
//!
//! [`ScrollContainer`] is the seam between the sliding menu and whatever
//! scrolls it. [`HorizontalScrollState`] is the stock implementation: an
//! integer pixel offset clamped to `[0, max]`, finger dragging past a touch
//! slop, and an animated `smooth_scroll_to` ticked by the frame clock.

use crate::gesture_constants::{DRAG_THRESHOLD, SMOOTH_SCROLL_DURATION_MILLIS};
use crate::nodes::input::types::{PointerEvent, PointerEventKind};
use slidemenu_animation::{Animatable, AnimationSpec, Easing};
use slidemenu_core::FrameClock;
use std::cell::Cell;
use std::rc::{Rc, Weak};
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_SCROLL_STATE_ID: AtomicU64 = AtomicU64::new(1);

/// Scroll primitive consumed by the sliding menu.
///
/// All methods take `&self`; implementations keep their state in cells so a
/// container can be shared between the widget and the host.
pub trait ScrollContainer {
    /// Current horizontal offset in pixels.
    fn scroll_x(&self) -> i32;

    fn max_scroll_x(&self) -> i32;

    fn set_max_scroll_x(&self, max: i32);

    /// Jump to `x` immediately, cancelling any running animation.
    fn set_scroll_x(&self, x: i32);

    /// Animate the offset to `x`.
    fn smooth_scroll_to(&self, x: i32);

    /// The container's own drag handling for events the widget lets through.
    /// Returns whether the event was handled.
    fn on_touch_event(&self, event: &PointerEvent) -> bool;

    /// Whether a finger drag has passed the touch slop and is moving the offset.
    fn is_being_dragged(&self) -> bool;

    fn is_animating(&self) -> bool;

    fn is_scroll_in_progress(&self) -> bool {
        self.is_being_dragged() || self.is_animating()
    }
}

/// Tuning for [`HorizontalScrollState`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollConfig {
    pub touch_slop: f32,
    pub animation: AnimationSpec,
}

impl ScrollConfig {
    pub fn with_touch_slop(mut self, touch_slop: f32) -> Self {
        self.touch_slop = touch_slop;
        self
    }

    pub fn with_animation(mut self, animation: AnimationSpec) -> Self {
        self.animation = animation;
        self
    }
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            touch_slop: DRAG_THRESHOLD,
            animation: AnimationSpec::tween(SMOOTH_SCROLL_DURATION_MILLIS, Easing::ViscousFluid),
        }
    }
}

#[derive(Clone, Copy, Debug, Default)]
struct DragState {
    down_x: Option<f32>,
    origin: i32,
    dragging: bool,
}

/// Stock [`ScrollContainer`] implementation. Cloning shares the state.
#[derive(Clone)]
pub struct HorizontalScrollState {
    inner: Rc<ScrollStateInner>,
}

struct ScrollStateInner {
    id: u64,
    value: Cell<i32>,
    max_value: Cell<i32>,
    config: Cell<ScrollConfig>,
    drag: Cell<DragState>,
    animation: Animatable<f32>,
}

impl ScrollStateInner {
    fn clamp(&self, x: i32) -> i32 {
        x.clamp(0, self.max_value.get().max(0))
    }
}

impl HorizontalScrollState {
    pub fn new(clock: FrameClock) -> Self {
        Self::with_config(clock, ScrollConfig::default())
    }

    pub fn with_config(clock: FrameClock, config: ScrollConfig) -> Self {
        let id = NEXT_SCROLL_STATE_ID.fetch_add(1, Ordering::Relaxed);
        let inner = Rc::new_cyclic(|weak: &Weak<ScrollStateInner>| {
            let animation = Animatable::new(0.0f32, clock);
            let weak = weak.clone();
            animation.set_on_update(move |value| {
                if let Some(inner) = weak.upgrade() {
                    let x = inner.clamp(value.round() as i32);
                    inner.value.set(x);
                }
            });
            ScrollStateInner {
                id,
                value: Cell::new(0),
                max_value: Cell::new(0),
                config: Cell::new(config),
                drag: Cell::new(DragState::default()),
                animation,
            }
        });
        Self { inner }
    }

    /// Unique ID for debugging
    pub fn id(&self) -> u64 {
        self.inner.id
    }

    pub fn config(&self) -> ScrollConfig {
        self.inner.config.get()
    }

    pub fn set_config(&self, config: ScrollConfig) {
        self.inner.config.set(config);
    }

    /// Target of the running animation, if one is running.
    pub fn animation_target(&self) -> Option<i32> {
        self.inner
            .animation
            .is_running()
            .then(|| self.inner.clamp(self.inner.animation.target().round() as i32))
    }
}

impl ScrollContainer for HorizontalScrollState {
    fn scroll_x(&self) -> i32 {
        self.inner.value.get()
    }

    fn max_scroll_x(&self) -> i32 {
        self.inner.max_value.get()
    }

    fn set_max_scroll_x(&self, max: i32) {
        self.inner.max_value.set(max.max(0));
        let clamped = self.inner.clamp(self.inner.value.get());
        self.inner.value.set(clamped);
    }

    fn set_scroll_x(&self, x: i32) {
        let clamped = self.inner.clamp(x);
        log::trace!("scroll state {}: set_scroll_x({x}) -> {clamped}", self.inner.id);
        self.inner.animation.snap_to(clamped as f32);
        self.inner.value.set(clamped);
    }

    fn smooth_scroll_to(&self, x: i32) {
        let target = self.inner.clamp(x);
        let inner = &self.inner;
        log::trace!(
            "scroll state {}: smooth_scroll_to({x}) from {}",
            inner.id,
            inner.value.get()
        );
        if !inner.animation.is_running() {
            // Drags move the offset directly; restart the animation from there.
            inner.animation.snap_to(inner.value.get() as f32);
        }
        inner
            .animation
            .animate_to(target as f32, inner.config.get().animation);
    }

    fn on_touch_event(&self, event: &PointerEvent) -> bool {
        let inner = &self.inner;
        match event.kind {
            PointerEventKind::Down => {
                if inner.animation.is_running() {
                    inner.animation.stop();
                }
                inner.drag.set(DragState {
                    down_x: Some(event.x()),
                    origin: inner.value.get(),
                    dragging: false,
                });
                true
            }
            PointerEventKind::Move => {
                let mut drag = inner.drag.get();
                let Some(down_x) = drag.down_x else {
                    return false;
                };
                let mut travelled = down_x - event.x();
                let slop = inner.config.get().touch_slop;
                if !drag.dragging && travelled.abs() > slop {
                    // The slop is not part of the drag distance.
                    let start_x = down_x - slop * travelled.signum();
                    drag = DragState {
                        down_x: Some(start_x),
                        dragging: true,
                        ..drag
                    };
                    inner.drag.set(drag);
                    travelled = start_x - event.x();
                }
                if drag.dragging {
                    // Dragging content left reveals what is to its right.
                    let x = inner.clamp(drag.origin + travelled.round() as i32);
                    inner.value.set(x);
                    event.consume();
                }
                true
            }
            PointerEventKind::Up | PointerEventKind::Cancel => {
                let was_tracking = inner.drag.get().down_x.is_some();
                inner.drag.set(DragState::default());
                was_tracking
            }
        }
    }

    fn is_being_dragged(&self) -> bool {
        self.inner.drag.get().dragging
    }

    fn is_animating(&self) -> bool {
        self.inner.animation.is_running()
    }
}

impl std::fmt::Debug for HorizontalScrollState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HorizontalScrollState")
            .field("id", &self.inner.id)
            .field("value", &self.inner.value.get())
            .field("max_value", &self.inner.max_value.get())
            .field("dragging", &self.inner.drag.get().dragging)
            .finish()
    }
}

#[cfg(test)]
#[path = "tests/scroll_tests.rs"]
mod tests;
