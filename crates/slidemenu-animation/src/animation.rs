//! Frame driven tween of a single value.
//!
//! An [`Animatable`] owns a value and at most one running tween towards a
//! target. Each tween re-registers itself with the [`FrameClock`] until it
//! reaches the target, pushing every new value to the update callback.

use crate::Easing;
use slidemenu_core::{FrameCallbackRegistration, FrameClock};
use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// Values a tween can interpolate.
pub trait Lerp: Clone {
    fn lerp(&self, target: &Self, fraction: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        self + (target - self) * fraction
    }
}

/// Duration, easing and start delay of a tween.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationSpec {
    pub duration_millis: u64,
    pub easing: Easing,
    pub delay_millis: u64,
}

impl AnimationSpec {
    pub fn tween(duration_millis: u64, easing: Easing) -> Self {
        Self {
            duration_millis,
            easing,
            delay_millis: 0,
        }
    }

    pub fn linear(duration_millis: u64) -> Self {
        Self::tween(duration_millis, Easing::LinearEasing)
    }

    pub fn with_delay(mut self, delay_millis: u64) -> Self {
        self.delay_millis = delay_millis;
        self
    }

    /// Where a tween stands `elapsed_nanos` after its first frame.
    fn step_at(&self, elapsed_nanos: u64) -> Step {
        let delay_nanos = self.delay_millis * 1_000_000;
        let Some(running) = elapsed_nanos.checked_sub(delay_nanos) else {
            return Step::Delayed;
        };
        let duration_nanos = (self.duration_millis * 1_000_000).max(1);
        if running >= duration_nanos {
            Step::Finished
        } else {
            let linear = running as f32 / duration_nanos as f32;
            Step::Running(self.easing.transform(linear))
        }
    }
}

impl Default for AnimationSpec {
    fn default() -> Self {
        Self::tween(300, Easing::FastOutSlowInEasing)
    }
}

enum Step {
    Delayed,
    Running(f32),
    Finished,
}

struct Tween<T> {
    from: T,
    to: T,
    spec: AnimationSpec,
    /// Frame time of the first frame, fixed once that frame arrives.
    first_frame_nanos: Option<u64>,
    frame: Option<FrameCallbackRegistration>,
}

type UpdateCallback<T> = Rc<dyn Fn(&T)>;

struct State<T: Lerp + 'static> {
    clock: FrameClock,
    value: T,
    tween: Option<Tween<T>>,
    on_update: Option<UpdateCallback<T>>,
}

/// Value holder that tweens towards targets on the frame clock.
///
/// Clones share the value. Frame callbacks only hold a weak reference, so
/// dropping every clone ends the animation.
pub struct Animatable<T: Lerp + 'static> {
    state: Rc<RefCell<State<T>>>,
}

impl<T: Lerp + 'static> Animatable<T> {
    pub fn new(initial: T, clock: FrameClock) -> Self {
        Self {
            state: Rc::new(RefCell::new(State {
                clock,
                value: initial,
                tween: None,
                on_update: None,
            })),
        }
    }

    /// Called with every value a tween produces and with snapped values.
    /// Replaces any previous callback.
    pub fn set_on_update(&self, on_update: impl Fn(&T) + 'static) {
        self.state.borrow_mut().on_update = Some(Rc::new(on_update));
    }

    /// Start a tween from the current value. A running tween is replaced.
    pub fn animate_to(&self, target: T, spec: AnimationSpec) {
        {
            let mut state = self.state.borrow_mut();
            state.tween = Some(Tween {
                from: state.value.clone(),
                to: target,
                spec,
                first_frame_nanos: None,
                frame: None,
            });
        }
        Self::request_frame(&self.state);
    }

    /// Jump to `value`, dropping any running tween.
    pub fn snap_to(&self, value: T) {
        let on_update = {
            let mut state = self.state.borrow_mut();
            state.tween = None;
            state.value = value.clone();
            state.on_update.clone()
        };
        if let Some(on_update) = on_update {
            on_update(&value);
        }
    }

    /// Drop the running tween and keep the value where it is.
    pub fn stop(&self) {
        self.state.borrow_mut().tween = None;
    }

    pub fn value(&self) -> T {
        self.state.borrow().value.clone()
    }

    /// Target of the running tween, or the current value when idle.
    pub fn target(&self) -> T {
        let state = self.state.borrow();
        match &state.tween {
            Some(tween) => tween.to.clone(),
            None => state.value.clone(),
        }
    }

    pub fn is_running(&self) -> bool {
        self.state.borrow().tween.is_some()
    }

    fn request_frame(state: &Rc<RefCell<State<T>>>) {
        let clock = state.borrow().clock.clone();
        let weak: Weak<RefCell<State<T>>> = Rc::downgrade(state);
        let registration = clock.with_frame_nanos(move |frame_time_nanos| {
            if let Some(state) = weak.upgrade() {
                Self::on_frame(&state, frame_time_nanos);
            }
        });
        if let Some(tween) = state.borrow_mut().tween.as_mut() {
            tween.frame = Some(registration);
        }
    }

    fn on_frame(state: &Rc<RefCell<State<T>>>, frame_time_nanos: u64) {
        let (update, keep_going) = {
            let mut guard = state.borrow_mut();
            let state = &mut *guard;
            let Some(tween) = state.tween.as_mut() else {
                return;
            };
            tween.frame = None;
            let first = *tween.first_frame_nanos.get_or_insert(frame_time_nanos);

            match tween.spec.step_at(frame_time_nanos.saturating_sub(first)) {
                Step::Delayed => (None, true),
                Step::Running(progress) => {
                    state.value = tween.from.lerp(&tween.to, progress);
                    (state.on_update.clone(), true)
                }
                Step::Finished => {
                    log::trace!("tween finished at {frame_time_nanos}ns");
                    state.value = tween.to.clone();
                    state.tween = None;
                    (state.on_update.clone(), false)
                }
            }
        };

        if keep_going {
            Self::request_frame(state);
        }
        if let Some(on_update) = update {
            let value = state.borrow().value.clone();
            on_update(&value);
        }
    }
}

impl<T: Lerp + 'static> Clone for Animatable<T> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
        }
    }
}

#[cfg(test)]
#[path = "tests/animation_tests.rs"]
mod tests;
