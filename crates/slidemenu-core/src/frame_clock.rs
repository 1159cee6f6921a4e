use smallvec::SmallVec;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

pub type FrameCallbackId = u64;

type FrameCallback = Box<dyn FnOnce(u64)>;

struct PendingCallback {
    id: FrameCallbackId,
    callback: FrameCallback,
}

#[derive(Default)]
struct Schedule {
    last_id: Cell<FrameCallbackId>,
    pending: RefCell<SmallVec<[PendingCallback; 4]>>,
    last_frame_nanos: Cell<Option<u64>>,
}

impl Schedule {
    fn unschedule(&self, id: FrameCallbackId) {
        self.pending.borrow_mut().retain(|entry| entry.id != id);
    }
}

/// Host driven frame clock.
///
/// Callbacks registered through [`FrameClock::with_frame_nanos`] fire once, on
/// the next call to [`FrameClock::drain_frame_callbacks`]. A callback that
/// registers another callback while being drained is deferred to the following
/// frame, which is how animations keep themselves ticking.
#[derive(Clone, Default)]
pub struct FrameClock {
    schedule: Rc<Schedule>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `callback` with the time of the next drained frame.
    pub fn with_frame_nanos(
        &self,
        callback: impl FnOnce(u64) + 'static,
    ) -> FrameCallbackRegistration {
        let id = self.schedule.last_id.get() + 1;
        self.schedule.last_id.set(id);
        self.schedule.pending.borrow_mut().push(PendingCallback {
            id,
            callback: Box::new(callback),
        });
        FrameCallbackRegistration {
            schedule: Rc::downgrade(&self.schedule),
            id: Some(id),
        }
    }

    /// Fire every callback registered before this call with the given frame
    /// time. Returns how many callbacks ran.
    pub fn drain_frame_callbacks(&self, frame_time_nanos: u64) -> usize {
        self.schedule.last_frame_nanos.set(Some(frame_time_nanos));
        let due = std::mem::take(&mut *self.schedule.pending.borrow_mut());
        if !due.is_empty() {
            log::trace!("frame {frame_time_nanos}ns: {} callback(s) due", due.len());
        }
        let ran = due.len();
        due.into_iter()
            .for_each(|entry| (entry.callback)(frame_time_nanos));
        ran
    }

    pub fn has_pending_frame_callbacks(&self) -> bool {
        !self.schedule.pending.borrow().is_empty()
    }

    /// Time of the most recently drained frame, if any.
    pub fn last_frame_nanos(&self) -> Option<u64> {
        self.schedule.last_frame_nanos.get()
    }
}

/// Keeps a frame callback scheduled. Dropping or cancelling it unschedules the
/// callback if it has not fired yet.
pub struct FrameCallbackRegistration {
    schedule: Weak<Schedule>,
    id: Option<FrameCallbackId>,
}

impl FrameCallbackRegistration {
    pub fn cancel(mut self) {
        self.unschedule();
    }

    fn unschedule(&mut self) {
        if let (Some(id), Some(schedule)) = (self.id.take(), self.schedule.upgrade()) {
            schedule.unschedule(id);
        }
    }
}

impl Drop for FrameCallbackRegistration {
    fn drop(&mut self) {
        self.unschedule();
    }
}

#[cfg(test)]
#[path = "tests/frame_clock_tests.rs"]
mod tests;
