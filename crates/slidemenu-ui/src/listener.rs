//! Slide/open/close observers.

use crate::{Panel, MAX_NOTIFY_DEPTH};
use smallvec::SmallVec;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Observer of the menu's movement.
///
/// Callbacks run synchronously on the UI thread, before the call that caused
/// them returns. Keep them short: no long-running work in here.
///
/// `menu` is `None` only when the menu is driven before its panels exist.
pub trait SlidingListener {
    /// `slide_offset` is 0 when closed and 1 when fully open.
    fn on_menu_slide(&self, _menu: Option<&Panel>, _slide_offset: f32) {}

    fn on_menu_opened(&self, _menu: Option<&Panel>) {}

    fn on_menu_closed(&self, _menu: Option<&Panel>) {}
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum MenuNotification {
    Slide(f32),
    Opened,
    Closed,
}

type Listeners = SmallVec<[Rc<dyn SlidingListener>; 2]>;

/// Insertion-ordered listeners. No de-duplication and no removal.
#[derive(Default)]
pub(crate) struct ListenerRegistry {
    listeners: RefCell<Listeners>,
    depth: Cell<u32>,
}

struct DepthGuard<'a>(&'a Cell<u32>);

impl Drop for DepthGuard<'_> {
    fn drop(&mut self) {
        self.0.set(self.0.get() - 1);
    }
}

impl ListenerRegistry {
    pub(crate) fn add(&self, listener: Rc<dyn SlidingListener>) {
        self.listeners.borrow_mut().push(listener);
    }

    pub(crate) fn len(&self) -> usize {
        self.listeners.borrow().len()
    }

    /// Deliver to every listener registered at the time of the call, in
    /// registration order. Listeners added during delivery see the next
    /// notification. Nested delivery past [`MAX_NOTIFY_DEPTH`] is dropped.
    pub(crate) fn notify(&self, notification: MenuNotification, menu: Option<&Panel>) {
        let depth = self.depth.get();
        if depth >= MAX_NOTIFY_DEPTH {
            log::warn!(
                "dropping {notification:?}: listeners re-entered the menu {depth} levels deep"
            );
            return;
        }
        self.depth.set(depth + 1);
        let _guard = DepthGuard(&self.depth);

        let snapshot: Listeners = self.listeners.borrow().clone();
        for listener in snapshot {
            match notification {
                MenuNotification::Slide(offset) => listener.on_menu_slide(menu, offset),
                MenuNotification::Opened => listener.on_menu_opened(menu),
                MenuNotification::Closed => listener.on_menu_closed(menu),
            }
        }
    }
}
