//! Routing of a pointer gesture between the sliding menu and its panels.
//!
//! The target is picked on pointer down and kept until the gesture ends. The
//! menu gets first say through [`SlidingMenu::on_intercept_touch_event`]; if
//! it declines, the panel under the pointer receives the events in its own
//! coordinates. While a panel owns the gesture the menu is asked again on
//! every event and may steal it, unless the down event carried a
//! disallow-intercept request. A stolen gesture ends in the panel with a
//! cancel event and restarts in the menu from the current position.

use crate::{Panel, PanelId, SlidingMenu, SlidingMenuError};
use slidemenu_foundation::{PointerEvent, PointerEventKind, ScrollContainer};
use slidemenu_ui_graphics::Point;
use std::cell::{Cell, RefCell};

/// Who owns the current gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchTarget {
    Menu,
    Panel(PanelId),
}

#[derive(Default)]
pub struct TouchDispatcher {
    target: Cell<Option<TouchTarget>>,
    child: RefCell<Option<Panel>>,
    disallow_intercept: Cell<bool>,
}

impl TouchDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Owner of the gesture in progress.
    pub fn target(&self) -> Option<TouchTarget> {
        self.target.get()
    }

    /// Route one event. Returns whether whoever received it handled it.
    pub fn dispatch<S: ScrollContainer + 'static>(
        &self,
        menu: &SlidingMenu<S>,
        event: &PointerEvent,
    ) -> Result<bool, SlidingMenuError> {
        let handled = match event.kind {
            PointerEventKind::Down => self.dispatch_down(menu, event),
            _ => self.dispatch_in_gesture(menu, event),
        };

        if event.kind.ends_gesture() {
            self.reset();
        }
        handled
    }

    fn dispatch_down<S: ScrollContainer + 'static>(
        &self,
        menu: &SlidingMenu<S>,
        event: &PointerEvent,
    ) -> Result<bool, SlidingMenuError> {
        self.reset();

        if menu.on_intercept_touch_event(event) {
            log::trace!("dispatch: menu takes gesture at x={}", event.x());
            return self.send_to_menu(menu, event);
        }
        if let Some(panel) = menu.panel_at(event.x(), event.y()) {
            if Self::send_to_panel(menu, &panel, event) {
                log::trace!("dispatch: panel {:?} takes gesture", panel.id());
                // The panel may have cleared the request while handling the down.
                self.disallow_intercept.set(event.is_intercept_disallowed());
                self.target.set(Some(TouchTarget::Panel(panel.id())));
                *self.child.borrow_mut() = Some(panel);
                return Ok(true);
            }
        }

        // Nobody below wanted it; the menu gets the gesture after all.
        self.send_to_menu(menu, event)
    }

    fn dispatch_in_gesture<S: ScrollContainer + 'static>(
        &self,
        menu: &SlidingMenu<S>,
        event: &PointerEvent,
    ) -> Result<bool, SlidingMenuError> {
        match self.target.get() {
            Some(TouchTarget::Menu) => menu.on_touch_event(event),
            Some(TouchTarget::Panel(_)) => {
                let Some(panel) = self.child.borrow().clone() else {
                    return Ok(false);
                };
                if !self.disallow_intercept.get() && menu.on_intercept_touch_event(event) {
                    log::debug!("dispatch: menu steals gesture from {:?}", panel.id());
                    let cancel = PointerEvent::cancel(event.x(), event.y()).with_id(event.id);
                    Self::send_to_panel(menu, &panel, &cancel);
                    *self.child.borrow_mut() = None;
                    // The menu never saw the press; start its tracking here.
                    let down = PointerEvent::down(event.x(), event.y()).with_id(event.id);
                    return self.send_to_menu(menu, &down);
                }
                Ok(Self::send_to_panel(menu, &panel, event))
            }
            None => Ok(false),
        }
    }

    fn send_to_menu<S: ScrollContainer + 'static>(
        &self,
        menu: &SlidingMenu<S>,
        event: &PointerEvent,
    ) -> Result<bool, SlidingMenuError> {
        self.target.set(Some(TouchTarget::Menu));
        menu.on_touch_event(event)
    }

    fn send_to_panel<S: ScrollContainer + 'static>(
        menu: &SlidingMenu<S>,
        panel: &Panel,
        event: &PointerEvent,
    ) -> bool {
        let origin = menu
            .panel_bounds(panel)
            .map(|bounds| bounds.origin())
            .unwrap_or(Point::ZERO);
        let local = event.at(Point::new(
            event.x() - origin.x,
            event.y() - origin.y,
        ));
        panel.dispatch_pointer(&local)
    }

    fn reset(&self) {
        self.target.set(None);
        *self.child.borrow_mut() = None;
        self.disallow_intercept.set(false);
    }
}

impl std::fmt::Debug for TouchDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TouchDispatcher")
            .field("target", &self.target.get())
            .field("disallow_intercept", &self.disallow_intercept.get())
            .finish()
    }
}
