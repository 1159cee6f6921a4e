//! The sliding menu widget.
//!
//! A [`SlidingMenu`] drives a horizontal [`ScrollContainer`] that holds the
//! menu panel next to the content panel. Hosts feed it pointer events and,
//! after anything else moved the scroll container (animation frames), call
//! [`SlidingMenu::sync_scroll`]. Every offset change rescales the content
//! panel and notifies listeners.
//!
//! The handle is a cheap clone. Listeners that want to call back into the menu
//! should hold a [`WeakSlidingMenu`] so the menu does not keep itself alive.

use crate::gesture::{self, InterceptDecision, ReleaseOutcome, TouchSession};
use crate::listener::{ListenerRegistry, MenuNotification};
use crate::slide::{SlideBoundary, SlideUpdate};
use crate::{MenuGeometry, Panel, SlidingListener, SlidingMenuConfig, SlidingMenuError};
use slidemenu_core::FrameClock;
use slidemenu_foundation::{
    HorizontalScrollState, LayoutDirection, PointerEvent, PointerEventKind, ScrollContainer,
};
use slidemenu_ui_graphics::{GraphicsLayer, Rect};
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

pub struct SlidingMenu<S: ScrollContainer + 'static = HorizontalScrollState> {
    inner: Rc<SlidingMenuInner<S>>,
}

struct SlidingMenuInner<S: ScrollContainer + 'static> {
    config: Cell<SlidingMenuConfig>,
    scroll: S,
    menu: RefCell<Option<Panel>>,
    content: RefCell<Option<Panel>>,
    /// Valid for the current layout pass; cleared on attach and detach.
    geometry: Cell<Option<MenuGeometry>>,
    layout_complete: Cell<bool>,
    is_menu_open: Cell<bool>,
    session: Cell<TouchSession>,
    last_scroll_x: Cell<i32>,
    listeners: ListenerRegistry,
}

impl SlidingMenu<HorizontalScrollState> {
    /// Build a menu around a fresh [`HorizontalScrollState`] ticked by `clock`.
    pub fn new(config: SlidingMenuConfig, clock: FrameClock) -> Self {
        let scroll = HorizontalScrollState::with_config(clock, config.scroll);
        Self::with_scroll_container(config, scroll)
    }
}

impl<S: ScrollContainer + 'static> SlidingMenu<S> {
    pub fn with_scroll_container(config: SlidingMenuConfig, scroll: S) -> Self {
        let last_scroll_x = scroll.scroll_x();
        Self {
            inner: Rc::new(SlidingMenuInner {
                config: Cell::new(config),
                scroll,
                menu: RefCell::new(None),
                content: RefCell::new(None),
                geometry: Cell::new(None),
                layout_complete: Cell::new(false),
                is_menu_open: Cell::new(false),
                session: Cell::new(TouchSession::default()),
                last_scroll_x: Cell::new(last_scroll_x),
                listeners: ListenerRegistry::default(),
            }),
        }
    }

    pub fn downgrade(&self) -> WeakSlidingMenu<S> {
        WeakSlidingMenu {
            inner: Rc::downgrade(&self.inner),
        }
    }

    pub fn config(&self) -> SlidingMenuConfig {
        self.inner.config.get()
    }

    pub fn scroll_container(&self) -> &S {
        &self.inner.scroll
    }

    pub fn scroll_x(&self) -> i32 {
        self.inner.scroll.scroll_x()
    }

    /// Geometry of the current layout pass, if measured.
    pub fn geometry(&self) -> Option<MenuGeometry> {
        self.inner.geometry.get()
    }

    pub fn is_menu_open(&self) -> bool {
        self.inner.is_menu_open.get()
    }

    pub fn is_touching(&self) -> bool {
        self.inner.session.get().is_touching()
    }

    pub fn touch_session(&self) -> TouchSession {
        self.inner.session.get()
    }

    /// Narrow the edge strip that accepts drag-open gestures. The strip can
    /// only shrink; a wider value than the current one is ignored.
    pub fn set_sliding_width(&self, sliding_width: i32) {
        let mut config = self.inner.config.get();
        config.sliding_crack = sliding_width.min(config.sliding_crack);
        self.inner.config.set(config);
    }

    /// Read by the next measure that computes geometry, which follows an
    /// attach or detach.
    pub fn set_sliding_padding(&self, sliding_padding: i32) {
        let mut config = self.inner.config.get();
        config.sliding_padding = sliding_padding;
        self.inner.config.set(config);
    }

    /// Use these panels instead of the first two children seen at measure.
    pub fn set_sliding_views(&self, menu: Panel, content: Panel) {
        log::debug!(
            "sliding views set: menu={:?} content={:?}",
            menu.id(),
            content.id()
        );
        *self.inner.menu.borrow_mut() = Some(menu);
        *self.inner.content.borrow_mut() = Some(content);
    }

    pub fn menu_panel(&self) -> Option<Panel> {
        self.inner.menu.borrow().clone()
    }

    pub fn content_panel(&self) -> Option<Panel> {
        self.inner.content.borrow().clone()
    }

    pub fn set_sliding_listener(&self, listener: Rc<dyn SlidingListener>) {
        self.inner.listeners.add(listener);
    }

    pub fn listener_count(&self) -> usize {
        self.inner.listeners.len()
    }

    pub fn on_attached(&self) {
        self.invalidate_layout();
    }

    pub fn on_detached(&self) {
        self.invalidate_layout();
    }

    fn invalidate_layout(&self) {
        self.inner.layout_complete.set(false);
        self.inner.geometry.set(None);
    }

    /// Measure pass. Until a layout pass completes this resolves the panels,
    /// computes the geometry, sizes both panels and sets the scroll range.
    /// Later passes keep what the first one computed.
    pub fn measure(
        &self,
        screen_width: i32,
        direction: LayoutDirection,
        children: &[Panel],
    ) -> Result<(), SlidingMenuError> {
        if self.inner.layout_complete.get() {
            return Ok(());
        }

        let (menu, content) = match (self.menu_panel(), self.content_panel()) {
            (Some(menu), Some(content)) => (menu, content),
            _ => match children {
                [menu, content, ..] => {
                    self.set_sliding_views(menu.clone(), content.clone());
                    (menu.clone(), content.clone())
                }
                _ => {
                    return Err(SlidingMenuError::MissingPanels {
                        found: children.len(),
                    })
                }
            },
        };

        let config = self.inner.config.get();
        let geometry = MenuGeometry::new(screen_width, config.sliding_padding, direction)?;
        log::debug!(
            "measure: screen={screen_width} padding={} menu_width={} {:?}",
            config.sliding_padding,
            geometry.menu_width(),
            direction
        );
        menu.set_width(geometry.menu_width());
        content.set_width(screen_width);
        self.inner.scroll.set_max_scroll_x(geometry.menu_width());
        self.inner.geometry.set(Some(geometry));
        Ok(())
    }

    /// Layout pass. A changed layout starts closed.
    pub fn layout(&self, changed: bool) -> Result<(), SlidingMenuError> {
        if !changed {
            return Ok(());
        }
        let geometry = self.inner.geometry.get().ok_or(SlidingMenuError::NotMeasured)?;
        self.inner.scroll.set_scroll_x(geometry.close_position());
        self.inner.layout_complete.set(true);
        self.sync_scroll()?;
        Ok(())
    }

    pub fn is_layout_complete(&self) -> bool {
        self.inner.layout_complete.get()
    }

    /// Decide whether the menu takes over the gesture this event belongs to.
    ///
    /// Only a pointer down can hand a gesture to a child; when it does, the
    /// event is flagged with [`PointerEvent::request_disallow_intercept`] so
    /// the dispatcher keeps routing the rest of the gesture to that child.
    /// A press while the scroll is still moving always belongs to the menu,
    /// which stops the animation.
    pub fn on_intercept_touch_event(&self, event: &PointerEvent) -> bool {
        if self.inner.scroll.is_scroll_in_progress() {
            log::debug!("intercept {:?}: scroll in progress", event.kind);
            return true;
        }

        let mut intercept = true;
        if event.kind == PointerEventKind::Down {
            if let Some(geometry) = self.inner.geometry.get() {
                let is_open = self.inner.is_menu_open.get();
                let crack = self.inner.config.get().sliding_crack;
                let decision = gesture::classify_down(&geometry, is_open, event.x(), crack);
                log::debug!(
                    "intercept down at x={} open={is_open}: {decision:?}",
                    event.x()
                );
                if decision == InterceptDecision::PassToChild {
                    event.request_disallow_intercept(true);
                    intercept = false;
                }
            }
        }
        intercept
    }

    /// Handle an event of a gesture the menu owns. Returns whether it was
    /// handled.
    pub fn on_touch_event(&self, event: &PointerEvent) -> Result<bool, SlidingMenuError> {
        log::debug!("touch {:?} at x={}", event.kind, event.x());
        let Some(geometry) = self.inner.geometry.get() else {
            return Ok(false);
        };

        let mut session = self.inner.session.get();
        let handled = match event.kind {
            PointerEventKind::Down => {
                session.on_down(event.x());
                self.inner.session.set(session);
                self.inner.scroll.on_touch_event(event)
            }
            PointerEventKind::Move => {
                session.on_move(event.x());
                self.inner.session.set(session);
                self.inner.scroll.on_touch_event(event)
            }
            PointerEventKind::Up => {
                let moved = session.on_release();
                self.inner.session.set(session);
                let container_handled = self.inner.scroll.on_touch_event(event);

                let outcome = gesture::classify_release(
                    &geometry,
                    moved,
                    self.inner.scroll.scroll_x(),
                    self.inner.is_menu_open.get(),
                    event.x(),
                );
                log::debug!("release classified as {outcome:?}");
                match outcome {
                    ReleaseOutcome::DragClose | ReleaseOutcome::TapClose => self.close_menu(),
                    ReleaseOutcome::DragOpen => self.open_menu(),
                    ReleaseOutcome::FallThrough => self.settle(),
                }
                outcome.is_toggle() || container_handled
            }
            PointerEventKind::Cancel => {
                session.on_release();
                self.inner.session.set(session);
                self.inner.scroll.on_touch_event(event);
                self.settle();
                true
            }
        };

        self.sync_scroll()?;
        Ok(handled)
    }

    /// Go back to wherever the open flag says the menu is, without notifying
    /// anyone. Used when a gesture ends without toggling.
    fn settle(&self) {
        let Some(geometry) = self.inner.geometry.get() else {
            return;
        };
        let target = if self.inner.is_menu_open.get() {
            geometry.open_position()
        } else {
            geometry.close_position()
        };
        if self.inner.scroll.scroll_x() != target {
            log::debug!("settling to {target}");
            self.inner.scroll.smooth_scroll_to(target);
        }
    }

    /// Pick up a scroll offset change made outside the menu's own calls, such
    /// as an animation frame. Returns whether the offset had changed.
    pub fn sync_scroll(&self) -> Result<bool, SlidingMenuError> {
        let current = self.inner.scroll.scroll_x();
        let previous = self.inner.last_scroll_x.replace(current);
        if previous == current {
            return Ok(false);
        }
        log::trace!("scroll changed {previous} -> {current}");
        self.on_scroll_changed(current)?;
        Ok(true)
    }

    fn on_scroll_changed(&self, scroll_x: i32) -> Result<(), SlidingMenuError> {
        let content = self
            .content_panel()
            .ok_or(SlidingMenuError::ContentPanelUnset)?;
        let geometry = self.inner.geometry.get().ok_or(SlidingMenuError::NotMeasured)?;
        let config = self.inner.config.get();
        let update = SlideUpdate::compute(&geometry, scroll_x, config.least_content_scale);

        if !self.is_touching() {
            match update.boundary {
                Some(SlideBoundary::Closed) => self.inner.is_menu_open.set(false),
                Some(SlideBoundary::Open) => self.inner.is_menu_open.set(true),
                None => {}
            }
        }

        let pivot = geometry.content_pivot(content.size());
        content.set_graphics_layer(GraphicsLayer::uniform_scale(update.content_scale, pivot));

        let menu = self.menu_panel();
        self.inner
            .listeners
            .notify(MenuNotification::Slide(update.open_fraction), menu.as_ref());
        Ok(())
    }

    /// Animate open. Listeners hear `on_menu_opened` only if the menu was
    /// closed.
    pub fn open_menu(&self) {
        match self.inner.geometry.get() {
            Some(geometry) => self.inner.scroll.smooth_scroll_to(geometry.open_position()),
            None => log::debug!("open_menu before measure; only the flag changes"),
        }
        if !self.inner.is_menu_open.replace(true) {
            let menu = self.menu_panel();
            self.inner
                .listeners
                .notify(MenuNotification::Opened, menu.as_ref());
        }
    }

    /// Animate closed. Listeners hear `on_menu_closed` only if the menu was
    /// open.
    pub fn close_menu(&self) {
        match self.inner.geometry.get() {
            Some(geometry) => self
                .inner
                .scroll
                .smooth_scroll_to(geometry.close_position()),
            None => log::debug!("close_menu before measure; only the flag changes"),
        }
        if self.inner.is_menu_open.replace(false) {
            let menu = self.menu_panel();
            self.inner
                .listeners
                .notify(MenuNotification::Closed, menu.as_ref());
        }
    }

    /// Where `panel` currently shows in viewport coordinates, if it is the
    /// menu or the content panel and the menu has been measured.
    pub fn panel_bounds(&self, panel: &Panel) -> Option<Rect> {
        let geometry = self.inner.geometry.get()?;
        let scroll_x = self.inner.scroll.scroll_x();
        let height = panel.height() as f32;
        if self.content_panel().is_some_and(|content| content.ptr_eq(panel)) {
            Some(geometry.content_bounds(scroll_x, height))
        } else if self.menu_panel().is_some_and(|menu| menu.ptr_eq(panel)) {
            Some(geometry.menu_bounds(scroll_x, height))
        } else {
            None
        }
    }

    /// The panel whose visible bounds contain the point. Content wins where
    /// both would claim it.
    pub fn panel_at(&self, x: f32, y: f32) -> Option<Panel> {
        [self.content_panel(), self.menu_panel()]
            .into_iter()
            .flatten()
            .find(|panel| {
                self.panel_bounds(panel)
                    .is_some_and(|bounds| bounds.contains(x, y))
            })
    }
}

impl<S: ScrollContainer + 'static> Clone for SlidingMenu<S> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<S: ScrollContainer + 'static> std::fmt::Debug for SlidingMenu<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SlidingMenu")
            .field("scroll_x", &self.inner.scroll.scroll_x())
            .field("is_menu_open", &self.inner.is_menu_open.get())
            .field("geometry", &self.inner.geometry.get())
            .field("session", &self.inner.session.get())
            .finish()
    }
}

/// Non-owning handle to a [`SlidingMenu`].
pub struct WeakSlidingMenu<S: ScrollContainer + 'static = HorizontalScrollState> {
    inner: Weak<SlidingMenuInner<S>>,
}

impl<S: ScrollContainer + 'static> WeakSlidingMenu<S> {
    pub fn upgrade(&self) -> Option<SlidingMenu<S>> {
        self.inner.upgrade().map(|inner| SlidingMenu { inner })
    }
}

impl<S: ScrollContainer + 'static> Clone for WeakSlidingMenu<S> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

#[cfg(test)]
#[path = "tests/sliding_menu_tests.rs"]
mod tests;
