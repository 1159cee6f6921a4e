//! Headless harness around a measured and laid out [`SlidingMenu`].
//!
//! ```
//! use slidemenu_testing::SlidingMenuTestRule;
//! use slidemenu_ui::LayoutDirection;
//!
//! let mut rule = SlidingMenuTestRule::new(800, LayoutDirection::Ltr).unwrap();
//! rule.menu().open_menu();
//! rule.pump_until_idle().unwrap();
//! assert_eq!(rule.menu().scroll_x(), 0);
//! ```

use crate::RecordingListener;
use slidemenu_core::FrameClock;
use slidemenu_foundation::{LayoutDirection, PointerEvent};
use slidemenu_ui::{Panel, SlidingMenu, SlidingMenuConfig, SlidingMenuError, TouchDispatcher};
use slidemenu_ui_graphics::Point;
use std::rc::Rc;

/// One 60 Hz frame, roughly.
pub const FRAME_NANOS: u64 = 16_000_000;

/// Height given to both panels.
pub const PANEL_HEIGHT: i32 = 600;

/// Frames after which [`SlidingMenuTestRule::pump_until_idle`] gives up.
const MAX_IDLE_FRAMES: usize = 1_000;

pub struct SlidingMenuTestRule {
    clock: FrameClock,
    menu: SlidingMenu,
    menu_panel: Panel,
    content_panel: Panel,
    dispatcher: TouchDispatcher,
    listener: Rc<RecordingListener>,
    frame_time_nanos: u64,
}

impl SlidingMenuTestRule {
    /// Rule with the default configuration.
    pub fn new(screen_width: i32, direction: LayoutDirection) -> Result<Self, SlidingMenuError> {
        Self::with_config(SlidingMenuConfig::default(), screen_width, direction)
    }

    /// Build, attach, measure and lay out a menu. The recording listener is
    /// registered first and starts out empty.
    pub fn with_config(
        config: SlidingMenuConfig,
        screen_width: i32,
        direction: LayoutDirection,
    ) -> Result<Self, SlidingMenuError> {
        let clock = FrameClock::new();
        let menu = SlidingMenu::new(config, clock.clone());
        let menu_panel = Panel::new("menu").with_height(PANEL_HEIGHT);
        let content_panel = Panel::new("content").with_height(PANEL_HEIGHT);
        let listener = Rc::new(RecordingListener::new());
        menu.set_sliding_listener(listener.clone());

        menu.on_attached();
        menu.measure(
            screen_width,
            direction,
            &[menu_panel.clone(), content_panel.clone()],
        )?;
        menu.layout(true)?;
        listener.clear();

        Ok(Self {
            clock,
            menu,
            menu_panel,
            content_panel,
            dispatcher: TouchDispatcher::new(),
            listener,
            frame_time_nanos: 0,
        })
    }

    pub fn menu(&self) -> &SlidingMenu {
        &self.menu
    }

    pub fn menu_panel(&self) -> &Panel {
        &self.menu_panel
    }

    pub fn content_panel(&self) -> &Panel {
        &self.content_panel
    }

    pub fn clock(&self) -> &FrameClock {
        &self.clock
    }

    pub fn dispatcher(&self) -> &TouchDispatcher {
        &self.dispatcher
    }

    pub fn listener(&self) -> &RecordingListener {
        &self.listener
    }

    pub fn frame_time_nanos(&self) -> u64 {
        self.frame_time_nanos
    }

    /// Inject a touch gesture through the dispatcher, as a host would.
    pub fn perform_touch_input<R>(
        &self,
        block: impl FnOnce(&mut TouchInjectionScope<'_>) -> Result<R, SlidingMenuError>,
    ) -> Result<R, SlidingMenuError> {
        let mut scope = TouchInjectionScope {
            menu: &self.menu,
            dispatcher: &self.dispatcher,
            position: Point::ZERO,
        };
        block(&mut scope)
    }

    /// Run one frame and let the menu observe the resulting offset.
    pub fn advance_frame(&mut self) -> Result<(), SlidingMenuError> {
        self.frame_time_nanos += FRAME_NANOS;
        let ran = self.clock.drain_frame_callbacks(self.frame_time_nanos);
        log::trace!("frame at {}ns ran {ran} callback(s)", self.frame_time_nanos);
        self.menu.sync_scroll()?;
        Ok(())
    }

    pub fn advance_time_by(&mut self, millis: u64) -> Result<(), SlidingMenuError> {
        let frames = (millis * 1_000_000).div_ceil(FRAME_NANOS);
        for _ in 0..frames {
            self.advance_frame()?;
        }
        Ok(())
    }

    /// Advance frames until no frame callback is pending. Returns the number
    /// of frames run.
    pub fn pump_until_idle(&mut self) -> Result<usize, SlidingMenuError> {
        let mut frames = 0;
        while self.clock.has_pending_frame_callbacks() && frames < MAX_IDLE_FRAMES {
            self.advance_frame()?;
            frames += 1;
        }
        if frames == MAX_IDLE_FRAMES {
            log::warn!("still animating after {MAX_IDLE_FRAMES} frames");
        }
        Ok(frames)
    }
}

/// Pointer injection for one or more gestures. Remembers where the pointer
/// was last so moves and releases can omit coordinates.
pub struct TouchInjectionScope<'a> {
    menu: &'a SlidingMenu,
    dispatcher: &'a TouchDispatcher,
    position: Point,
}

impl TouchInjectionScope<'_> {
    pub fn position(&self) -> Point {
        self.position
    }

    pub fn down(&mut self, x: f32, y: f32) -> Result<bool, SlidingMenuError> {
        self.send(PointerEvent::down(x, y))
    }

    pub fn move_to(&mut self, x: f32, y: f32) -> Result<bool, SlidingMenuError> {
        self.send(PointerEvent::moved(x, y))
    }

    pub fn move_by(&mut self, dx: f32, dy: f32) -> Result<bool, SlidingMenuError> {
        let target = Point::new(self.position.x + dx, self.position.y + dy);
        self.move_to(target.x, target.y)
    }

    pub fn up(&mut self) -> Result<bool, SlidingMenuError> {
        self.send(PointerEvent::up(self.position.x, self.position.y))
    }

    pub fn cancel(&mut self) -> Result<bool, SlidingMenuError> {
        self.send(PointerEvent::cancel(self.position.x, self.position.y))
    }

    /// Press at `from`, move in `steps` equal moves to `to` and release.
    /// Returns whether the release was handled.
    pub fn swipe(
        &mut self,
        from: (f32, f32),
        to: (f32, f32),
        steps: u32,
    ) -> Result<bool, SlidingMenuError> {
        self.down(from.0, from.1)?;
        let steps = steps.max(1);
        for i in 1..=steps {
            let t = i as f32 / steps as f32;
            self.move_to(from.0 + (to.0 - from.0) * t, from.1 + (to.1 - from.1) * t)?;
        }
        self.up()
    }

    /// Press and release at the same point.
    pub fn click(&mut self, x: f32, y: f32) -> Result<bool, SlidingMenuError> {
        self.down(x, y)?;
        self.up()
    }

    fn send(&mut self, event: PointerEvent) -> Result<bool, SlidingMenuError> {
        self.position = event.position;
        self.dispatcher.dispatch(self.menu, &event)
    }
}
