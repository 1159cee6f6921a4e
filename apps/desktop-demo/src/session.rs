use slidemenu_ui::{
    FrameClock, LayoutDirection, Panel, PointerEvent, SlidingListener, SlidingMenu,
    SlidingMenuConfig, SlidingMenuError, TouchDispatcher,
};
use std::rc::Rc;

const FRAME_NANOS: u64 = 16_666_667;
const MAX_FRAMES: u32 = 600;

/// Logs everything the menu reports.
struct LoggingListener;

impl SlidingListener for LoggingListener {
    fn on_menu_slide(&self, _menu: Option<&Panel>, slide_offset: f32) {
        log::debug!("slide {slide_offset:.3}");
    }

    fn on_menu_opened(&self, menu: Option<&Panel>) {
        log::info!("opened {}", menu.map(Panel::label).unwrap_or("<none>"));
    }

    fn on_menu_closed(&self, menu: Option<&Panel>) {
        log::info!("closed {}", menu.map(Panel::label).unwrap_or("<none>"));
    }
}

/// A sliding menu plus everything a host window would own around it.
pub struct Session {
    clock: FrameClock,
    menu: SlidingMenu,
    dispatcher: TouchDispatcher,
    screen_width: i32,
    height: f32,
    frame_time_nanos: u64,
}

impl Session {
    pub fn new(
        config: SlidingMenuConfig,
        screen_width: i32,
        height: i32,
        direction: LayoutDirection,
    ) -> Result<Self, SlidingMenuError> {
        let clock = FrameClock::new();
        let menu = SlidingMenu::new(config, clock.clone());
        menu.set_sliding_listener(Rc::new(LoggingListener));

        let menu_panel = Panel::new("menu").with_height(height);
        let content_panel = Panel::new("content").with_height(height);
        content_panel.set_pointer_handler(|event| {
            log::info!("content received {:?} at x={:.0}", event.kind, event.x());
            true
        });

        menu.on_attached();
        menu.measure(screen_width, direction, &[menu_panel, content_panel])?;
        menu.layout(true)?;

        Ok(Self {
            clock,
            menu,
            dispatcher: TouchDispatcher::new(),
            screen_width,
            height: height as f32,
            frame_time_nanos: 0,
        })
    }

    pub fn menu(&self) -> &SlidingMenu {
        &self.menu
    }

    pub fn screen_width(&self) -> f32 {
        self.screen_width as f32
    }

    /// Drag horizontally from `from_x` to `to_x` at mid height.
    pub fn swipe(&mut self, from_x: f32, to_x: f32) -> Result<(), SlidingMenuError> {
        const STEPS: u32 = 12;
        let y = self.height / 2.0;
        self.send(PointerEvent::down(from_x, y))?;
        for step in 1..=STEPS {
            let x = from_x + (to_x - from_x) * step as f32 / STEPS as f32;
            self.send(PointerEvent::moved(x, y))?;
            self.run_frame()?;
        }
        self.send(PointerEvent::up(to_x, y))?;
        self.settle()
    }

    pub fn tap(&mut self, x: f32) -> Result<(), SlidingMenuError> {
        let y = self.height / 2.0;
        self.send(PointerEvent::down(x, y))?;
        self.send(PointerEvent::up(x, y))?;
        self.settle()
    }

    /// Run frames until the scroll animation ends.
    pub fn settle(&mut self) -> Result<(), SlidingMenuError> {
        let mut frames = 0;
        while self.clock.has_pending_frame_callbacks() && frames < MAX_FRAMES {
            self.run_frame()?;
            frames += 1;
        }
        log::info!(
            "settled after {frames} frame(s): scroll_x={} open={}",
            self.menu.scroll_x(),
            self.menu.is_menu_open()
        );
        Ok(())
    }

    fn run_frame(&mut self) -> Result<(), SlidingMenuError> {
        self.frame_time_nanos += FRAME_NANOS;
        self.clock.drain_frame_callbacks(self.frame_time_nanos);
        self.menu.sync_scroll()?;
        Ok(())
    }

    fn send(&self, event: PointerEvent) -> Result<(), SlidingMenuError> {
        let handled = self.dispatcher.dispatch(&self.menu, &event)?;
        log::trace!("{:?} at x={:.0} handled={handled}", event.kind, event.x());
        Ok(())
    }
}
