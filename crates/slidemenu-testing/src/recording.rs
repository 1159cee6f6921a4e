//! Listener that remembers everything it was told.

use slidemenu_ui::{Panel, PanelId, SlidingListener};
use std::cell::RefCell;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RecordedEvent {
    Slide { menu: Option<PanelId>, offset: f32 },
    Opened { menu: Option<PanelId> },
    Closed { menu: Option<PanelId> },
}

impl RecordedEvent {
    pub fn is_slide(&self) -> bool {
        matches!(self, RecordedEvent::Slide { .. })
    }
}

#[derive(Debug, Default)]
pub struct RecordingListener {
    events: RefCell<Vec<RecordedEvent>>,
}

impl RecordingListener {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<RecordedEvent> {
        self.events.borrow().clone()
    }

    /// Return the recorded events and start over.
    pub fn take(&self) -> Vec<RecordedEvent> {
        std::mem::take(&mut *self.events.borrow_mut())
    }

    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }

    pub fn slide_offsets(&self) -> Vec<f32> {
        self.events
            .borrow()
            .iter()
            .filter_map(|event| match event {
                RecordedEvent::Slide { offset, .. } => Some(*offset),
                _ => None,
            })
            .collect()
    }

    pub fn opened_count(&self) -> usize {
        self.count(|event| matches!(event, RecordedEvent::Opened { .. }))
    }

    pub fn closed_count(&self) -> usize {
        self.count(|event| matches!(event, RecordedEvent::Closed { .. }))
    }

    fn count(&self, predicate: impl Fn(&RecordedEvent) -> bool) -> usize {
        self.events.borrow().iter().filter(|e| predicate(e)).count()
    }
}

impl SlidingListener for RecordingListener {
    fn on_menu_slide(&self, menu: Option<&Panel>, slide_offset: f32) {
        self.events.borrow_mut().push(RecordedEvent::Slide {
            menu: menu.map(Panel::id),
            offset: slide_offset,
        });
    }

    fn on_menu_opened(&self, menu: Option<&Panel>) {
        self.events.borrow_mut().push(RecordedEvent::Opened {
            menu: menu.map(Panel::id),
        });
    }

    fn on_menu_closed(&self, menu: Option<&Panel>) {
        self.events.borrow_mut().push(RecordedEvent::Closed {
            menu: menu.map(Panel::id),
        });
    }
}
