//! Horizontally sliding drawer menu.
//!
//! A [`SlidingMenu`] reveals a menu panel beside a content panel, driven by
//! drag and tap gestures, and scales the content down as the menu opens.

mod config;
pub mod dispatch;
mod error;
pub mod geometry;
pub mod gesture;
mod listener;
mod panel;
pub mod slide;
mod sliding_menu;

pub use config::{
    SlidingMenuConfig, DEFAULT_SLIDING_CRACK, DEFAULT_SLIDING_PADDING, LEAST_CONTENT_SCALE,
    MAX_NOTIFY_DEPTH,
};
pub use dispatch::{TouchDispatcher, TouchTarget};
pub use error::SlidingMenuError;
pub use geometry::MenuGeometry;
pub use gesture::{InterceptDecision, ReleaseOutcome, TouchPhase, TouchSession};
pub use listener::SlidingListener;
pub use panel::{Panel, PanelId};
pub use slide::{content_scale, SlideBoundary, SlideUpdate};
pub use sliding_menu::{SlidingMenu, WeakSlidingMenu};

// Re-export the pieces hosts need to drive the widget.
pub use slidemenu_animation::{AnimationSpec, Easing};
pub use slidemenu_core::FrameClock;
pub use slidemenu_foundation::{
    HorizontalScrollState, LayoutDirection, PointerEvent, PointerEventKind, ScrollConfig,
    ScrollContainer,
};
pub use slidemenu_ui_graphics::{GraphicsLayer, Point, Rect, Size};

pub mod prelude {
    pub use crate::{
        FrameClock, LayoutDirection, Panel, PointerEvent, ScrollContainer, SlidingListener,
        SlidingMenu, SlidingMenuConfig, SlidingMenuError, TouchDispatcher,
    };
}
