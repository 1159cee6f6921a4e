//! Per-layout-pass geometry of the menu.
//!
//! Everything here is derived from three inputs fixed at measure time: the
//! screen width, the sliding padding and the layout direction. The host
//! container scrolls a strip of `menu_width + screen_width` pixels through a
//! `screen_width` viewport, so the scroll offset lives in `[0, menu_width]`.
//!
//! ```text
//! LTR strip:  [ menu 0..menu_width ][ content menu_width..menu_width+screen ]
//!             open = 0, close = menu_width
//! RTL strip:  [ content 0..screen ][ menu screen..screen+menu_width ]
//!             open = menu_width, close = 0
//! ```

use crate::SlidingMenuError;
use slidemenu_foundation::LayoutDirection;
use slidemenu_ui_graphics::{Point, Rect, Size};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuGeometry {
    direction: LayoutDirection,
    screen_width: i32,
    sliding_padding: i32,
    menu_width: i32,
}

impl MenuGeometry {
    pub fn new(
        screen_width: i32,
        sliding_padding: i32,
        direction: LayoutDirection,
    ) -> Result<Self, SlidingMenuError> {
        let menu_width = screen_width - sliding_padding;
        if menu_width <= 0 {
            return Err(SlidingMenuError::InvalidMenuWidth {
                screen_width,
                sliding_padding,
            });
        }
        Ok(Self {
            direction,
            screen_width,
            sliding_padding,
            menu_width,
        })
    }

    pub fn direction(&self) -> LayoutDirection {
        self.direction
    }

    pub fn screen_width(&self) -> i32 {
        self.screen_width
    }

    pub fn sliding_padding(&self) -> i32 {
        self.sliding_padding
    }

    pub fn menu_width(&self) -> i32 {
        self.menu_width
    }

    pub fn half_menu_width(&self) -> i32 {
        self.menu_width / 2
    }

    pub fn open_position(&self) -> i32 {
        if self.direction.is_ltr() {
            0
        } else {
            self.menu_width
        }
    }

    pub fn close_position(&self) -> i32 {
        if self.direction.is_ltr() {
            self.menu_width
        } else {
            0
        }
    }

    /// Scroll offset normalized so that 1 is closed and 0 is open. This is the
    /// value the content scale is interpolated from.
    pub fn scroll_fraction(&self, scroll_x: i32) -> f32 {
        let menu_width = self.menu_width as f32;
        if self.direction.is_ltr() {
            scroll_x as f32 / menu_width
        } else {
            (self.menu_width - scroll_x) as f32 / menu_width
        }
    }

    /// How far open the menu is: 0 closed, 1 open.
    pub fn open_fraction(&self, scroll_x: i32) -> f32 {
        1.0 - self.scroll_fraction(scroll_x)
    }

    pub fn is_past_half_toward_close(&self, scroll_x: i32) -> bool {
        if self.direction.is_ltr() {
            scroll_x > self.half_menu_width()
        } else {
            scroll_x < self.half_menu_width()
        }
    }

    pub fn is_past_half_toward_open(&self, scroll_x: i32) -> bool {
        if self.direction.is_ltr() {
            scroll_x < self.half_menu_width()
        } else {
            scroll_x > self.half_menu_width()
        }
    }

    /// Whether `x` falls on the strip of content still showing beside an open
    /// menu.
    pub fn is_on_content_strip(&self, x: i32) -> bool {
        if self.direction.is_ltr() {
            x > self.screen_width - self.sliding_padding
        } else {
            x < self.sliding_padding
        }
    }

    /// Whether `x` falls on the open menu itself. The boundary pixel belongs
    /// to neither side.
    pub fn is_over_open_menu(&self, x: i32) -> bool {
        if self.direction.is_ltr() {
            x < self.screen_width - self.sliding_padding
        } else {
            x > self.sliding_padding
        }
    }

    /// Whether `x` is further than `sliding_crack` from the edge the menu
    /// slides in from.
    pub fn is_beyond_sliding_crack(&self, x: i32, sliding_crack: i32) -> bool {
        if self.direction.is_ltr() {
            x > sliding_crack
        } else {
            x < self.screen_width - sliding_crack
        }
    }

    /// Scale pivot for the content panel: the middle of the edge it shares
    /// with the menu.
    pub fn content_pivot(&self, content: Size) -> Point {
        let x = if self.direction.is_ltr() {
            0.0
        } else {
            content.width
        };
        Point::new(x, content.height / 2.0)
    }

    /// Menu bounds in viewport coordinates at the given scroll offset.
    pub fn menu_bounds(&self, scroll_x: i32, height: f32) -> Rect {
        let left = if self.direction.is_ltr() {
            0
        } else {
            self.screen_width
        };
        Rect::from_size(Size::new(self.menu_width as f32, height))
            .translate((left - scroll_x) as f32, 0.0)
    }

    /// Content bounds in viewport coordinates at the given scroll offset.
    pub fn content_bounds(&self, scroll_x: i32, height: f32) -> Rect {
        let left = if self.direction.is_ltr() {
            self.menu_width
        } else {
            0
        };
        Rect::from_size(Size::new(self.screen_width as f32, height))
            .translate((left - scroll_x) as f32, 0.0)
    }
}
