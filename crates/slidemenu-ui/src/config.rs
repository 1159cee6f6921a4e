use slidemenu_foundation::ScrollConfig;

/// Default width of the edge strip that accepts a drag-open gesture.
pub const DEFAULT_SLIDING_CRACK: i32 = 50;
/// Default gap between the open menu and the far screen edge.
pub const DEFAULT_SLIDING_PADDING: i32 = 160;
/// Content panel scale when the menu is fully open.
pub const LEAST_CONTENT_SCALE: f32 = 0.9;
/// Nesting limit for listener notifications triggered from inside listeners.
pub const MAX_NOTIFY_DEPTH: u32 = 16;

/// Construction-time options for [`crate::SlidingMenu`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlidingMenuConfig {
    /// Edge hit-test width in pixels.
    pub sliding_crack: i32,
    /// Menu/content gap in pixels; `menu_width = screen_width - sliding_padding`.
    pub sliding_padding: i32,
    pub least_content_scale: f32,
    /// Used when the menu builds its own [`slidemenu_foundation::HorizontalScrollState`].
    pub scroll: ScrollConfig,
}

impl SlidingMenuConfig {
    pub fn with_sliding_crack(mut self, sliding_crack: i32) -> Self {
        self.sliding_crack = sliding_crack;
        self
    }

    pub fn with_sliding_padding(mut self, sliding_padding: i32) -> Self {
        self.sliding_padding = sliding_padding;
        self
    }

    pub fn with_least_content_scale(mut self, least_content_scale: f32) -> Self {
        self.least_content_scale = least_content_scale.clamp(0.0, 1.0);
        self
    }

    pub fn with_scroll_config(mut self, scroll: ScrollConfig) -> Self {
        self.scroll = scroll;
        self
    }
}

impl Default for SlidingMenuConfig {
    fn default() -> Self {
        Self {
            sliding_crack: DEFAULT_SLIDING_CRACK,
            sliding_padding: DEFAULT_SLIDING_PADDING,
            least_content_scale: LEAST_CONTENT_SCALE,
            scroll: ScrollConfig::default(),
        }
    }
}
