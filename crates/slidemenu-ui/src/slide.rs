//! Scroll offset to slide progress and content scale.

use crate::MenuGeometry;

/// Interpolate the content scale: `least_content_scale` at fraction 0 (open),
/// 1.0 at fraction 1 (closed).
pub fn content_scale(scroll_fraction: f32, least_content_scale: f32) -> f32 {
    least_content_scale + scroll_fraction * (1.0 - least_content_scale)
}

/// Which end of the scroll range an offset sits on, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideBoundary {
    Open,
    Closed,
}

/// Everything a single scroll offset change implies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlideUpdate {
    pub scroll_x: i32,
    /// 1 closed, 0 open.
    pub scroll_fraction: f32,
    /// 0 closed, 1 open. Reported to listeners.
    pub open_fraction: f32,
    pub content_scale: f32,
    pub boundary: Option<SlideBoundary>,
}

impl SlideUpdate {
    pub fn compute(geometry: &MenuGeometry, scroll_x: i32, least_content_scale: f32) -> Self {
        let scroll_fraction = geometry.scroll_fraction(scroll_x);
        // Exact integer comparison against the cached positions rather than
        // float equality on the interpolated scale.
        let boundary = if scroll_x == geometry.close_position() {
            Some(SlideBoundary::Closed)
        } else if scroll_x == geometry.open_position() {
            Some(SlideBoundary::Open)
        } else {
            None
        };
        Self {
            scroll_x,
            scroll_fraction,
            open_fraction: 1.0 - scroll_fraction,
            content_scale: content_scale(scroll_fraction, least_content_scale),
            boundary,
        }
    }
}
