//! Content-rect bounds checks used for culling.

use crate::utils::PixelsExt;
use gpui::{Bounds, Pixels};

/// Truncates to 1/100 px so values that only differ by float noise compare equal.
fn truncate(v: f32) -> f32 {
    (v * 100.0).trunc() / 100.0
}

/// The area of the chart that holds data, in window pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewPortHandler {
    content_rect: Bounds<Pixels>,
}

impl ViewPortHandler {
    pub fn new(content_rect: Bounds<Pixels>) -> Self {
        Self { content_rect }
    }

    pub fn content_rect(&self) -> Bounds<Pixels> {
        self.content_rect
    }

    pub fn content_width(&self) -> f32 {
        self.content_rect.size.width.as_f32()
    }

    pub fn content_height(&self) -> f32 {
        self.content_rect.size.height.as_f32()
    }

    pub fn content_left(&self) -> f32 {
        self.content_rect.origin.x.as_f32()
    }

    pub fn content_right(&self) -> f32 {
        self.content_left() + self.content_width()
    }

    pub fn content_top(&self) -> f32 {
        self.content_rect.origin.y.as_f32()
    }

    pub fn content_bottom(&self) -> f32 {
        self.content_top() + self.content_height()
    }

    pub fn is_in_bounds_top(&self, y: f32) -> bool {
        self.content_top() <= y
    }

    pub fn is_in_bounds_bottom(&self, y: f32) -> bool {
        self.content_bottom() >= truncate(y)
    }

    /// Allows 1px of overshoot on the left edge.
    pub fn is_in_bounds_left(&self, x: f32) -> bool {
        self.content_left() <= x + 1.0
    }

    /// Allows 1px of overshoot on the right edge.
    pub fn is_in_bounds_right(&self, x: f32) -> bool {
        self.content_right() >= truncate(x) - 1.0
    }

    pub fn is_in_bounds_y(&self, y: f32) -> bool {
        self.is_in_bounds_top(y) && self.is_in_bounds_bottom(y)
    }

    pub fn is_in_bounds_x(&self, x: f32) -> bool {
        self.is_in_bounds_left(x) && self.is_in_bounds_right(x)
    }
}
