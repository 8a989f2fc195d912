use gpui::{Pixels, Point, px};

/// Externally chosen entry to highlight, addressed by dataset index and (x, y).
///
/// The renderer records where it drew the highlight so that tooltips or
/// markers can be anchored to it.
#[derive(Clone, Debug, PartialEq)]
pub struct Highlight {
    pub data_set_index: usize,
    pub x: f64,
    pub y: f64,
    draw_x: Option<f32>,
    draw_y: Option<f32>,
}

impl Highlight {
    pub fn new(data_set_index: usize, x: f64, y: f64) -> Self {
        Self {
            data_set_index,
            x,
            y,
            draw_x: None,
            draw_y: None,
        }
    }

    pub fn set_draw(&mut self, x: f32, y: f32) {
        self.draw_x = Some(x);
        self.draw_y = Some(y);
    }

    pub fn draw_position(&self) -> Option<Point<Pixels>> {
        Some(Point::new(px(self.draw_x?), px(self.draw_y?)))
    }
}
