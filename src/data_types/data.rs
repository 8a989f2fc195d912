use gpui::{Pixels, SharedString};

/// An image drawn next to a cell, carried by its entry.
///
/// `width`/`height` are the image's intrinsic pixel dimensions.
#[derive(Clone, Debug, PartialEq)]
pub struct Icon {
    pub name: SharedString,
    pub width: Pixels,
    pub height: Pixels,
}

impl Icon {
    pub fn new(name: impl Into<SharedString>, width: Pixels, height: Pixels) -> Self {
        Self {
            name: name.into(),
            width,
            height,
        }
    }
}

/// One logical data point: grid column `x`, row `y`, and the magnitude `size`
/// that drives both the cell color and its visibility.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BubbleEntry {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub icon: Option<Icon>,
}

impl BubbleEntry {
    pub fn new(x: f64, y: f64, size: f64) -> Self {
        Self {
            x,
            y,
            size,
            icon: None,
        }
    }

    pub fn with_icon(mut self, icon: Icon) -> Self {
        self.icon = Some(icon);
        self
    }
}

/// How `entry_index` resolves an x value that falls between two entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Rounding {
    Up,
    Down,
    #[default]
    Closest,
}
