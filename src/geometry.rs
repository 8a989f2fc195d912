//! Cell and shape sizing derived from the grid and the content rect.

use crate::transform::PlotTransform;
use crate::viewport::ViewPortHandler;

/// Number of grid columns (`x_max`) and rows (`y_max`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GridExtent {
    pub x_max: usize,
    pub y_max: usize,
}

impl GridExtent {
    pub fn new(x_max: usize, y_max: usize) -> Self {
        Self { x_max, y_max }
    }

    /// Both extents are non-zero, so a cell size can be derived.
    pub fn is_drawable(&self) -> bool {
        self.x_max > 0 && self.y_max > 0
    }
}

/// Pixel size shared by every cell of a render pass.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CellGeometry {
    pub width: f32,
    pub height: f32,
}

/// Divides the content rect into `x_max` by `y_max` cells, minus `interval`
/// on each axis. `None` when either extent is zero.
pub fn cell_size(
    content_width: f32,
    content_height: f32,
    extent: GridExtent,
    interval: f32,
) -> Option<CellGeometry> {
    if !extent.is_drawable() {
        return None;
    }
    Some(CellGeometry {
        width: content_width / extent.x_max as f32 - interval,
        height: content_height / extent.y_max as f32 - interval,
    })
}

/// Pixel size for an entry of magnitude `entry_size`.
///
/// Normalized sizes scale with the square root of `entry_size / max_size`
/// so rendered area tracks the value; otherwise `entry_size` is used as-is.
pub fn shape_size(entry_size: f64, max_size: f64, reference: f32, normalize: bool) -> f32 {
    let factor = if normalize {
        if max_size == 0.0 {
            1.0
        } else {
            (entry_size / max_size).sqrt() as f32
        }
    } else {
        entry_size as f32
    };
    reference * factor
}

/// Smaller of the content height and the pixel width of one x unit.
pub fn reference_size(transform: &PlotTransform, viewport: &ViewPortHandler) -> f32 {
    let mut probe = [0.0, 0.0, 1.0, 0.0];
    transform.points_to_pixels(&mut probe);

    let unit_width = (probe[2] - probe[0]).abs();
    let content_height = (viewport.content_bottom() - viewport.content_top()).abs();
    content_height.min(unit_width)
}
