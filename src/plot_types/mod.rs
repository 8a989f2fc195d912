// Plot types module

pub mod heatmap;

pub use heatmap::HeatmapPlot;

use crate::transform::PlotTransform;
use gpui::*;

/// Trait for rendering plot types
pub trait PlotRenderer: Send + Sync {
    fn render(
        &self,
        window: &mut Window,
        transform: &PlotTransform,
        series_id: &str,
        cx: &mut App,
    );

    /// Get min/max bounds for auto-fitting (x_min, x_max, y_min, y_max)
    fn get_min_max(&self) -> Option<(f64, f64, f64, f64)>;

    /// Get Y min/max range within a specific X range.
    fn get_y_range(&self, x_min: f64, x_max: f64) -> Option<(f64, f64)>;
}
