// Heatmap plot implementation

use std::collections::HashMap;
use std::sync::Arc;

use gpui::*;
use parking_lot::Mutex;

use super::PlotRenderer;
use crate::animation::ChartAnimator;
use crate::builder::HeatmapModel;
use crate::canvas::{Canvas, WindowCanvas};
use crate::data_types::{BubbleData, Highlight};
use crate::renderer::{DataRenderer, HeatMapRenderer, RenderContext};
use crate::transform::PlotTransform;
use crate::viewport::ViewPortHandler;

/// Logical width and height of one cell; it extends right and up from its entry.
const CELL_SPAN: f64 = 1.0;

/// Heat map as a chart plot: owns the data, the renderer state and the
/// current highlights, and renders a full frame on every paint.
pub struct HeatmapPlot {
    pub data: BubbleData,
    renderer: Mutex<HeatMapRenderer>,
    animator: Mutex<ChartAnimator>,
    highlights: Mutex<Vec<Highlight>>,
    icons: HashMap<SharedString, Arc<RenderImage>>,
}

impl HeatmapPlot {
    pub fn new(data: BubbleData, renderer: HeatMapRenderer) -> Self {
        Self {
            data,
            renderer: Mutex::new(renderer),
            animator: Mutex::new(ChartAnimator::default()),
            highlights: Mutex::new(Vec::new()),
            icons: HashMap::new(),
        }
    }

    pub fn from_model(model: HeatmapModel, renderer: HeatMapRenderer) -> Self {
        Self::new(model.data, renderer)
    }

    pub fn register_icon(&mut self, name: impl Into<SharedString>, image: Arc<RenderImage>) {
        self.icons.insert(name.into(), image);
    }

    pub fn set_value_range(&self, max: f64, min: f64) {
        self.renderer.lock().set_value_range(max, min);
    }

    pub fn set_highlights(&self, highlights: Vec<Highlight>) {
        *self.highlights.lock() = highlights;
    }

    /// Highlights with the positions recorded by the last frame.
    pub fn highlights(&self) -> Vec<Highlight> {
        self.highlights.lock().clone()
    }

    pub fn animate_xy(&self, duration_x_ms: u64, duration_y_ms: u64) {
        self.animator.lock().animate_xy(duration_x_ms, duration_y_ms);
    }

    /// Advances reveal animations; true while more frames are needed.
    pub fn tick(&self, elapsed: std::time::Duration) -> bool {
        self.animator.lock().tick(elapsed)
    }

    /// Renders one frame onto any canvas.
    pub fn render_to(&self, canvas: &mut dyn Canvas, transform: &PlotTransform) {
        let viewport = ViewPortHandler::new(transform.bounds);
        let animator = self.animator.lock().clone();
        let ctx = RenderContext {
            data: Some(&self.data),
            transform,
            viewport: &viewport,
            animator: &animator,
        };
        let mut highlights = self.highlights.lock();
        self.renderer
            .lock()
            .render_frame(canvas, &ctx, highlights.as_mut_slice());
    }
}

impl PlotRenderer for HeatmapPlot {
    fn render(
        &self,
        window: &mut Window,
        transform: &PlotTransform,
        series_id: &str,
        cx: &mut App,
    ) {
        tracing::trace!(series = series_id, "painting heat map");
        let mut canvas = WindowCanvas::new(window, cx).with_icons(&self.icons);
        self.render_to(&mut canvas, transform);
    }

    /// Entry bounds widened by the cell each entry anchors, so an auto-fit
    /// axis shows the last column and the top row in full.
    fn get_min_max(&self) -> Option<(f64, f64, f64, f64)> {
        self.data
            .get_bounds()
            .map(|(x0, x1, y0, y1)| (x0, x1 + CELL_SPAN, y0, y1 + CELL_SPAN))
    }

    /// Y extent of every cell overlapping `[x_min, x_max]`.
    fn get_y_range(&self, x_min: f64, x_max: f64) -> Option<(f64, f64)> {
        self.data
            .get_y_range(x_min - CELL_SPAN, x_max)
            .map(|(lo, hi)| (lo, hi + CELL_SPAN))
    }
}
