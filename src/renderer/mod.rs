// Data renderers

pub mod heatmap;

pub use heatmap::HeatMapRenderer;

use crate::animation::ChartAnimator;
use crate::canvas::Canvas;
use crate::data_types::{BubbleData, Highlight};
use crate::transform::PlotTransform;
use crate::viewport::ViewPortHandler;

/// Collaborators shared by every stage of one frame.
#[derive(Clone, Copy)]
pub struct RenderContext<'a> {
    pub data: Option<&'a BubbleData>,
    pub transform: &'a PlotTransform,
    pub viewport: &'a ViewPortHandler,
    pub animator: &'a ChartAnimator,
}

/// Draws chart data in the stages of a frame: data, values, extras, highlights.
pub trait DataRenderer {
    fn draw_data(&mut self, canvas: &mut dyn Canvas, ctx: &RenderContext<'_>);

    fn draw_values(&self, canvas: &mut dyn Canvas, ctx: &RenderContext<'_>);

    /// Hook for decorations drawn above values and below highlights.
    fn draw_extras(&self, _canvas: &mut dyn Canvas, _ctx: &RenderContext<'_>) {}

    /// Draws the given highlights and records where each one landed.
    fn draw_highlighted(
        &self,
        canvas: &mut dyn Canvas,
        ctx: &RenderContext<'_>,
        highlights: &mut [Highlight],
    );

    /// Runs all stages in order.
    fn render_frame(
        &mut self,
        canvas: &mut dyn Canvas,
        ctx: &RenderContext<'_>,
        highlights: &mut [Highlight],
    ) {
        self.draw_data(canvas, ctx);
        self.draw_values(canvas, ctx);
        self.draw_extras(canvas, ctx);
        self.draw_highlighted(canvas, ctx, highlights);
    }
}
