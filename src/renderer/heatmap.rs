//! Grid heat map renderer.
//!
//! Every entry is drawn as a cell anchored at its transformed (x, y): the
//! cell extends right by the cell width and up by the cell height. Cell
//! size comes from the grid extent, color from the value band of the
//! entry's `size`.

use eyre::Result;
use gpui::{px, size, Bounds, Hsla, Point};

use super::{DataRenderer, RenderContext};
use crate::bounds::XBounds;
use crate::builder::HeatmapModel;
use crate::canvas::Canvas;
use crate::color::{darken, ColorBands, ValueRange};
use crate::data_types::{BubbleDataSource, BubbleEntry, Highlight, HeatmapConfig};
use crate::geometry::{cell_size, reference_size, shape_size, CellGeometry, GridExtent};
use crate::viewport::ViewPortHandler;

/// Outcome of the bounds checks for one cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Cull {
    Draw,
    Skip,
    /// Past the right edge: later entries (sorted by x) are too.
    Stop,
}

fn cull(viewport: &ViewPortHandler, point: [f32; 2], shape_half: f32) -> Cull {
    let [x, y] = point;
    if !viewport.is_in_bounds_top(y + shape_half) || !viewport.is_in_bounds_bottom(y - shape_half) {
        return Cull::Skip;
    }
    if !viewport.is_in_bounds_left(x + shape_half) {
        return Cull::Skip;
    }
    if !viewport.is_in_bounds_right(x - shape_half) {
        return Cull::Stop;
    }
    Cull::Draw
}

pub struct HeatMapRenderer {
    config: HeatmapConfig,
    bands: ColorBands,
    extent: GridExtent,
    cell: CellGeometry,
    value_range: ValueRange,
}

impl HeatMapRenderer {
    /// `x_max` columns by `y_max` rows. `x_max` is replaced by each
    /// dataset's entry count when it is drawn.
    pub fn new(config: HeatmapConfig, x_max: usize, y_max: usize) -> Result<Self> {
        let bands = config.bands()?;
        Ok(Self {
            config,
            bands,
            extent: GridExtent::new(x_max, y_max),
            cell: CellGeometry::default(),
            value_range: ValueRange::default(),
        })
    }

    pub fn with_grid(x_max: usize, y_max: usize) -> Self {
        Self {
            config: HeatmapConfig::default(),
            bands: ColorBands::default(),
            extent: GridExtent::new(x_max, y_max),
            cell: CellGeometry::default(),
            value_range: ValueRange::default(),
        }
    }

    /// Renderer sized and ranged for a model built by `HeatmapBuilder`.
    pub fn for_model(config: HeatmapConfig, model: &HeatmapModel) -> Result<Self> {
        let mut renderer = Self::new(config, model.grid.x_max, model.grid.y_max)?;
        renderer.value_range = model.value_range;
        Ok(renderer)
    }

    /// Bounds used for color banding until the next call.
    pub fn set_value_range(&mut self, max: f64, min: f64) {
        self.value_range = ValueRange::new(min, max);
    }

    pub fn value_range(&self) -> ValueRange {
        self.value_range
    }

    pub fn grid_extent(&self) -> GridExtent {
        self.extent
    }

    pub fn set_y_max(&mut self, y_max: usize) {
        self.extent.y_max = y_max;
    }

    /// Cell size computed by the most recent dataset pass.
    pub fn cell_geometry(&self) -> CellGeometry {
        self.cell
    }

    pub fn config(&self) -> &HeatmapConfig {
        &self.config
    }

    pub fn bands(&self) -> &ColorBands {
        &self.bands
    }

    pub fn color_for(&self, value: f64) -> Hsla {
        self.bands.color_for(value, self.value_range)
    }

    fn cell_rect(&self, point: [f32; 2]) -> Bounds<gpui::Pixels> {
        let [x, y] = point;
        Bounds::new(
            Point::new(px(x), px(y - self.cell.height)),
            size(px(self.cell.width), px(self.cell.height)),
        )
    }

    /// Transformed position of `entry` with its y scaled by `phase_y`.
    fn entry_position(ctx: &RenderContext<'_>, entry: &BubbleEntry, phase_y: f32) -> [f32; 2] {
        let mut point = [entry.x as f32, entry.y as f32 * phase_y];
        ctx.transform.points_to_pixels(&mut point);
        point
    }

    pub fn draw_data_set(
        &mut self,
        canvas: &mut dyn Canvas,
        ctx: &RenderContext<'_>,
        set: &dyn BubbleDataSource,
    ) {
        let entry_count = set.entry_count();
        if entry_count < 1 {
            tracing::trace!(label = %set.config().label, "skipping empty data set");
            return;
        }

        self.extent.x_max = entry_count;
        let viewport = ctx.viewport;
        let Some(cell) = cell_size(
            viewport.content_width(),
            viewport.content_height(),
            self.extent,
            self.config.cell_interval_px,
        ) else {
            tracing::debug!(extent = ?self.extent, "grid extent is empty, nothing to draw");
            return;
        };
        self.cell = cell;

        let phase_y = ctx.animator.phase_y();
        let bounds = XBounds::set(set, ctx.transform.visible_x_range(), ctx.animator.phase_x());
        let reference = reference_size(ctx.transform, viewport);
        let normalize = set.is_normalize_size_enabled();
        let max_size = set.max_size();

        for j in bounds.iter(entry_count) {
            let Some(entry) = set.entry(j) else { break };
            let point = Self::entry_position(ctx, entry, phase_y);
            let shape_half = shape_size(entry.size, max_size, reference, normalize) / 2.0;

            match cull(viewport, point, shape_half) {
                Cull::Draw => {}
                Cull::Skip => continue,
                Cull::Stop if self.config.early_break => break,
                Cull::Stop => continue,
            }

            if entry.size > 0.0 {
                canvas.fill_rect(self.cell_rect(point), self.color_for(entry.size));
            }
        }
    }

    fn should_draw_values(set: &dyn BubbleDataSource) -> bool {
        let config = set.config();
        set.is_visible() && (config.draw_values || config.draw_icons)
    }

    /// Only entries inside the current x window can be highlighted.
    fn is_in_bounds_x(ctx: &RenderContext<'_>, entry: &BubbleEntry, set: &dyn BubbleDataSource) -> bool {
        let Some(index) = set.index_of(entry) else {
            return false;
        };
        XBounds::set(set, ctx.transform.visible_x_range(), ctx.animator.phase_x())
            .iter(set.entry_count())
            .contains(&index)
    }
}

impl DataRenderer for HeatMapRenderer {
    fn draw_data(&mut self, canvas: &mut dyn Canvas, ctx: &RenderContext<'_>) {
        let Some(data) = ctx.data else {
            return;
        };
        for set in data.data_sets() {
            if set.is_visible() {
                self.draw_data_set(canvas, ctx, set.as_ref());
            }
        }
    }

    fn draw_values(&self, canvas: &mut dyn Canvas, ctx: &RenderContext<'_>) {
        let Some(data) = ctx.data else {
            return;
        };
        let viewport = ctx.viewport;

        for (i, set) in data.data_sets().iter().enumerate() {
            let set = set.as_ref();
            let entry_count = set.entry_count();
            if !Self::should_draw_values(set) || entry_count < 1 {
                continue;
            }

            let config = set.config();
            let font_size = px(set.value_text_size() * self.config.font_scale_for(entry_count));
            let line_height = f32::from(canvas.text_height("1", font_size));

            let phase_x = ctx.animator.phase_x().clamp(0.0, 1.0);
            let phase_y = ctx.animator.phase_y();
            let alpha = if phase_x == 1.0 { phase_y } else { phase_x };

            let bounds = XBounds::set(set, ctx.transform.visible_x_range(), phase_x);
            let positions =
                ctx.transform
                    .generate_transformed_values(set, phase_y, bounds.min, bounds.max);

            for (k, pos) in positions.chunks_exact(2).enumerate() {
                let j = bounds.min + k;
                let (x, y) = (pos[0], pos[1]);

                if !viewport.is_in_bounds_right(x) {
                    if self.config.early_break {
                        break;
                    }
                    continue;
                }
                if !viewport.is_in_bounds_left(x) || !viewport.is_in_bounds_y(y) {
                    continue;
                }

                let Some(entry) = set.entry(j) else { break };

                if config.draw_values && entry.size > 0.0 {
                    let color = Hsla {
                        a: alpha,
                        ..set.value_text_color(j)
                    };
                    let text = data.formatter().format(entry.size, entry, i);
                    let anchor = Point::new(
                        px(x + self.cell.width / 2.0),
                        px(y + 0.5 * line_height - self.cell.height / 2.0),
                    );
                    canvas.draw_text(&text, anchor, font_size, color);
                }

                if let Some(icon) = entry.icon.as_ref().filter(|_| config.draw_icons) {
                    let center_x = (x + f32::from(config.icons_offset.x)).trunc();
                    let center_y = (y + f32::from(config.icons_offset.y)).trunc();
                    let origin = Point::new(
                        px(center_x) - icon.width / 2.0,
                        px(center_y) - icon.height / 2.0,
                    );
                    canvas.draw_icon(icon, Bounds::new(origin, size(icon.width, icon.height)));
                }
            }
        }
    }

    fn draw_highlighted(
        &self,
        canvas: &mut dyn Canvas,
        ctx: &RenderContext<'_>,
        highlights: &mut [Highlight],
    ) {
        let Some(data) = ctx.data else {
            return;
        };
        let viewport = ctx.viewport;
        let phase_y = ctx.animator.phase_y();

        for high in highlights.iter_mut() {
            let Some(set) = data.data_set(high.data_set_index) else {
                tracing::trace!(index = high.data_set_index, "highlight refers to a missing data set");
                continue;
            };
            if !set.is_highlight_enabled() {
                continue;
            }

            let Some(entry) = set.entry_for_xy(high.x, high.y) else {
                continue;
            };
            if entry.y != high.y {
                tracing::trace!(x = high.x, y = high.y, "no entry matches highlight");
                continue;
            }
            if !Self::is_in_bounds_x(ctx, entry, set) {
                continue;
            }

            let reference = reference_size(ctx.transform, viewport);
            let point = Self::entry_position(ctx, entry, phase_y);
            high.set_draw(point[0], point[1]);

            let shape_half =
                shape_size(entry.size, set.max_size(), reference, set.is_normalize_size_enabled()) / 2.0;

            match cull(viewport, point, shape_half) {
                Cull::Draw => {}
                Cull::Skip => continue,
                Cull::Stop if self.config.early_break => break,
                Cull::Stop => continue,
            }

            let color = darken(set.color_at(entry.x as usize));
            let stroke_width = set
                .config()
                .highlight_stroke_width
                .unwrap_or(self.config.highlight_stroke_width_px);

            canvas.stroke_rect(self.cell_rect(point), color, px(stroke_width));
        }
    }
}
