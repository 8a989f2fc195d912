//! Transform helper for coordinate projection

use crate::data_types::BubbleDataSource;
use crate::scales::ChartScale;
use crate::utils::PixelsExt;
use gpui::*;

#[derive(Clone)]
pub struct PlotTransform {
    pub x_scale: ChartScale,
    pub y_scale: ChartScale,
    pub bounds: Bounds<Pixels>,
}

impl PlotTransform {
    pub fn new(x_scale: ChartScale, y_scale: ChartScale, bounds: Bounds<Pixels>) -> Self {
        Self {
            x_scale,
            y_scale,
            bounds,
        }
    }

    /// Maps `x_domain`/`y_domain` onto `bounds`, with y growing upwards.
    pub fn for_domains(x_domain: (f64, f64), y_domain: (f64, f64), bounds: Bounds<Pixels>) -> Self {
        let width = bounds.size.width.as_f32();
        let height = bounds.size.height.as_f32();
        Self::new(
            ChartScale::new_linear(x_domain, (0.0, width)),
            ChartScale::new_linear(y_domain, (height, 0.0)),
            bounds,
        )
    }

    pub fn data_to_screen(&self, point: Point<f64>) -> Point<Pixels> {
        Point::new(
            self.bounds.origin.x + px(self.x_scale.map(point.x)),
            self.bounds.origin.y + px(self.y_scale.map(point.y)),
        )
    }

    pub fn screen_to_data(&self, point: Point<Pixels>) -> Point<f64> {
        Point::new(
            self.x_scale
                .invert((point.x - self.bounds.origin.x).as_f32()),
            self.y_scale
                .invert((point.y - self.bounds.origin.y).as_f32()),
        )
    }

    /// Returns (x_scale, x_offset, y_scale, y_offset).
    /// formula: screen_val = data_val * scale + offset
    pub fn get_scale_coefficients(&self) -> (f32, f32, f32, f32) {
        let (x_m, x_c) = self.x_scale.get_linear_coeffs();
        let (y_m, y_c) = self.y_scale.get_linear_coeffs();

        let x_offset = self.bounds.origin.x.as_f32() + x_c;
        let y_offset = self.bounds.origin.y.as_f32() + y_c;

        (x_m, x_offset, y_m, y_offset)
    }

    /// Transforms flat `[x0, y0, x1, y1, ..]` value pairs to screen pixels in place.
    /// A trailing unpaired value is left untouched.
    pub fn points_to_pixels(&self, pts: &mut [f32]) {
        let (x_m, x_c, y_m, y_c) = self.get_scale_coefficients();
        for pair in pts.chunks_exact_mut(2) {
            pair[0] = pair[0] * x_m + x_c;
            pair[1] = pair[1] * y_m + y_c;
        }
    }

    /// Screen positions of entries `min..=max` of `set`, y scaled by `phase_y`.
    pub fn generate_transformed_values(
        &self,
        set: &dyn BubbleDataSource,
        phase_y: f32,
        min: usize,
        max: usize,
    ) -> Vec<f32> {
        let entries = set.entries();
        if entries.is_empty() || min > max {
            return Vec::new();
        }
        let end = max.min(entries.len() - 1);

        let mut values = Vec::with_capacity((end + 1).saturating_sub(min) * 2);
        for entry in entries.get(min..=end).unwrap_or_default() {
            values.push(entry.x as f32);
            values.push(entry.y as f32 * phase_y);
        }
        self.points_to_pixels(&mut values);
        values
    }

    /// Logical x extent currently mapped onto the content rect.
    pub fn visible_x_range(&self) -> (f64, f64) {
        let (a, b) = self.x_scale.domain();
        (a.min(b), a.max(b))
    }
}
