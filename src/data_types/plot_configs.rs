use eyre::{Result, WrapErr};
use gpui::{Hsla, Pixels, Point, px};
use serde::{Deserialize, Serialize};

use super::hex_color;
use crate::color::ColorBands;

/// Per-dataset drawing settings.
#[derive(Clone, Debug, PartialEq)]
pub struct DataSetConfig {
    pub label: String,
    pub visible: bool,
    /// Base colors, indexed cyclically by entry x.
    pub colors: Vec<Hsla>,
    /// Value text colors, indexed cyclically by entry index.
    pub value_text_colors: Vec<Hsla>,
    pub value_text_size: f32,
    pub draw_values: bool,
    pub draw_icons: bool,
    pub normalize_size: bool,
    pub highlight_enabled: bool,
    /// Overrides `HeatmapConfig::highlight_stroke_width_px` when set.
    pub highlight_stroke_width: Option<f32>,
    pub icons_offset: Point<Pixels>,
}

impl Default for DataSetConfig {
    fn default() -> Self {
        Self {
            label: String::new(),
            visible: true,
            colors: vec![gpui::rgb(0x8CEAFF).into()],
            value_text_colors: vec![gpui::black()],
            value_text_size: 17.0,
            draw_values: true,
            draw_icons: true,
            normalize_size: true,
            highlight_enabled: true,
            highlight_stroke_width: None,
            icons_offset: Point::new(px(0.0), px(0.0)),
        }
    }
}

/// Shrinks value labels once a dataset holds more than `above` entries.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FontScaleStep {
    pub above: usize,
    pub factor: f32,
}

/// Renderer-wide settings, loadable from JSON.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeatmapConfig {
    /// Light, mid and dark band colors as `#RRGGBB` or `#AARRGGBB`.
    pub band_colors: [String; 3],
    /// Gap left between neighbouring cells.
    pub cell_interval_px: f32,
    pub highlight_stroke_width_px: f32,
    /// Checked in order, first match wins.
    pub font_scale: Vec<FontScaleStep>,
    /// Stop iterating a dataset at the first cell past the right edge.
    /// Only valid while entries are sorted by ascending x.
    pub early_break: bool,
}

impl Default for HeatmapConfig {
    fn default() -> Self {
        Self {
            band_colors: [
                "#A3D87214".to_string(),
                "#D87214".to_string(),
                "#DD425A".to_string(),
            ],
            cell_interval_px: 1.0,
            highlight_stroke_width_px: 1.5,
            font_scale: vec![
                FontScaleStep {
                    above: 20,
                    factor: 0.33,
                },
                FontScaleStep {
                    above: 16,
                    factor: 0.66,
                },
                FontScaleStep {
                    above: 12,
                    factor: 0.8,
                },
            ],
            early_break: true,
        }
    }
}

impl HeatmapConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).wrap_err("invalid heat map configuration")?;
        config.bands()?;
        tracing::debug!(
            interval = config.cell_interval_px,
            early_break = config.early_break,
            "loaded heat map configuration"
        );
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn bands(&self) -> Result<ColorBands> {
        let [light, mid, dark] = &self.band_colors;
        Ok(ColorBands {
            light: hex_color::parse_hex_str(light)?,
            mid: hex_color::parse_hex_str(mid)?,
            dark: hex_color::parse_hex_str(dark)?,
        })
    }

    /// Label scale for a dataset with `entry_count` entries.
    pub fn font_scale_for(&self, entry_count: usize) -> f32 {
        self.font_scale
            .iter()
            .find(|step| entry_count > step.above)
            .map(|step| step.factor)
            .unwrap_or(1.0)
    }
}
