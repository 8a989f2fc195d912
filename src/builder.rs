//! Builds heat map data from a row-major grid of values.

use std::sync::Arc;

use eyre::{ensure, Result};

use crate::color::ValueRange;
use crate::data_types::{BubbleData, BubbleDataSet, BubbleDataSource, BubbleEntry, DataSetConfig};
use crate::formatter::{DecimalFormatter, IndexLabelFormatter};
use crate::geometry::GridExtent;

/// Datasets, banding range and grid extent for one heat map.
pub struct HeatmapModel {
    pub data: BubbleData,
    pub value_range: ValueRange,
    pub grid: GridExtent,
    pub x_labels: IndexLabelFormatter,
    pub y_labels: IndexLabelFormatter,
}

pub struct HeatmapBuilder {
    x_labels: Vec<String>,
    y_labels: Vec<String>,
    set_config: DataSetConfig,
    decimals: usize,
}

impl HeatmapBuilder {
    pub fn new(x_labels: Vec<String>, y_labels: Vec<String>) -> Self {
        Self {
            x_labels,
            y_labels,
            set_config: DataSetConfig {
                colors: vec![gpui::rgb(0xBB86FC).into()],
                value_text_colors: vec![gpui::white()],
                value_text_size: 10.0,
                draw_values: true,
                draw_icons: false,
                highlight_enabled: false,
                ..Default::default()
            },
            decimals: 1,
        }
    }

    /// Settings applied to every row dataset.
    pub fn data_set_config(mut self, config: DataSetConfig) -> Self {
        self.set_config = config;
        self
    }

    pub fn decimals(mut self, decimals: usize) -> Self {
        self.decimals = decimals;
        self
    }

    /// One dataset per row. `rows[row * x_count + col][2]` is the value of
    /// the cell at (col, row); the first two columns are not read.
    pub fn build(&self, rows: &[[f64; 3]]) -> Result<HeatmapModel> {
        let x_count = self.x_labels.len();
        let y_count = self.y_labels.len();
        ensure!(x_count > 0 && y_count > 0, "heat map needs at least one x and one y label");
        ensure!(
            rows.len() >= x_count * y_count,
            "heat map of {x_count}x{y_count} cells needs {} values, got {}",
            x_count * y_count,
            rows.len()
        );

        let mut value_range = ValueRange::new(0.0, 0.0);
        let mut data_sets: Vec<Box<dyn BubbleDataSource>> = Vec::with_capacity(y_count);

        for row in 0..y_count {
            let entries = (0..x_count)
                .map(|col| {
                    let value = rows[row * x_count + col][2];
                    value_range.max = value_range.max.max(value);
                    value_range.min = value_range.min.min(value);
                    BubbleEntry::new(col as f64, row as f64, value)
                })
                .collect();

            let set = BubbleDataSet::new(entries, self.y_labels[row].clone())
                .with_config(DataSetConfig {
                    label: self.y_labels[row].clone(),
                    ..self.set_config.clone()
                });
            data_sets.push(Box::new(set));
        }

        tracing::debug!(
            columns = x_count,
            rows = y_count,
            min = value_range.min,
            max = value_range.max,
            "built heat map"
        );

        Ok(HeatmapModel {
            data: BubbleData::new(data_sets)
                .with_formatter(Arc::new(DecimalFormatter::new(self.decimals))),
            value_range,
            grid: GridExtent::new(x_count, y_count),
            x_labels: IndexLabelFormatter::new(self.x_labels.clone()),
            y_labels: IndexLabelFormatter::new(self.y_labels.clone()),
        })
    }
}
