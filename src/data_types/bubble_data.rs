use std::sync::Arc;

use super::datasource::BubbleDataSource;
use crate::formatter::{DefaultValueFormatter, ValueFormatter};

/// Ordered collection of datasets rendered together.
///
/// Until a formatter is supplied, values are formatted with a decimal count
/// derived from the spread of entry sizes, recomputed as datasets are added.
pub struct BubbleData {
    data_sets: Vec<Box<dyn BubbleDataSource>>,
    formatter: Arc<dyn ValueFormatter>,
    custom_formatter: bool,
}

/// Span the default formatter is sized from: the size range over all
/// entries, or the largest magnitude when there are fewer than two.
fn size_span(data_sets: &[Box<dyn BubbleDataSource>]) -> f64 {
    let (count, lo, hi) = data_sets
        .iter()
        .flat_map(|set| set.entries().iter().map(|e| e.size))
        .fold((0usize, f64::INFINITY, f64::NEG_INFINITY), |(n, lo, hi), v| {
            (n + 1, lo.min(v), hi.max(v))
        });
    match count {
        0 => 0.0,
        1 => lo.abs().max(hi.abs()),
        _ => hi - lo,
    }
}

impl BubbleData {
    pub fn new(data_sets: Vec<Box<dyn BubbleDataSource>>) -> Self {
        let formatter = DefaultValueFormatter::for_range(size_span(&data_sets));
        Self {
            data_sets,
            formatter: Arc::new(formatter),
            custom_formatter: false,
        }
    }

    pub fn with_formatter(mut self, formatter: Arc<dyn ValueFormatter>) -> Self {
        self.formatter = formatter;
        self.custom_formatter = true;
        self
    }

    pub fn formatter(&self) -> &dyn ValueFormatter {
        self.formatter.as_ref()
    }

    pub fn data_sets(&self) -> &[Box<dyn BubbleDataSource>] {
        &self.data_sets
    }

    pub fn data_set(&self, index: usize) -> Option<&dyn BubbleDataSource> {
        self.data_sets.get(index).map(|set| set.as_ref())
    }

    pub fn add_data_set(&mut self, set: Box<dyn BubbleDataSource>) {
        self.data_sets.push(set);
        if !self.custom_formatter {
            self.formatter = Arc::new(DefaultValueFormatter::for_range(size_span(&self.data_sets)));
        }
    }

    pub fn data_set_count(&self) -> usize {
        self.data_sets.len()
    }

    /// Total number of entries across all datasets.
    pub fn entry_count(&self) -> usize {
        self.data_sets.iter().map(|set| set.entry_count()).sum()
    }

    /// Union of the entry bounds of all datasets as (x_min, x_max, y_min, y_max).
    pub fn get_bounds(&self) -> Option<(f64, f64, f64, f64)> {
        self.data_sets
            .iter()
            .filter_map(|set| set.get_bounds())
            .reduce(|a, b| (a.0.min(b.0), a.1.max(b.1), a.2.min(b.2), a.3.max(b.3)))
    }

    /// Union of the per-dataset y extents within `[x_min, x_max]`.
    pub fn get_y_range(&self, x_min: f64, x_max: f64) -> Option<(f64, f64)> {
        self.data_sets
            .iter()
            .filter_map(|set| set.get_y_range(x_min, x_max))
            .reduce(|a, b| (a.0.min(b.0), a.1.max(b.1)))
    }
}
