//! Text formatting for cell values and grid labels.

use crate::data_types::BubbleEntry;

/// Turns a cell value into the text drawn on top of it.
pub trait ValueFormatter: Send + Sync {
    fn format(&self, value: f64, entry: &BubbleEntry, data_set_index: usize) -> String;
}

/// Fixed number of decimals.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DecimalFormatter {
    pub decimals: usize,
}

impl DecimalFormatter {
    pub fn new(decimals: usize) -> Self {
        Self { decimals }
    }
}

impl ValueFormatter for DecimalFormatter {
    fn format(&self, value: f64, _entry: &BubbleEntry, _data_set_index: usize) -> String {
        format!("{:.*}", self.decimals, value)
    }
}

/// Like [`DecimalFormatter`] but picks the decimal count from the data span.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DefaultValueFormatter {
    inner: DecimalFormatter,
}

impl DefaultValueFormatter {
    pub fn new(decimals: usize) -> Self {
        Self {
            inner: DecimalFormatter::new(decimals),
        }
    }

    /// Two significant decimals past the magnitude of `span`.
    pub fn for_range(span: f64) -> Self {
        let span = span.abs();
        if span == 0.0 || !span.is_finite() {
            return Self::new(1);
        }
        let decimals = (-span.log10()).ceil() + 2.0;
        Self::new(decimals.max(0.0) as usize)
    }

    pub fn decimals(&self) -> usize {
        self.inner.decimals
    }
}

impl ValueFormatter for DefaultValueFormatter {
    fn format(&self, value: f64, entry: &BubbleEntry, data_set_index: usize) -> String {
        self.inner.format(value, entry, data_set_index)
    }
}

/// Maps a grid column or row index to a caller supplied label.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct IndexLabelFormatter {
    labels: Vec<String>,
}

impl IndexLabelFormatter {
    pub fn new(labels: Vec<String>) -> Self {
        Self { labels }
    }

    /// Label for the index nearest to `value`, empty when out of range.
    pub fn label(&self, value: f64) -> &str {
        let index = value.round();
        if index < 0.0 || !index.is_finite() {
            return "";
        }
        self.labels
            .get(index as usize)
            .map(String::as_str)
            .unwrap_or("")
    }
}
