//! Windowed iteration over the visible part of a dataset.

use crate::data_types::{BubbleDataSource, Rounding};

/// Closed index range `[min, min + range]` of entries to visit this pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct XBounds {
    pub min: usize,
    pub max: usize,
    pub range: usize,
}

impl XBounds {
    /// Entries around `visible_x`, cut down to the `phase_x` share of the
    /// revealed range.
    ///
    /// The low end rounds down and the high end rounds up, so cells that
    /// only partly overlap the visible range are still visited.
    pub fn set(set: &dyn BubbleDataSource, visible_x: (f64, f64), phase_x: f32) -> Self {
        let (low, high) = visible_x;
        let min = set.entry_index(low, None, Rounding::Down).unwrap_or(0);
        let max = set.entry_index(high, None, Rounding::Up).unwrap_or(0);
        let phase = if phase_x.is_nan() {
            0.0
        } else {
            phase_x.clamp(0.0, 1.0) as f64
        };
        let range = (max.saturating_sub(min) as f64 * phase) as usize;
        Self { min, max, range }
    }

    /// Indices to visit, empty for an empty dataset.
    pub fn iter(&self, entry_count: usize) -> std::ops::Range<usize> {
        let end = (self.min + self.range + 1).min(entry_count);
        self.min.min(end)..end
    }

    /// Last index this window visits.
    pub fn last(&self) -> usize {
        self.min + self.range
    }
}
