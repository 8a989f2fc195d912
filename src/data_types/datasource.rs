use gpui::Hsla;

use super::data::{BubbleEntry, Rounding};
use super::plot_configs::DataSetConfig;

/// Read access to one dataset of a heat map.
///
/// Entries must be sorted by ascending x. Renderers rely on that order to
/// stop iterating once a cell lies past the right edge of the content rect.
pub trait BubbleDataSource: Send + Sync {
    fn config(&self) -> &DataSetConfig;

    fn entries(&self) -> &[BubbleEntry];

    /// Largest `size` over all entries, 0 when empty.
    fn max_size(&self) -> f64;

    fn entry_count(&self) -> usize {
        self.entries().len()
    }

    fn is_empty(&self) -> bool {
        self.entry_count() == 0
    }

    fn entry(&self, index: usize) -> Option<&BubbleEntry> {
        self.entries().get(index)
    }

    fn is_visible(&self) -> bool {
        self.config().visible
    }

    fn is_highlight_enabled(&self) -> bool {
        self.config().highlight_enabled
    }

    fn is_normalize_size_enabled(&self) -> bool {
        self.config().normalize_size
    }

    fn value_text_size(&self) -> f32 {
        self.config().value_text_size
    }

    fn color_at(&self, index: usize) -> Hsla {
        cyclic(&self.config().colors, index)
    }

    fn value_text_color(&self, index: usize) -> Hsla {
        cyclic(&self.config().value_text_colors, index)
    }

    /// Index of the entry closest to `x`, adjusted by `rounding`.
    ///
    /// With `closest_to_y`, the entry sharing that x whose y is nearest to
    /// the target wins; ties go to the later entry.
    fn entry_index(&self, x: f64, closest_to_y: Option<f64>, rounding: Rounding) -> Option<usize> {
        let entries = self.entries();
        if entries.is_empty() {
            return None;
        }

        let mut low = 0;
        let mut high = entries.len() - 1;
        while low < high {
            let m = (low + high) / 2;
            let d1 = entries[m].x - x;
            let d2 = entries[m + 1].x - x;
            let (ad1, ad2) = (d1.abs(), d2.abs());

            if ad2 < ad1 {
                low = m + 1;
            } else if ad1 < ad2 {
                high = m;
            } else if d1 >= 0.0 {
                // Equidistant: prefer the left neighbour when both sit at or above x.
                high = m;
            } else {
                low = m + 1;
            }
        }

        let mut closest = high;
        let closest_x = entries[closest].x;
        match rounding {
            Rounding::Up if closest_x < x && closest + 1 < entries.len() => closest += 1,
            Rounding::Down if closest_x > x && closest > 0 => closest -= 1,
            _ => {}
        }

        if let Some(target_y) = closest_to_y {
            let closest_x = entries[closest].x;
            while closest > 0 && entries[closest - 1].x == closest_x {
                closest -= 1;
            }
            let mut best = closest;
            let mut best_dist = (entries[closest].y - target_y).abs();
            for (i, entry) in entries.iter().enumerate().skip(closest + 1) {
                if entry.x != closest_x {
                    break;
                }
                let dist = (entry.y - target_y).abs();
                if dist <= best_dist {
                    best = i;
                    best_dist = dist;
                }
            }
            closest = best;
        }

        Some(closest)
    }

    fn entry_for_x(&self, x: f64, closest_to_y: Option<f64>, rounding: Rounding) -> Option<&BubbleEntry> {
        self.entry_index(x, closest_to_y, rounding)
            .and_then(|i| self.entry(i))
    }

    /// Entry nearest to (x, y). The caller still has to compare `y`: only
    /// x is guaranteed to be the closest match.
    fn entry_for_xy(&self, x: f64, y: f64) -> Option<&BubbleEntry> {
        self.entry_for_x(x, Some(y), Rounding::Closest)
    }

    /// (x_min, x_max, y_min, y_max) over all entries.
    fn get_bounds(&self) -> Option<(f64, f64, f64, f64)> {
        self.entries().iter().fold(None, |acc, e| {
            let (x0, x1, y0, y1) = acc.unwrap_or((e.x, e.x, e.y, e.y));
            Some((x0.min(e.x), x1.max(e.x), y0.min(e.y), y1.max(e.y)))
        })
    }

    /// Y extent of the entries whose x lies in `[x_min, x_max]`.
    fn get_y_range(&self, x_min: f64, x_max: f64) -> Option<(f64, f64)> {
        let entries = self.entries();
        let start = entries.partition_point(|e| e.x < x_min);
        let end = entries.partition_point(|e| e.x <= x_max).max(start);
        entries[start..end].iter().fold(None, |acc, e| match acc {
            None => Some((e.y, e.y)),
            Some((lo, hi)) => Some((lo.min(e.y), hi.max(e.y))),
        })
    }

    /// Position of `entry` in the dataset, compared by value.
    fn index_of(&self, entry: &BubbleEntry) -> Option<usize> {
        self.entries().iter().position(|e| e == entry)
    }
}

fn cyclic(colors: &[Hsla], index: usize) -> Hsla {
    if colors.is_empty() {
        gpui::black()
    } else {
        colors[index % colors.len()]
    }
}

/// Vec-backed dataset with cached size and axis bounds.
#[derive(Clone, Debug, Default)]
pub struct BubbleDataSet {
    entries: Vec<BubbleEntry>,
    pub config: DataSetConfig,
    max_size: f64,
    bounds: Option<(f64, f64, f64, f64)>,
}

impl BubbleDataSet {
    pub fn new(entries: Vec<BubbleEntry>, label: impl Into<String>) -> Self {
        let mut set = Self {
            entries: Vec::new(),
            config: DataSetConfig {
                label: label.into(),
                ..Default::default()
            },
            max_size: 0.0,
            bounds: None,
        };
        set.set_entries(entries);
        set
    }

    pub fn with_config(mut self, config: DataSetConfig) -> Self {
        self.config = config;
        self
    }

    /// Replaces all entries, sorting them by x.
    pub fn set_entries(&mut self, mut entries: Vec<BubbleEntry>) {
        entries.sort_by(|a, b| a.x.total_cmp(&b.x));
        self.entries = entries;
        self.calc_min_max();
    }

    /// Inserts after any entry with the same x, keeping the x order.
    pub fn add_entry(&mut self, entry: BubbleEntry) {
        let at = self.entries.partition_point(|e| e.x <= entry.x);
        self.entries.insert(at, entry);
        self.calc_min_max();
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.calc_min_max();
    }

    fn calc_min_max(&mut self) {
        self.max_size = self
            .entries
            .iter()
            .map(|e| e.size)
            .fold(0.0, f64::max);

        self.bounds = if self.entries.is_empty() {
            None
        } else {
            let mut b = (
                f64::INFINITY,
                f64::NEG_INFINITY,
                f64::INFINITY,
                f64::NEG_INFINITY,
            );
            for e in &self.entries {
                b.0 = b.0.min(e.x);
                b.1 = b.1.max(e.x);
                b.2 = b.2.min(e.y);
                b.3 = b.3.max(e.y);
            }
            Some(b)
        };
    }
}

impl BubbleDataSource for BubbleDataSet {
    fn config(&self) -> &DataSetConfig {
        &self.config
    }

    fn entries(&self) -> &[BubbleEntry] {
        &self.entries
    }

    fn max_size(&self) -> f64 {
        self.max_size
    }

    fn get_bounds(&self) -> Option<(f64, f64, f64, f64)> {
        self.bounds
    }
}
