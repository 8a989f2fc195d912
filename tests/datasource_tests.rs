use gpui_heatmap::bounds::XBounds;
use gpui_heatmap::data_types::{
    BubbleData, BubbleDataSet, BubbleDataSource, BubbleEntry, DataSetConfig, Rounding,
};

fn row(xs: &[f64]) -> BubbleDataSet {
    BubbleDataSet::new(
        xs.iter().map(|&x| BubbleEntry::new(x, 0.0, x + 1.0)).collect(),
        "row",
    )
}

#[test]
fn test_entry_index_rounding() {
    let set = row(&[0.0, 1.0, 2.0, 3.0]);

    assert_eq!(set.entry_index(1.4, None, Rounding::Closest), Some(1));
    assert_eq!(set.entry_index(1.4, None, Rounding::Up), Some(2));
    assert_eq!(set.entry_index(1.6, None, Rounding::Closest), Some(2));
    assert_eq!(set.entry_index(1.6, None, Rounding::Down), Some(1));
    assert_eq!(set.entry_index(-5.0, None, Rounding::Down), Some(0));
    assert_eq!(set.entry_index(10.0, None, Rounding::Up), Some(3));
    assert_eq!(set.entry_index(2.0, None, Rounding::Up), Some(2));
}

#[test]
fn test_entry_for_xy_picks_nearest_y_among_equal_x() {
    let set = BubbleDataSet::new(
        vec![
            BubbleEntry::new(0.0, 0.0, 1.0),
            BubbleEntry::new(1.0, 5.0, 1.0),
            BubbleEntry::new(1.0, 9.0, 1.0),
            BubbleEntry::new(2.0, 0.0, 1.0),
        ],
        "dupes",
    );

    assert_eq!(set.entry_for_xy(1.0, 5.0).map(|e| e.y), Some(5.0));
    assert_eq!(set.entry_for_xy(1.0, 8.0).map(|e| e.y), Some(9.0));
    assert_eq!(set.entry_for_xy(1.0, 7.0).map(|e| e.y), Some(9.0));
}

#[test]
fn test_entries_kept_sorted() {
    let mut set = BubbleDataSet::new(
        vec![
            BubbleEntry::new(3.0, 0.0, 1.0),
            BubbleEntry::new(1.0, 0.0, 7.0),
            BubbleEntry::new(2.0, 0.0, 2.0),
        ],
        "row",
    );
    let xs: Vec<f64> = set.entries().iter().map(|e| e.x).collect();
    assert_eq!(xs, vec![1.0, 2.0, 3.0]);
    assert_eq!(set.max_size(), 7.0);

    set.add_entry(BubbleEntry::new(2.0, 4.0, 9.0));
    set.add_entry(BubbleEntry::new(0.0, 1.0, 1.0));
    let pairs: Vec<(f64, f64)> = set.entries().iter().map(|e| (e.x, e.y)).collect();
    assert_eq!(
        pairs,
        vec![(0.0, 1.0), (1.0, 0.0), (2.0, 0.0), (2.0, 4.0), (3.0, 0.0)]
    );
    assert_eq!(set.max_size(), 9.0);
    assert_eq!(set.get_bounds(), Some((0.0, 3.0, 0.0, 4.0)));
    assert_eq!(set.get_y_range(1.5, 2.5), Some((0.0, 4.0)));
    assert_eq!(set.index_of(&BubbleEntry::new(2.0, 4.0, 9.0)), Some(3));

    set.clear();
    assert!(set.is_empty());
    assert_eq!(set.get_bounds(), None);
    assert_eq!(set.max_size(), 0.0);
}

#[test]
fn test_colors_cycle() {
    let set = row(&[0.0, 1.0, 2.0]).with_config(DataSetConfig {
        colors: vec![gpui::red(), gpui::blue()],
        value_text_colors: vec![gpui::white()],
        ..Default::default()
    });

    assert_eq!(set.color_at(0), gpui::red());
    assert_eq!(set.color_at(1), gpui::blue());
    assert_eq!(set.color_at(4), gpui::red());
    assert_eq!(set.value_text_color(7), gpui::white());

    let bare = row(&[0.0]).with_config(DataSetConfig {
        colors: vec![],
        ..Default::default()
    });
    assert_eq!(bare.color_at(3), gpui::black());
}

#[test]
fn test_x_bounds_windows() {
    let set = row(&(0..10).map(f64::from).collect::<Vec<_>>());

    let full = XBounds::set(&set, (0.0, 10.0), 1.0);
    assert_eq!(full.iter(set.entry_count()).count(), 10);
    assert_eq!(full.last(), 9);

    let partial = XBounds::set(&set, (3.2, 6.5), 1.0);
    assert_eq!(partial.iter(set.entry_count()), 3..8);

    let half = XBounds::set(&set, (0.0, 10.0), 0.5);
    assert_eq!(half.iter(set.entry_count()), 0..5);
    assert_eq!(half.max, 9);
}

#[test]
fn test_bubble_data_aggregates() {
    let mut data = BubbleData::new(vec![Box::new(row(&[0.0, 1.0]))]);
    data.add_data_set(Box::new(BubbleDataSet::new(
        vec![BubbleEntry::new(4.0, 2.0, 1.0)],
        "second",
    )));

    assert_eq!(data.data_set_count(), 2);
    assert_eq!(data.entry_count(), 3);
    assert_eq!(data.get_bounds(), Some((0.0, 4.0, 0.0, 2.0)));
    assert_eq!(data.get_y_range(3.0, 5.0), Some((2.0, 2.0)));
    assert!(data.data_set(2).is_none());
    assert_eq!(data.data_set(1).map(|s| s.config().label.clone()), Some("second".into()));
}

#[test]
fn test_default_formatter_follows_size_span() {
    let entry = BubbleEntry::default();
    let sized = |sizes: &[f64]| -> Box<dyn BubbleDataSource> {
        Box::new(BubbleDataSet::new(
            sizes
                .iter()
                .enumerate()
                .map(|(i, &s)| BubbleEntry::new(i as f64, 0.0, s))
                .collect(),
            "sized",
        ))
    };

    // span 0.5: three decimals
    let fine = BubbleData::new(vec![sized(&[0.0, 0.5])]);
    assert_eq!(fine.formatter().format(0.25, &entry, 0), "0.250");

    // span 1000: whole numbers
    let coarse = BubbleData::new(vec![sized(&[0.0, 1000.0])]);
    assert_eq!(coarse.formatter().format(512.0, &entry, 0), "512");

    // a single entry is sized by its magnitude
    let single = BubbleData::new(vec![sized(&[5.0])]);
    assert_eq!(single.formatter().format(5.0, &entry, 0), "5.00");

    let mut growing = BubbleData::new(vec![]);
    assert_eq!(growing.formatter().format(3.0, &entry, 0), "3.0");
    growing.add_data_set(sized(&[0.0, 1000.0]));
    assert_eq!(growing.formatter().format(3.0, &entry, 0), "3");
}

#[test]
fn test_explicit_formatter_is_kept() {
    use gpui_heatmap::formatter::DecimalFormatter;
    use std::sync::Arc;

    let entry = BubbleEntry::default();
    let mut data = BubbleData::new(vec![]).with_formatter(Arc::new(DecimalFormatter::new(4)));
    data.add_data_set(Box::new(row(&[0.0, 500.0])));
    assert_eq!(data.formatter().format(1.0, &entry, 0), "1.0000");
}
