use gpui_heatmap::formatter::{
    DecimalFormatter, DefaultValueFormatter, IndexLabelFormatter, ValueFormatter,
};
use gpui_heatmap::BubbleEntry;

#[test]
fn test_decimal_formatter() {
    let entry = BubbleEntry::default();
    assert_eq!(DecimalFormatter::new(1).format(42.0, &entry, 0), "42.0");
    assert_eq!(DecimalFormatter::new(2).format(0.126, &entry, 3), "0.13");
    assert_eq!(DecimalFormatter::new(0).format(7.4, &entry, 0), "7");
}

#[test]
fn test_default_formatter_decimals_follow_span() {
    assert_eq!(DefaultValueFormatter::for_range(100.0).decimals(), 0);
    assert_eq!(DefaultValueFormatter::for_range(1.0).decimals(), 2);
    assert_eq!(DefaultValueFormatter::for_range(0.05).decimals(), 4);
    assert_eq!(DefaultValueFormatter::for_range(0.0).decimals(), 1);
    assert_eq!(DefaultValueFormatter::for_range(f64::NAN).decimals(), 1);

    let entry = BubbleEntry::default();
    assert_eq!(DefaultValueFormatter::new(1).format(5.0, &entry, 0), "5.0");
}

#[test]
fn test_index_labels() {
    let labels = IndexLabelFormatter::new(vec!["Mon".into(), "Tue".into(), "Wed".into()]);
    assert_eq!(labels.label(0.0), "Mon");
    assert_eq!(labels.label(1.4), "Tue");
    assert_eq!(labels.label(1.6), "Wed");
    assert_eq!(labels.label(3.0), "");
    assert_eq!(labels.label(-1.0), "");
    assert_eq!(labels.label(f64::INFINITY), "");
}
