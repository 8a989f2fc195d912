use gpui::{px, Bounds, Point, Size};
use gpui_heatmap::geometry::{cell_size, reference_size, shape_size, CellGeometry, GridExtent};
use gpui_heatmap::transform::PlotTransform;
use gpui_heatmap::viewport::ViewPortHandler;
use rand::Rng;

fn rect(w: f32, h: f32) -> Bounds<gpui::Pixels> {
    Bounds::new(Point::new(px(0.0), px(0.0)), Size::new(px(w), px(h)))
}

#[test]
fn test_cell_size_subtracts_interval() {
    let cell = cell_size(100.0, 100.0, GridExtent::new(4, 5), 1.0).unwrap();
    assert_eq!(
        cell,
        CellGeometry {
            width: 24.0,
            height: 19.0
        }
    );
}

#[test]
fn test_cell_size_requires_both_extents() {
    assert!(cell_size(100.0, 100.0, GridExtent::new(0, 5), 1.0).is_none());
    assert!(cell_size(100.0, 100.0, GridExtent::new(5, 0), 1.0).is_none());
    assert!(!GridExtent::default().is_drawable());
}

#[test]
fn test_cells_tile_content_rect() {
    let mut rng = rand::rng();
    for _ in 0..200 {
        let width = rng.random_range(10.0..2000.0f32);
        let height = rng.random_range(10.0..2000.0f32);
        let extent = GridExtent::new(rng.random_range(1..50), rng.random_range(1..50));

        let cell = cell_size(width, height, extent, 1.0).unwrap();
        let covered_w = (cell.width + 1.0) * extent.x_max as f32;
        let covered_h = (cell.height + 1.0) * extent.y_max as f32;
        assert!((covered_w - width).abs() < 0.01 * width.max(1.0));
        assert!((covered_h - height).abs() < 0.01 * height.max(1.0));
    }
}

#[test]
fn test_shape_size() {
    // max_size 0 falls back to the reference size
    assert_eq!(shape_size(7.0, 0.0, 10.0, true), 10.0);
    assert_eq!(shape_size(25.0, 100.0, 10.0, true), 5.0);
    assert_eq!(shape_size(100.0, 100.0, 10.0, true), 10.0);
    assert_eq!(shape_size(3.0, 100.0, 10.0, false), 30.0);
    assert_eq!(shape_size(0.0, 100.0, 10.0, true), 0.0);
}

#[test]
fn test_reference_size_is_smaller_dimension() {
    let bounds = rect(100.0, 100.0);
    let transform = PlotTransform::for_domains((0.0, 10.0), (0.0, 10.0), bounds);
    let viewport = ViewPortHandler::new(bounds);
    assert!((reference_size(&transform, &viewport) - 10.0).abs() < 1e-4);

    // one x unit spans 100px but the content rect is only 50px tall
    let bounds = rect(200.0, 50.0);
    let transform = PlotTransform::for_domains((0.0, 2.0), (0.0, 1.0), bounds);
    let viewport = ViewPortHandler::new(bounds);
    assert!((reference_size(&transform, &viewport) - 50.0).abs() < 1e-4);
}

#[test]
fn test_viewport_tolerances() {
    let viewport = ViewPortHandler::new(rect(100.0, 100.0));

    assert!(viewport.is_in_bounds_left(-1.0));
    assert!(!viewport.is_in_bounds_left(-1.5));
    assert!(viewport.is_in_bounds_right(101.0));
    assert!(!viewport.is_in_bounds_right(101.5));

    // sub-hundredth overshoot at the bottom is truncated away
    assert!(viewport.is_in_bounds_bottom(100.004));
    assert!(!viewport.is_in_bounds_bottom(100.02));
    assert!(!viewport.is_in_bounds_top(-0.1));
    assert!(viewport.is_in_bounds_y(0.0));
}
