// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Scenario tests for the layout registry.

use venn_model::{ModelError, Point, Rect, VennLayout};

/// Minimal stand-in for a solver's outline shape.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Ellipse {
    center: Point,
    rx: f64,
    ry: f64,
}

fn three_set_layout() -> VennLayout<Ellipse> {
    let shapes = vec![
        Ellipse { center: Point::new(80.0, 80.0), rx: 60.0, ry: 40.0 },
        Ellipse { center: Point::new(140.0, 80.0), rx: 60.0, ry: 40.0 },
        Ellipse { center: Point::new(110.0, 130.0), rx: 60.0, ry: 40.0 },
    ];
    VennLayout::new(shapes, Rect::new(0.0, 0.0, 220.0, 190.0)).unwrap()
}

#[test]
fn test_center_round_trip() {
    let mut layout = three_set_layout();

    layout.add_center(Point::new(50.0, 50.0), 0, &[1]).unwrap();

    // The key is order-independent: both phrasings hit the same entry.
    assert_eq!(layout.center(0, &[1]).unwrap(), Some(Point::new(50.0, 50.0)));
    assert_eq!(layout.center(1, &[0]).unwrap(), Some(Point::new(50.0, 50.0)));
    assert_eq!(layout.center(0, &[]).unwrap(), None);
}

#[test]
fn test_solver_may_skip_regions() {
    let mut layout = three_set_layout();
    layout.add_center(Point::new(110.0, 95.0), 0, &[1, 2]).unwrap();

    // Only the registered region resolves; the rest answer None without
    // erroring.
    assert!(layout.center(0, &[1, 2]).unwrap().is_some());
    assert!(layout.center(0, &[]).unwrap().is_none());
    assert!(layout.center(1, &[2]).unwrap().is_none());
    assert_eq!(layout.centers().count(), 1);
}

#[test]
fn test_index_validation_matches_the_family_rules() {
    let mut layout = three_set_layout();

    assert_eq!(
        layout.center(3, &[]).unwrap_err(),
        ModelError::IndexOutOfRange { index: 3, len: 3 }
    );
    assert_eq!(
        layout.center(0, &[1, 2, 99]).unwrap_err(),
        ModelError::IndexOutOfRange { index: 99, len: 3 }
    );
    assert_eq!(
        layout.center(0, &[1, 2, 2]).unwrap_err(),
        ModelError::TooManyIndices {
            supplied: 3,
            max: 2
        }
    );
    assert_eq!(
        layout
            .add_center(Point::new(0.0, 0.0), 0, &[1, 2, 2])
            .unwrap_err(),
        ModelError::TooManyIndices {
            supplied: 3,
            max: 2
        }
    );
}

#[test]
fn test_all_centers_inside_bounds() {
    let mut layout = three_set_layout();
    layout.add_center(Point::new(60.0, 75.0), 0, &[]).unwrap();
    layout.add_center(Point::new(160.0, 75.0), 1, &[]).unwrap();
    layout.add_center(Point::new(110.0, 95.0), 0, &[1, 2]).unwrap();

    let bounds = layout.bounds();
    for (key, point) in layout.centers() {
        assert!(
            bounds.contains(point),
            "center for {} lies outside the bounding rectangle",
            key
        );
    }
}

#[test]
fn test_shapes_keep_family_order() {
    let layout = three_set_layout();
    assert_eq!(layout.shape(0).unwrap().center, Point::new(80.0, 80.0));
    assert_eq!(layout.shape(2).unwrap().center, Point::new(110.0, 130.0));
}
