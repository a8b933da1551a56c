#![allow(clippy::float_cmp)]

use uuid::Uuid;

use super::*;
use crate::consts::DEFAULT_TOLERANCE;
use crate::doc::Shape;
use crate::geom::AxisAlignedBox;

// =============================================================
// Helpers
// =============================================================

fn make_shape(x: f64, y: f64, w: f64, h: f64) -> Shape {
    Shape::new(Uuid::new_v4(), AxisAlignedBox::new(x, y, w, h))
}

fn index_of(shapes: &[Shape]) -> BoundsIndex {
    BoundsIndex::build(shapes, &[], AxisAlignedBox::viewport(1000.0, 1000.0))
}

/// Index whose vertical keys are `[0, 50, 100, 150, 300, 350]`.
///
/// Zero-width shapes contribute a single x each. They sit far below the
/// dragged boxes so the y axis never snaps.
fn scenario_index() -> BoundsIndex {
    let shapes: Vec<Shape> = [0.0, 50.0, 100.0, 150.0, 300.0, 350.0]
        .into_iter()
        .map(|x| make_shape(x, 900.0, 0.0, 10.0))
        .collect();
    index_of(&shapes)
}

fn edges(x: f64, y: f64, w: f64, h: f64) -> BBoxEdges {
    AxisAlignedBox::new(x, y, w, h).edges()
}

// =============================================================
// Scenarios
// =============================================================

#[test]
fn scenario_index_has_expected_keys() {
    assert_eq!(scenario_index().sorted_xs(), &[0.0, 50.0, 100.0, 150.0, 300.0, 350.0]);
}

#[test]
fn min_edge_two_units_right_snaps_left() {
    let index = scenario_index();
    // Width 20 keeps mid (62) and max (72) away from every key.
    let result = resolve(&edges(52.0, 0.0, 20.0, 10.0), &index, DEFAULT_TOLERANCE);
    let snap = result.x.unwrap();
    assert_eq!(snap.offset, -2.0);
    assert_eq!(snap.matched_edge, Edge::Min);
    assert_eq!(snap.matched_coordinate, 50.0);
    assert!(result.y.is_none());
}

#[test]
fn seven_units_from_everything_does_not_snap() {
    let index = index_of(&[make_shape(0.0, 900.0, 100.0, 10.0)]);
    // Keys 0, 50, 100. Box 57..71 has mid 64 and max 71: nearest distances 7, 14, 21.
    let result = resolve(&edges(57.0, 0.0, 14.0, 10.0), &index, DEFAULT_TOLERANCE);
    assert!(result.x.is_none());
    assert_eq!(result.offset_x(), 0.0);
}

#[test]
fn exact_alignment_has_zero_offset() {
    let index = index_of(&[make_shape(100.0, 900.0, 40.0, 10.0)]);
    let result = resolve(&edges(100.0, 0.0, 7.0, 10.0), &index, DEFAULT_TOLERANCE);
    let snap = result.x.unwrap();
    assert_eq!(snap.offset, 0.0);
    assert_eq!(snap.matched_edge, Edge::Min);
}

#[test]
fn exact_max_alignment_matches_max_edge() {
    let index = index_of(&[make_shape(200.0, 900.0, 40.0, 10.0)]);
    // max = 200 exactly, min = 190 and mid = 195 are 10 and 5 away.
    let result = resolve(&edges(190.0, 0.0, 10.0, 10.0), &index, DEFAULT_TOLERANCE);
    let snap = result.x.unwrap();
    assert_eq!(snap.offset, 0.0);
    assert_eq!(snap.matched_edge, Edge::Max);
}

// =============================================================
// Tie-breaking
// =============================================================

#[test]
fn equidistant_edges_prefer_min_then_mid() {
    // Keys 0, 50, 100. Box 3..97: min 3 away from 0, mid 50 exact, max 3 away from 100.
    let index = index_of(&[make_shape(0.0, 900.0, 100.0, 10.0)]);
    let result = resolve(&edges(3.0, 0.0, 94.0, 10.0), &index, DEFAULT_TOLERANCE);
    assert_eq!(result.x.unwrap().matched_edge, Edge::Mid);

    // Box 2..90 (mid 46): min 2 away, mid 4 away, max 10 away -> min.
    let result = resolve(&edges(2.0, 0.0, 88.0, 10.0), &index, DEFAULT_TOLERANCE);
    assert_eq!(result.x.unwrap().matched_edge, Edge::Min);

    // Box 3..103 (mid 53): min 3 from 0, mid 3 from 50, max 3 from 100 -> min wins.
    let result = resolve(&edges(3.0, 0.0, 100.0, 10.0), &index, DEFAULT_TOLERANCE);
    let snap = result.x.unwrap();
    assert_eq!(snap.matched_edge, Edge::Min);
    assert_eq!(snap.offset, -3.0);
}

#[test]
fn aligned_lists_every_edge_at_the_same_offset() {
    // Dragged box the same width as the sibling: all three edges align together.
    let index = index_of(&[make_shape(100.0, 900.0, 40.0, 10.0)]);
    let result = resolve(&edges(102.0, 0.0, 40.0, 10.0), &index, DEFAULT_TOLERANCE);
    let snap = result.x.unwrap();
    assert_eq!(snap.offset, -2.0);
    let aligned: Vec<Edge> = snap.aligned().map(|c| c.edge).collect();
    assert_eq!(aligned, vec![Edge::Min, Edge::Mid, Edge::Max]);
}

// =============================================================
// Axis independence
// =============================================================

#[test]
fn axes_snap_independently() {
    let index = index_of(&[make_shape(100.0, 100.0, 50.0, 50.0)]);
    // x: min 103 is 3 from 100. y: min 400 is far from everything.
    let result = resolve(&edges(103.0, 400.0, 7.0, 10.0), &index, DEFAULT_TOLERANCE);
    assert_eq!(result.offset_x(), -3.0);
    assert!(result.y.is_none());

    let result = resolve(&edges(400.0, 148.0, 7.0, 30.0), &index, DEFAULT_TOLERANCE);
    assert!(result.x.is_none());
    assert_eq!(result.offset_y(), 2.0);
}

#[test]
fn both_axes_can_snap_at_once() {
    let index = index_of(&[make_shape(100.0, 100.0, 50.0, 50.0)]);
    let result = resolve(&edges(151.0, 153.0, 7.0, 7.0), &index, DEFAULT_TOLERANCE);
    assert_eq!(result.offsets(), (-1.0, -3.0));
    assert!(result.is_snapped());
}

// =============================================================
// Degenerate input
// =============================================================

#[test]
fn empty_index_yields_zero_offsets() {
    let result = resolve(&edges(10.0, 10.0, 10.0, 10.0), &BoundsIndex::empty(), DEFAULT_TOLERANCE);
    assert_eq!(result, SnapResult::none());
    assert_eq!(result.offsets(), (0.0, 0.0));
    assert!(!result.is_snapped());
}

#[test]
fn non_finite_target_does_not_snap() {
    let index = scenario_index();
    let result = resolve(&edges(f64::NAN, 0.0, 10.0, 10.0), &index, DEFAULT_TOLERANCE);
    assert!(result.x.is_none());
}

#[test]
fn negative_tolerance_does_not_snap() {
    let index = scenario_index();
    let result = resolve(&edges(50.0, 0.0, 10.0, 10.0), &index, -1.0);
    assert!(result.x.is_none());
}

#[test]
fn zero_tolerance_only_snaps_exact() {
    let index = scenario_index();
    assert!(resolve(&edges(50.0, 0.0, 7.0, 10.0), &index, 0.0).x.is_some());
    assert!(resolve(&edges(50.5, 0.0, 7.0, 10.0), &index, 0.0).x.is_none());
}

#[test]
fn distance_equal_to_tolerance_snaps() {
    let index = index_of(&[make_shape(100.0, 900.0, 40.0, 10.0)]);
    // Box 75..95: max is exactly 5 from 100, mid and min are further.
    let result = resolve(&edges(75.0, 0.0, 20.0, 10.0), &index, DEFAULT_TOLERANCE);
    assert_eq!(result.offset_x(), 5.0);
}
