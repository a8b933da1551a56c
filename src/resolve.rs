//! Snap resolution: the per-move correction for a dragged box.
//!
//! Each axis is resolved on its own. The target's min, mid and max edges are
//! each paired with their nearest candidate line; the closest pair wins if it
//! is within tolerance, with ties going to min, then mid, then max. The
//! correction is `line - edge`, so its magnitude never exceeds the tolerance.

#[cfg(test)]
#[path = "resolve_test.rs"]
mod resolve_test;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::consts::EDGE_EPSILON;
use crate::geom::{Axis, BBoxEdges, Edge};
use crate::index::{BoundsIndex, LineMap};
use crate::search::nearest;

// =============================================================================
// TYPES
// =============================================================================

/// One target edge paired with its nearest candidate line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub edge: Edge,
    /// Coordinate of the target's edge before correction.
    pub edge_coordinate: f64,
    /// Coordinate of the nearest candidate line.
    pub line: f64,
    /// `|line - edge_coordinate|`.
    pub distance: f64,
}

impl Candidate {
    /// Correction that would put this edge on its line.
    #[must_use]
    pub fn offset(&self) -> f64 {
        self.line - self.edge_coordinate
    }
}

/// A snap on one axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisSnap {
    pub axis: Axis,
    /// Correction to add to the dragged items along this axis.
    pub offset: f64,
    /// The edge that decided the snap.
    pub matched_edge: Edge,
    /// The candidate line the matched edge lands on.
    pub matched_coordinate: f64,
    /// All three edge/line pairings, in min, mid, max order.
    pub candidates: [Candidate; 3],
}

impl AxisSnap {
    /// Pairings that land on their line under this snap's offset.
    ///
    /// Always includes the matched edge. Other edges appear when they happen
    /// to align at the same offset, e.g. a box exactly as wide as its neighbor.
    pub fn aligned(&self) -> impl Iterator<Item = &Candidate> {
        self.candidates
            .iter()
            .filter(move |c| (c.offset() - self.offset).abs() < EDGE_EPSILON)
    }
}

/// Per-axis outcome of a resolve. `None` means no correction on that axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SnapResult {
    /// Snap against vertical lines (corrects x).
    pub x: Option<AxisSnap>,
    /// Snap against horizontal lines (corrects y).
    pub y: Option<AxisSnap>,
}

impl SnapResult {
    /// No snap on either axis.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn offset_x(&self) -> f64 {
        self.x.map_or(0.0, |s| s.offset)
    }

    #[must_use]
    pub fn offset_y(&self) -> f64 {
        self.y.map_or(0.0, |s| s.offset)
    }

    /// `(offset_x, offset_y)`, zero on axes that did not snap.
    #[must_use]
    pub fn offsets(&self) -> (f64, f64) {
        (self.offset_x(), self.offset_y())
    }

    /// Whether either axis snapped.
    #[must_use]
    pub fn is_snapped(&self) -> bool {
        self.x.is_some() || self.y.is_some()
    }
}

// =============================================================================
// RESOLVE
// =============================================================================

/// Resolve both axes of `target` against `index`.
///
/// Never fails: an empty axis, a non-finite edge, or a bad tolerance all mean
/// "no snap" on the affected axis.
#[must_use]
pub fn resolve(target: &BBoxEdges, index: &BoundsIndex, tolerance: f64) -> SnapResult {
    let result = SnapResult {
        x: resolve_axis(Axis::Vertical, target, index.lines(Axis::Vertical), tolerance),
        y: resolve_axis(Axis::Horizontal, target, index.lines(Axis::Horizontal), tolerance),
    };
    trace!(offset_x = result.offset_x(), offset_y = result.offset_y(), "resolved snap");
    result
}

fn resolve_axis(axis: Axis, target: &BBoxEdges, lines: &LineMap, tolerance: f64) -> Option<AxisSnap> {
    let keys = lines.sorted_keys();
    if keys.is_empty() || !tolerance.is_finite() || tolerance < 0.0 {
        return None;
    }

    let mut candidates = Edge::ALL.map(|edge| Candidate {
        edge,
        edge_coordinate: target.along(axis, edge),
        line: f64::NAN,
        distance: f64::INFINITY,
    });
    for candidate in &mut candidates {
        if !candidate.edge_coordinate.is_finite() {
            return None;
        }
        let Ok(line) = nearest(candidate.edge_coordinate, keys) else {
            return None;
        };
        candidate.line = line;
        candidate.distance = (line - candidate.edge_coordinate).abs();
    }

    let best = candidates
        .iter()
        .map(|c| c.distance)
        .fold(f64::INFINITY, f64::min);
    if best > tolerance {
        return None;
    }

    let matched = candidates.iter().find(|c| (c.distance - best).abs() < EDGE_EPSILON)?;
    Some(AxisSnap {
        axis,
        offset: matched.offset(),
        matched_edge: matched.edge,
        matched_coordinate: matched.line,
        candidates,
    })
}
