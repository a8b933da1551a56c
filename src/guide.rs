//! Guide segments: the visible lines shown while a snap is active.
//!
//! The renderer here only produces geometry. The host's overlay layer strokes
//! each [`GuideSegment`] using [`GuideStyle`] and erases them when the list
//! comes back empty.

#[cfg(test)]
#[path = "guide_test.rs"]
mod guide_test;

use serde::{Deserialize, Serialize};

use crate::consts::{EDGE_EPSILON, GUIDE_COLOR, GUIDE_STROKE_WIDTH};
use crate::geom::{Axis, BBoxEdges};
use crate::index::BoundsIndex;
use crate::resolve::{AxisSnap, SnapResult};

/// A guide line at `coordinate`, running from `span_start` to `span_end`
/// along the other axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GuideSegment {
    pub axis: Axis,
    pub coordinate: f64,
    pub span_start: f64,
    pub span_end: f64,
}

/// Stroke settings handed to the host overlay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GuideStyle {
    /// Stroke width in screen pixels.
    pub stroke_width: f64,
    /// CSS color string.
    pub color: String,
}

impl Default for GuideStyle {
    fn default() -> Self {
        Self { stroke_width: GUIDE_STROKE_WIDTH, color: GUIDE_COLOR.to_string() }
    }
}

/// Owns the guide segments for the current frame of a drag.
#[derive(Debug, Clone, Default)]
pub struct GuideRenderer {
    style: GuideStyle,
    segments: Vec<GuideSegment>,
}

impl GuideRenderer {
    #[must_use]
    pub fn new(style: GuideStyle) -> Self {
        Self { style, segments: Vec::new() }
    }

    /// Replace the current segments with those for `result`.
    ///
    /// `target` is the dragged box before correction. Each guide spans the
    /// corrected box and every sibling that contributed the matched line, so
    /// a vertical guide uses the y-corrected position and vice versa.
    pub fn draw(&mut self, result: &SnapResult, target: &BBoxEdges, index: &BoundsIndex) -> &[GuideSegment] {
        self.segments.clear();
        let (dx, dy) = result.offsets();
        let corrected = target.translated(dx, dy);
        for snap in [result.x, result.y].into_iter().flatten() {
            self.push_axis(&snap, &corrected, index);
        }
        &self.segments
    }

    fn push_axis(&mut self, snap: &AxisSnap, corrected: &BBoxEdges, index: &BoundsIndex) {
        let (own_start, own_end) = corrected.span_across(snap.axis);
        let lines = index.lines(snap.axis);

        for candidate in snap.aligned() {
            let coordinate = candidate.line;
            let duplicate = self
                .segments
                .iter()
                .any(|s| s.axis == snap.axis && (s.coordinate - coordinate).abs() < EDGE_EPSILON);
            if duplicate {
                continue;
            }

            let (span_start, span_end) = match lines.extent(coordinate) {
                Some((lo, hi)) => (own_start.min(lo), own_end.max(hi)),
                None => (own_start, own_end),
            };
            self.segments.push(GuideSegment { axis: snap.axis, coordinate, span_start, span_end });
        }
    }

    /// Remove every segment. Safe to call when nothing is drawn.
    pub fn clear(&mut self) {
        self.segments.clear();
    }

    /// Segments for the current frame.
    #[must_use]
    pub fn segments(&self) -> &[GuideSegment] {
        &self.segments
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    #[must_use]
    pub fn style(&self) -> &GuideStyle {
        &self.style
    }
}
