#[cfg(test)]
#[path = "geom_test.rs"]
mod geom_test;

use serde::{Deserialize, Serialize};

/// A point in canvas space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Which family of guide lines a coordinate belongs to.
///
/// `Vertical` lines are keyed by x and span along y; `Horizontal` lines are
/// keyed by y and span along x.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    Vertical,
    Horizontal,
}

/// One of the three alignment edges of a box along a single axis.
///
/// Declaration order is the tie-break order used by the resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Edge {
    Min,
    Mid,
    Max,
}

impl Edge {
    pub const ALL: [Edge; 3] = [Edge::Min, Edge::Mid, Edge::Max];
}

/// Axis-aligned rectangle `{x, y, width, height}` in canvas space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisAlignedBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl AxisAlignedBox {
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// The box covering `(0, 0)` to `(width, height)`.
    #[must_use]
    pub fn viewport(width: f64, height: f64) -> Self {
        Self { x: 0.0, y: 0.0, width, height }
    }

    /// A box is malformed when any component is NaN or infinite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.width.is_finite() && self.height.is_finite()
    }

    /// Derive the six alignment edges, normalizing negative extents.
    #[must_use]
    pub fn edges(&self) -> BBoxEdges {
        let (min_x, max_x) = ordered(self.x, self.x + self.width);
        let (min_y, max_y) = ordered(self.y, self.y + self.height);
        BBoxEdges {
            min_x,
            mid_x: (min_x + max_x) / 2.0,
            max_x,
            min_y,
            mid_y: (min_y + max_y) / 2.0,
            max_y,
        }
    }

    /// Inclusive overlap test; boxes that only touch along an edge intersect.
    #[must_use]
    pub fn intersects(&self, other: &AxisAlignedBox) -> bool {
        let a = self.edges();
        let b = other.edges();
        a.min_x <= b.max_x && b.min_x <= a.max_x && a.min_y <= b.max_y && b.min_y <= a.max_y
    }

    /// Smallest box containing both `self` and `other`.
    #[must_use]
    pub fn union(&self, other: &AxisAlignedBox) -> AxisAlignedBox {
        let a = self.edges();
        let b = other.edges();
        let min_x = a.min_x.min(b.min_x);
        let min_y = a.min_y.min(b.min_y);
        let max_x = a.max_x.max(b.max_x);
        let max_y = a.max_y.max(b.max_y);
        AxisAlignedBox::new(min_x, min_y, max_x - min_x, max_y - min_y)
    }

    /// Union of every box in `boxes`, or `None` when the slice is empty or
    /// any box is non-finite.
    #[must_use]
    pub fn union_all(boxes: &[AxisAlignedBox]) -> Option<AxisAlignedBox> {
        if !boxes.iter().all(AxisAlignedBox::is_finite) {
            return None;
        }
        let (first, rest) = boxes.split_first()?;
        Some(rest.iter().fold(*first, |acc, b| acc.union(b)))
    }

    /// The same box moved by `(dx, dy)`.
    #[must_use]
    pub fn translated(&self, dx: f64, dy: f64) -> AxisAlignedBox {
        AxisAlignedBox::new(self.x + dx, self.y + dy, self.width, self.height)
    }
}

/// The six alignment coordinates of a box. Computed per query, never stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BBoxEdges {
    pub min_x: f64,
    pub mid_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub mid_y: f64,
    pub max_y: f64,
}

impl BBoxEdges {
    /// Coordinate of `edge` along the axis whose lines are keyed by it:
    /// x for vertical lines, y for horizontal lines.
    #[must_use]
    pub fn along(&self, axis: Axis, edge: Edge) -> f64 {
        match (axis, edge) {
            (Axis::Vertical, Edge::Min) => self.min_x,
            (Axis::Vertical, Edge::Mid) => self.mid_x,
            (Axis::Vertical, Edge::Max) => self.max_x,
            (Axis::Horizontal, Edge::Min) => self.min_y,
            (Axis::Horizontal, Edge::Mid) => self.mid_y,
            (Axis::Horizontal, Edge::Max) => self.max_y,
        }
    }

    /// `(min, max)` extent perpendicular to `axis`'s lines: y for vertical,
    /// x for horizontal.
    #[must_use]
    pub fn span_across(&self, axis: Axis) -> (f64, f64) {
        match axis {
            Axis::Vertical => (self.min_y, self.max_y),
            Axis::Horizontal => (self.min_x, self.max_x),
        }
    }

    /// The same edges moved by `(dx, dy)`.
    #[must_use]
    pub fn translated(&self, dx: f64, dy: f64) -> BBoxEdges {
        BBoxEdges {
            min_x: self.min_x + dx,
            mid_x: self.mid_x + dx,
            max_x: self.max_x + dx,
            min_y: self.min_y + dy,
            mid_y: self.mid_y + dy,
            max_y: self.max_y + dy,
        }
    }

    #[must_use]
    pub fn is_finite(&self) -> bool {
        [self.min_x, self.mid_x, self.max_x, self.min_y, self.mid_y, self.max_y]
            .iter()
            .all(|v| v.is_finite())
    }
}

fn ordered(a: f64, b: f64) -> (f64, f64) {
    if a <= b { (a, b) } else { (b, a) }
}
