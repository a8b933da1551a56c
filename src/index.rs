//! Bounds index: the candidate guide lines for one drag gesture.
//!
//! DESIGN
//! ======
//! At gesture start every visible, unselected sibling contributes three
//! vertical lines (left, center, right) and three horizontal lines (top,
//! middle, bottom). Each line remembers the perpendicular extent of the
//! shapes that produced it so a guide can later be drawn across all of them.
//!
//! Lines live in a sorted array rather than a float-keyed hash map. Keys that
//! land within [`KEY_MERGE_EPSILON`] of each other are grouped into one line
//! whose key is the smallest member, so two shapes whose computed edges
//! differ only by rounding still share a guide.
//!
//! The index is built in one pass and never patched. A new gesture builds a
//! new index.

#[cfg(test)]
#[path = "index_test.rs"]
mod index_test;

use tracing::debug;

use crate::consts::KEY_MERGE_EPSILON;
use crate::doc::{Shape, ShapeId};
use crate::geom::{Axis, AxisAlignedBox, Edge};

// =============================================================================
// LINE MAP
// =============================================================================

/// Coordinate-keyed candidate lines for one axis.
///
/// `keys` is strictly ascending. `spans[i]` holds the sorted, deduplicated
/// perpendicular coordinates contributed to `keys[i]`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LineMap {
    keys: Vec<f64>,
    spans: Vec<Vec<f64>>,
}

impl LineMap {
    /// Group `(coordinate, extent)` entries into lines.
    fn from_entries(mut entries: Vec<(f64, [f64; 2])>) -> Self {
        entries.sort_by(|a, b| a.0.total_cmp(&b.0));

        let mut keys: Vec<f64> = Vec::new();
        let mut spans: Vec<Vec<f64>> = Vec::new();
        for (key, extent) in entries {
            let joins_group = keys.last().is_some_and(|&group| key - group <= KEY_MERGE_EPSILON);
            match spans.last_mut() {
                Some(values) if joins_group => values.extend_from_slice(&extent),
                _ => {
                    keys.push(key);
                    spans.push(extent.to_vec());
                }
            }
        }

        for values in &mut spans {
            values.sort_by(f64::total_cmp);
            values.dedup_by(|a, b| (*a - *b).abs() <= KEY_MERGE_EPSILON);
        }

        Self { keys, spans }
    }

    /// Ascending line coordinates.
    #[must_use]
    pub fn sorted_keys(&self) -> &[f64] {
        &self.keys
    }

    /// Perpendicular coordinates stored for the line at `coordinate`, if any.
    #[must_use]
    pub fn get(&self, coordinate: f64) -> Option<&[f64]> {
        let idx = self.keys.partition_point(|&k| k < coordinate - KEY_MERGE_EPSILON);
        let key = *self.keys.get(idx)?;
        if (key - coordinate).abs() <= KEY_MERGE_EPSILON {
            self.spans.get(idx).map(Vec::as_slice)
        } else {
            None
        }
    }

    /// `(min, max)` of the perpendicular coordinates at `coordinate`.
    #[must_use]
    pub fn extent(&self, coordinate: f64) -> Option<(f64, f64)> {
        let values = self.get(coordinate)?;
        let (first, last) = (values.first()?, values.last()?);
        Some((*first, *last))
    }

    /// Number of distinct lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns `true` if there are no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Iterate `(coordinate, perpendicular values)` in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = (f64, &[f64])> {
        self.keys.iter().copied().zip(self.spans.iter().map(Vec::as_slice))
    }

    fn clear(&mut self) {
        self.keys.clear();
        self.spans.clear();
    }
}

// =============================================================================
// BOUNDS INDEX
// =============================================================================

/// Vertical and horizontal candidate lines for the current gesture.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoundsIndex {
    vertical: LineMap,
    horizontal: LineMap,
}

impl BoundsIndex {
    /// An index with no lines.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build the index from `siblings`, skipping anything in `selected` and
    /// anything whose bounds miss `viewport`. Malformed bounds are skipped.
    #[must_use]
    pub fn build<'a, I>(siblings: I, selected: &[ShapeId], viewport: AxisAlignedBox) -> Self
    where
        I: IntoIterator<Item = &'a Shape>,
    {
        let mut vertical = Vec::new();
        let mut horizontal = Vec::new();
        let mut skipped = 0usize;

        for shape in siblings {
            if selected.contains(&shape.id) {
                continue;
            }
            if !shape.bounds.is_finite() || !viewport.intersects(&shape.bounds) {
                skipped += 1;
                continue;
            }

            let edges = shape.bounds.edges();
            let (min_y, max_y) = edges.span_across(Axis::Vertical);
            let (min_x, max_x) = edges.span_across(Axis::Horizontal);
            for edge in Edge::ALL {
                vertical.push((edges.along(Axis::Vertical, edge), [min_y, max_y]));
                horizontal.push((edges.along(Axis::Horizontal, edge), [min_x, max_x]));
            }
        }

        let index = Self {
            vertical: LineMap::from_entries(vertical),
            horizontal: LineMap::from_entries(horizontal),
        };
        debug!(
            vertical = index.vertical.len(),
            horizontal = index.horizontal.len(),
            skipped,
            "bounds index built"
        );
        index
    }

    /// Drop every line. Safe to call repeatedly.
    pub fn clear(&mut self) {
        self.vertical.clear();
        self.horizontal.clear();
    }

    /// Lines of the given family.
    #[must_use]
    pub fn lines(&self, axis: Axis) -> &LineMap {
        match axis {
            Axis::Vertical => &self.vertical,
            Axis::Horizontal => &self.horizontal,
        }
    }

    /// Ascending x coordinates of vertical lines.
    #[must_use]
    pub fn sorted_xs(&self) -> &[f64] {
        self.vertical.sorted_keys()
    }

    /// Ascending y coordinates of horizontal lines.
    #[must_use]
    pub fn sorted_ys(&self) -> &[f64] {
        self.horizontal.sorted_keys()
    }

    /// Returns `true` if neither axis has a line.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertical.is_empty() && self.horizontal.is_empty()
    }
}
