//! Sibling shapes: the host-fed view of what sits on the canvas.
//!
//! The host owns the real scene graph. It mirrors each movable child of the
//! icon group into this store as a [`Shape`] (stable id plus bounding box) and
//! keeps it current with create/update/delete calls. The snap engine reads the
//! store once per drag gesture when it builds the bounds index.

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::geom::AxisAlignedBox;

/// Unique identifier for a shape on the canvas.
pub type ShapeId = Uuid;

/// A sibling shape as seen by the snap engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    /// Stable identifier assigned by the host.
    pub id: ShapeId,
    /// Current axis-aligned bounds in canvas coordinates.
    pub bounds: AxisAlignedBox,
}

impl Shape {
    #[must_use]
    pub fn new(id: ShapeId, bounds: AxisAlignedBox) -> Self {
        Self { id, bounds }
    }
}

/// In-memory store of sibling shapes, keyed by id. Iteration order is
/// unspecified.
pub struct ShapeStore {
    shapes: HashMap<ShapeId, Shape>,
}

impl ShapeStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self { shapes: HashMap::new() }
    }

    /// Insert or replace a shape. If a shape with the same `id` already
    /// exists it is overwritten.
    pub fn insert(&mut self, shape: Shape) {
        self.shapes.insert(shape.id, shape);
    }

    /// Remove a shape by id, returning it if it was present.
    pub fn remove(&mut self, id: &ShapeId) -> Option<Shape> {
        self.shapes.remove(id)
    }

    /// Return a reference to a shape by id.
    #[must_use]
    pub fn get(&self, id: &ShapeId) -> Option<&Shape> {
        self.shapes.get(id)
    }

    /// Replace the bounds of an existing shape. Returns false if the shape doesn't exist.
    pub fn set_bounds(&mut self, id: &ShapeId, bounds: AxisAlignedBox) -> bool {
        let Some(shape) = self.shapes.get_mut(id) else {
            return false;
        };
        shape.bounds = bounds;
        true
    }

    /// Replace all shapes with a full snapshot.
    pub fn load_snapshot(&mut self, shapes: Vec<Shape>) {
        self.shapes.clear();
        for shape in shapes {
            self.shapes.insert(shape.id, shape);
        }
    }

    /// Iterate over all shapes in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = &Shape> {
        self.shapes.values()
    }

    /// Returns `true` if a shape with this id is present.
    #[must_use]
    pub fn contains(&self, id: &ShapeId) -> bool {
        self.shapes.contains_key(id)
    }

    /// Number of shapes currently in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Returns `true` if the store contains no shapes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}

impl Default for ShapeStore {
    fn default() -> Self {
        Self::new()
    }
}
