use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::{Cohesion, SnapConfig};
use crate::doc::{Shape, ShapeId, ShapeStore};
use crate::error::SnapError;
use crate::geom::AxisAlignedBox;
use crate::guide::{GuideRenderer, GuideSegment, GuideStyle};
use crate::index::BoundsIndex;
use crate::input::{AbortReason, DragSession, GestureState};
use crate::resolve::resolve;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// What the host applies and draws after a pointer-move.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DragUpdate {
    /// Add to every dragged item's x before repaint.
    pub offset_x: f64,
    /// Add to every dragged item's y before repaint.
    pub offset_y: f64,
    /// Guide segments to draw for this frame. Empty means erase all guides.
    pub guides: Vec<GuideSegment>,
}

impl DragUpdate {
    /// Zero offsets, no guides.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }
}

/// Snap engine state for one canvas.
///
/// The host mirrors sibling shapes into `store`, reports the viewport size,
/// and drives the gesture with [`begin_drag`](Self::begin_drag),
/// [`drag_move`](Self::drag_move), and [`end_drag`](Self::end_drag) or
/// [`abort_drag`](Self::abort_drag).
///
/// The viewport starts at 0x0. Until the host calls
/// [`set_viewport`](Self::set_viewport), only shapes touching the origin
/// become candidate lines.
pub struct SnapEngine {
    pub store: ShapeStore,
    config: SnapConfig,
    gesture: GestureState,
    guides: GuideRenderer,
    viewport_width: f64,
    viewport_height: f64,
}

impl Default for SnapEngine {
    fn default() -> Self {
        let config = SnapConfig::default();
        Self {
            store: ShapeStore::new(),
            guides: GuideRenderer::new(config.guide.clone()),
            config,
            gesture: GestureState::default(),
            viewport_width: 0.0,
            viewport_height: 0.0,
        }
    }
}

impl SnapEngine {
    /// Create an engine with a validated config.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if `config` fails validation.
    pub fn new(config: SnapConfig) -> Result<Self, SnapError> {
        config.validate()?;
        Ok(Self { guides: GuideRenderer::new(config.guide.clone()), config, ..Self::default() })
    }

    // --- Data inputs ---

    /// Replace the sibling set with a full snapshot.
    pub fn load_snapshot(&mut self, shapes: Vec<Shape>) {
        self.store.load_snapshot(shapes);
    }

    /// A shape was added to the canvas.
    pub fn apply_create(&mut self, shape: Shape) {
        self.store.insert(shape);
    }

    /// A shape moved or resized. Returns false if the shape is unknown.
    ///
    /// The index of an in-progress drag is not patched; the new bounds take
    /// effect at the next pointer-down.
    pub fn apply_update(&mut self, id: &ShapeId, bounds: AxisAlignedBox) -> bool {
        self.store.set_bounds(id, bounds)
    }

    /// A shape was removed. Deleting a dragged shape aborts the gesture.
    pub fn apply_delete(&mut self, id: &ShapeId) {
        self.store.remove(id);
        if self.gesture.session().is_some_and(|s| s.drags(id)) {
            self.abort_drag(AbortReason::TargetDeleted);
        }
    }

    /// Update the visible canvas size. Applies from the next pointer-down.
    pub fn set_viewport(&mut self, width: f64, height: f64) {
        self.viewport_width = width;
        self.viewport_height = height;
    }

    // --- Gesture ---

    /// Pointer-down on a movable target: build the index and start dragging.
    ///
    /// Ids the store does not know are ignored. If none remain the engine
    /// stays (or becomes) idle and this returns false. Calling while already
    /// dragging discards the old index and builds a new one.
    pub fn begin_drag(&mut self, selected: &[ShapeId]) -> bool {
        self.guides.clear();
        let selected: Vec<ShapeId> = selected.iter().copied().filter(|id| self.store.contains(id)).collect();
        if selected.is_empty() {
            debug!("drag ignored: no known target");
            self.gesture.reset();
            return false;
        }

        let index = BoundsIndex::build(self.store.iter(), &selected, self.viewport());
        debug!(targets = selected.len(), siblings = self.store.len(), "drag started");
        self.gesture = GestureState::Dragging(DragSession::new(selected, index));
        true
    }

    /// Pointer-move: snap the dragged boxes and redraw guides.
    ///
    /// `boxes` are the dragged items' current, uncorrected bounds with the
    /// primary target first. Returns a zero update when idle or when no
    /// usable target box is given.
    pub fn drag_move(&mut self, boxes: &[AxisAlignedBox]) -> DragUpdate {
        let GestureState::Dragging(session) = &mut self.gesture else {
            return DragUpdate::none();
        };
        session.frames += 1;

        let target = match self.config.cohesion {
            Cohesion::SingleTarget => boxes.first().copied(),
            Cohesion::CombinedBbox => AxisAlignedBox::union_all(boxes),
        };
        let Some(target) = target.filter(AxisAlignedBox::is_finite) else {
            debug!(frame = session.frames, "no usable target box; snapping skipped");
            self.guides.clear();
            return DragUpdate::none();
        };

        let edges = target.edges();
        let result = resolve(&edges, &session.index, self.config.tolerance);
        let guides = self.guides.draw(&result, &edges, &session.index).to_vec();
        let (offset_x, offset_y) = result.offsets();
        DragUpdate { offset_x, offset_y, guides }
    }

    /// Pointer-up: finish the gesture. Safe to call when idle.
    pub fn end_drag(&mut self) {
        self.guides.clear();
        if let Some(session) = self.gesture.reset() {
            debug!(frames = session.frames, "drag ended");
        }
    }

    /// Abandon the gesture without a pointer-up. Safe to call when idle.
    pub fn abort_drag(&mut self, reason: AbortReason) {
        self.guides.clear();
        if let Some(session) = self.gesture.reset() {
            debug!(?reason, frames = session.frames, "drag aborted");
        }
    }

    /// Drop all candidate lines and guides without leaving the gesture.
    ///
    /// Later moves in the same gesture return zero offsets.
    pub fn clear(&mut self) {
        if let GestureState::Dragging(session) = &mut self.gesture {
            session.index.clear();
        }
        self.guides.clear();
    }

    // --- Queries ---

    /// The current gesture state.
    #[must_use]
    pub fn state(&self) -> &GestureState {
        &self.gesture
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.gesture.is_dragging()
    }

    /// Guide segments from the most recent move.
    #[must_use]
    pub fn guides(&self) -> &[GuideSegment] {
        self.guides.segments()
    }

    /// Stroke settings for the host overlay.
    #[must_use]
    pub fn guide_style(&self) -> &GuideStyle {
        self.guides.style()
    }

    #[must_use]
    pub fn config(&self) -> &SnapConfig {
        &self.config
    }

    /// Look up a shape by ID.
    #[must_use]
    pub fn shape(&self, id: &ShapeId) -> Option<&Shape> {
        self.store.get(id)
    }

    /// Visible canvas bounds.
    #[must_use]
    pub fn viewport(&self) -> AxisAlignedBox {
        AxisAlignedBox::viewport(self.viewport_width, self.viewport_height)
    }
}
