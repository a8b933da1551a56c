//! Gesture state machine for drag snapping.
//!
//! `Idle` until the host reports a pointer-down on a movable target, then
//! `Dragging` until pointer-up or an abort. The bounds index lives inside the
//! `Dragging` variant, so leaving the gesture drops it and an idle engine
//! cannot hold a stale index.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::doc::ShapeId;
use crate::index::BoundsIndex;

/// Why a gesture ended without a pointer-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AbortReason {
    /// A dragged shape was deleted mid-gesture.
    TargetDeleted,
    /// The host changed the selection mid-gesture.
    SelectionChanged,
    /// The window lost focus or the host otherwise cancelled.
    Cancelled,
}

/// Context for an in-progress drag.
#[derive(Debug, Clone)]
pub struct DragSession {
    /// Ids of the shapes being dragged; excluded from the index.
    pub selected: Vec<ShapeId>,
    /// Candidate lines built at pointer-down.
    pub index: BoundsIndex,
    /// Pointer-move frames handled so far.
    pub frames: u64,
}

impl DragSession {
    #[must_use]
    pub fn new(selected: Vec<ShapeId>, index: BoundsIndex) -> Self {
        Self { selected, index, frames: 0 }
    }

    /// Whether `id` is one of the dragged shapes.
    #[must_use]
    pub fn drags(&self, id: &ShapeId) -> bool {
        self.selected.contains(id)
    }
}

/// Internal state for the gesture state machine.
#[derive(Debug, Clone, Default)]
pub enum GestureState {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// The user is dragging one or more shapes.
    Dragging(DragSession),
}

impl GestureState {
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging(_))
    }

    /// The active session, if dragging.
    #[must_use]
    pub fn session(&self) -> Option<&DragSession> {
        match self {
            Self::Idle => None,
            Self::Dragging(session) => Some(session),
        }
    }

    /// Leave any gesture, returning the session that was active.
    pub fn reset(&mut self) -> Option<DragSession> {
        match std::mem::take(self) {
            Self::Idle => None,
            Self::Dragging(session) => Some(session),
        }
    }
}
