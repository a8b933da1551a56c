//! Alignment-guide snapping for canvas drag gestures.
//!
//! While the user drags a selection, this crate finds nearby edges and
//! centers of sibling shapes, nudges the drag so the selection lines up with
//! them, and describes the guide lines to show. It is a pure in-memory
//! geometry service: the host editor feeds it shapes, the viewport size and
//! per-move boxes, and applies the offsets and guide segments it returns.
//! Rendering and persistence stay with the host.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | [`engine::SnapEngine`], the gesture-driven façade the host calls |
//! | [`doc`] | Sibling shapes and their in-memory store |
//! | [`geom`] | Boxes, edges and axes |
//! | [`index`] | Per-gesture candidate lines ([`index::BoundsIndex`]) |
//! | [`search`] | Nearest-line binary search |
//! | [`resolve`] | Per-axis snap resolution |
//! | [`guide`] | Guide segment geometry and lifecycle |
//! | [`input`] | The drag gesture state machine |
//! | [`config`] | Tolerance, cohesion mode and guide style |
//! | [`error`] | Error types |
//! | [`consts`] | Shared numeric constants (tolerance, epsilons, guide style) |

pub mod config;
pub mod consts;
pub mod doc;
pub mod engine;
pub mod error;
pub mod geom;
pub mod guide;
pub mod index;
pub mod input;
pub mod resolve;
pub mod search;
