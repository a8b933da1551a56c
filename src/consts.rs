//! Shared numeric constants for the snap engine.

// ── Snapping ────────────────────────────────────────────────────

/// Default snap tolerance in canvas units (pixels at 1:1 zoom).
pub const DEFAULT_TOLERANCE: f64 = 5.0;

/// Two distances or offsets closer than this are treated as equal when
/// choosing the matched edge and when deciding which edges a guide covers.
pub const EDGE_EPSILON: f64 = 1e-5;

// ── Index ───────────────────────────────────────────────────────

/// Candidate coordinates closer than this collapse into one line during
/// index build. The smallest coordinate of a group is its key.
pub const KEY_MERGE_EPSILON: f64 = 1e-6;

// ── Guides ──────────────────────────────────────────────────────

/// Default guide stroke width in screen pixels.
pub const GUIDE_STROKE_WIDTH: f64 = 1.0;

/// Default guide stroke color.
pub const GUIDE_COLOR: &str = "#FF0000";
