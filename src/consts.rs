//! Shared numeric constants for the sketch crate.

// ── Collapse ────────────────────────────────────────────────────

/// Duration of the collapse animation triggered by the host command.
pub const COLLAPSE_DURATION_MS: f64 = 3000.0;

/// Segment lengths are compared in tenths of a pixel; a rounded value below
/// this ends the collapse.
pub const NEAR_ZERO_TENTHS: f64 = 1.0;

// ── Input ───────────────────────────────────────────────────────

/// Minimum spacing between two pointer-move redraws.
pub const MOVE_THROTTLE_MS: f64 = 10.0;

// ── Markers ─────────────────────────────────────────────────────

/// Radius of an intersection marker in canvas pixels.
pub const MARKER_RADIUS_PX: f64 = 4.0;

/// Fill color of an intersection marker.
pub const MARKER_COLOR: &str = "red";
