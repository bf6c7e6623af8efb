//! Shared numeric constants for the canvas crate.

// ── Creation ────────────────────────────────────────────────────

/// Radius given to a wheel placed with the wheel tool.
pub const DEFAULT_WHEEL_RADIUS: f64 = 30.0;

// ── Hit-testing ─────────────────────────────────────────────────

/// Proximity slop for wheel edges, rod endpoints, rod bodies and pivots.
pub const HIT_SLOP: f64 = 5.0;

// ── Rendering ───────────────────────────────────────────────────

/// Radius of the dot drawn for a pivot.
pub const PIVOT_DRAW_RADIUS: f64 = 5.0;

/// Stroke width for wheels and rods.
pub const STROKE_WIDTH: f64 = 2.0;

/// Dash segment length for the rod preview.
pub const PREVIEW_DASH: f64 = 5.0;
