//! Shared numeric constants for the canvas crate.

// ── Hit-testing ─────────────────────────────────────────────────

/// Radius around an action pointer's anchor that counts as a hit, in scene units.
pub const TRIGGER_RADIUS: f64 = 10.0;

/// Number of action pointers owned by every shape (center + four corners).
pub const POINTER_COUNT: usize = 5;

// ── Rendering ───────────────────────────────────────────────────

/// A full turn in radians, used for pointer circles.
pub const FULL_TURN: f64 = 2.0 * std::f64::consts::PI;

/// Default shape fill color.
pub const SHAPE_FILL: &str = "purple";

/// Default shape outline color.
pub const SHAPE_STROKE: &str = "black";

/// Default shape outline width.
pub const SHAPE_STROKE_WIDTH: f64 = 5.0;

/// Default fill color for visible action pointers.
pub const POINTER_FILL: &str = "aqua";

/// Default outline color for visible action pointers.
pub const POINTER_STROKE: &str = "black";

/// Default outline width for visible action pointers.
pub const POINTER_STROKE_WIDTH: f64 = 2.0;

// ── Viewport ────────────────────────────────────────────────────

/// Viewport width used before the host reports a real size.
pub const DEFAULT_VIEWPORT_WIDTH: f64 = 800.0;

/// Viewport height used before the host reports a real size.
pub const DEFAULT_VIEWPORT_HEIGHT: f64 = 600.0;
