//! Input model: normalized pointer gestures and the drag state machine.
//!
//! Native mouse and touch events are reduced to a [`GestureEvent`] carrying
//! only a kind and a scene-space point. [`InputState`] is what the scene
//! controller tracks between pointer-down and pointer-up.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use serde::{Deserialize, Serialize};
use web_sys::{MouseEvent, TouchEvent};

use crate::geom::Point;
use crate::pointer::Handle;
use crate::snapshot::ShapeId;

/// Which phase of a pointer gesture an event belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GestureKind {
    Down,
    Move,
    Up,
}

/// A normalized pointer event.
///
/// Serialized flat, e.g. `{"kind": "move", "x": 10, "y": 20}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GestureEvent {
    pub kind: GestureKind,
    pub x: f64,
    pub y: f64,
}

impl GestureEvent {
    #[must_use]
    pub fn down(x: f64, y: f64) -> Self {
        Self { kind: GestureKind::Down, x, y }
    }

    #[must_use]
    pub fn moved(x: f64, y: f64) -> Self {
        Self { kind: GestureKind::Move, x, y }
    }

    #[must_use]
    pub fn up(x: f64, y: f64) -> Self {
        Self { kind: GestureKind::Up, x, y }
    }

    #[must_use]
    pub fn point(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Drag state tracked by the scene controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputState {
    /// No drag in progress; moves only refresh hover.
    #[default]
    Idle,
    /// A pointer on `id` was grabbed on the last pointer-down.
    Dragging {
        /// Shape that owns the grabbed pointer.
        id: ShapeId,
        /// Role of the grabbed pointer.
        handle: Handle,
    },
}

impl InputState {
    #[must_use]
    pub fn is_dragging(self) -> bool {
        matches!(self, Self::Dragging { .. })
    }
}

// =============================================================
// Browser event normalization
// =============================================================

/// Position of a mouse event relative to its target element.
#[must_use]
pub fn mouse_point(event: &MouseEvent) -> Point {
    Point::new(f64::from(event.offset_x()), f64::from(event.offset_y()))
}

/// Page position of the first active touch.
///
/// On `touchend` the active list is already empty, so the first changed
/// touch is used instead. Returns `None` for an event with no touches at all.
#[must_use]
pub fn touch_point(event: &TouchEvent) -> Option<Point> {
    let touch = event.touches().get(0).or_else(|| event.changed_touches().get(0))?;
    Some(Point::new(f64::from(touch.page_x()), f64::from(touch.page_y())))
}
