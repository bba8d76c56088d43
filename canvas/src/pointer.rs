//! Action pointers: the invisible, draggable anchors attached to a shape.
//!
//! A pointer knows where it sits, how close a press must land to grab it, and
//! which [`Handle`] role it plays. It does not mutate its shape directly.
//! While dragging, [`ActionPointer::on_mouse_move`] reports the incremental
//! delta and the owning shape applies the role's effect.

#[cfg(test)]
#[path = "pointer_test.rs"]
mod pointer_test;

use serde::Serialize;

use crate::geom::{Delta, Point};

/// One of the four rectangle corners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomRight,
    BottomLeft,
}

impl Corner {
    /// Corners in construction order.
    pub const ALL: [Corner; 4] = [Corner::TopLeft, Corner::TopRight, Corner::BottomRight, Corner::BottomLeft];

    /// Signs of the corner's outward diagonal, `(sign_x, sign_y)`.
    ///
    /// Screen space grows right and down, so top-left points to `(-1, -1)`.
    #[must_use]
    pub fn outward(self) -> (f64, f64) {
        match self {
            Self::TopLeft => (-1.0, -1.0),
            Self::TopRight => (1.0, -1.0),
            Self::BottomRight => (1.0, 1.0),
            Self::BottomLeft => (-1.0, 1.0),
        }
    }

    /// How a drag delta affects the radius for this corner.
    ///
    /// A delta along the outward diagonal (both components matching the
    /// outward signs, zero included) grows the radius; one along the inward
    /// diagonal shrinks it. A zero delta satisfies both and yields a zero
    /// step. Mixed directions return `None`.
    #[must_use]
    pub fn radius_step(self, delta: Delta) -> Option<f64> {
        let (sx, sy) = self.outward();
        let along_x = delta.dx * sx;
        let along_y = delta.dy * sy;
        let magnitude = delta.norm();
        if along_x >= 0.0 && along_y >= 0.0 {
            Some(magnitude)
        } else if along_x <= 0.0 && along_y <= 0.0 {
            Some(-magnitude)
        } else {
            None
        }
    }
}

/// The fixed role of an action pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Handle {
    /// Moves the whole shape.
    Center,
    /// Adjusts the corner radius along this corner's diagonal.
    Corner(Corner),
}

impl Handle {
    /// All five roles in scan order: center first, then the corners.
    pub const ALL: [Handle; 5] = [
        Handle::Center,
        Handle::Corner(Corner::TopLeft),
        Handle::Corner(Corner::TopRight),
        Handle::Corner(Corner::BottomRight),
        Handle::Corner(Corner::BottomLeft),
    ];
}

/// A draggable anchor owned by a shape.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionPointer {
    /// Current anchor position in scene space.
    pub position: Point,
    /// Presses within this distance of `position` grab the pointer.
    pub trigger_radius: f64,
    /// Whether the renderer should draw this pointer.
    pub visible: bool,
    /// Set between a grabbing press and the next release.
    pub dragging: bool,
    /// Pointer position seen on the previous move while dragging.
    pub drag_start: Point,
    handle: Handle,
}

impl ActionPointer {
    #[must_use]
    pub fn new(handle: Handle, position: Point, trigger_radius: f64) -> Self {
        Self {
            position,
            trigger_radius,
            visible: false,
            dragging: false,
            drag_start: Point::default(),
            handle,
        }
    }

    /// The role this pointer plays. Fixed for the pointer's lifetime.
    #[must_use]
    pub fn handle(&self) -> Handle {
        self.handle
    }

    /// Whether a press at `pt` lands within the trigger radius.
    #[must_use]
    pub fn is_hit(&self, pt: Point) -> bool {
        self.position.distance(pt) <= self.trigger_radius
    }

    /// Start dragging from the pointer position `pt`.
    pub fn grab(&mut self, pt: Point) {
        self.dragging = true;
        self.drag_start = pt;
    }

    /// Advance an active drag to `pt`.
    ///
    /// Returns the travel since the previous call, or `None` when the pointer
    /// is not being dragged. Deltas are frame-to-frame, not cumulative.
    pub fn on_mouse_move(&mut self, pt: Point) -> Option<Delta> {
        if !self.dragging {
            return None;
        }
        let delta = pt.delta_from(self.drag_start);
        self.drag_start = pt;
        Some(delta)
    }

    /// Slide the anchor by `delta`.
    pub fn shift(&mut self, delta: Delta) {
        self.position = self.position.offset(delta);
    }
}
