//! Plain geometry value types shared by the interaction model and renderer.

#[cfg(test)]
#[path = "geom_test.rs"]
mod geom_test;

use serde::{Deserialize, Serialize};

/// A point in scene space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    #[must_use]
    pub fn distance(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// The displacement that carries `origin` onto `self`.
    #[must_use]
    pub fn delta_from(self, origin: Point) -> Delta {
        Delta { dx: self.x - origin.x, dy: self.y - origin.y }
    }

    /// This point moved by `delta`.
    #[must_use]
    pub fn offset(self, delta: Delta) -> Point {
        Point { x: self.x + delta.dx, y: self.y + delta.dy }
    }
}

/// Frame-to-frame pointer travel.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Delta {
    pub dx: f64,
    pub dy: f64,
}

impl Delta {
    #[must_use]
    pub fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }

    /// Length of the displacement.
    #[must_use]
    pub fn norm(self) -> f64 {
        self.dx.hypot(self.dy)
    }
}

/// Axis-aligned rectangle given by its top-left corner and extents.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Inclusive containment: points on any edge count as inside.
    #[must_use]
    pub fn contains(&self, pt: Point) -> bool {
        pt.x >= self.x && pt.x <= self.x + self.width && pt.y >= self.y && pt.y <= self.y + self.height
    }

    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Largest corner radius that still fits, never negative.
    #[must_use]
    pub fn max_corner_radius(&self) -> f64 {
        (self.width.min(self.height) / 2.0).max(0.0)
    }
}
