//! Plain-data export of a shape's geometry.
//!
//! Snapshots are the one-way serialization surface: hosts and tests read them,
//! and scene configs use the same shape to seed a scene.

use serde::{Deserialize, Serialize};

/// Identifier of a shape, unique within a scene.
pub type ShapeId = u64;

/// Geometry of a shape at one moment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShapeSnapshot {
    pub id: ShapeId,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub radius: f64,
}
