//! Rounded-rectangle shapes and their five action pointers.
//!
//! A [`Shape`] owns its pointers as a fixed array laid out in [`Handle::ALL`]
//! order. Hit-testing, drag start/stop, and the per-role drag effects all
//! live here; the scene controller only decides which shapes see an event.

#[cfg(test)]
#[path = "shape_test.rs"]
mod shape_test;

use crate::consts::{POINTER_COUNT, TRIGGER_RADIUS};
use crate::geom::{Delta, Point, Rect};
use crate::pointer::{ActionPointer, Corner, Handle};
use crate::render::{self, Style, Surface};
use crate::snapshot::{ShapeId, ShapeSnapshot};

/// A rounded rectangle with its interaction anchors.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    id: ShapeId,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    radius: f64,
    dragging: bool,
    trigger_radius: f64,
    pointers: [ActionPointer; POINTER_COUNT],
}

impl Shape {
    /// Create a shape with the default trigger radius.
    #[must_use]
    pub fn new(id: ShapeId, x: f64, y: f64, width: f64, height: f64, radius: f64) -> Self {
        Self::with_trigger_radius(id, x, y, width, height, radius, TRIGGER_RADIUS)
    }

    /// Create a shape whose pointers react within `trigger_radius`.
    #[must_use]
    pub fn with_trigger_radius(
        id: ShapeId,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        radius: f64,
        trigger_radius: f64,
    ) -> Self {
        let pointers = Handle::ALL.map(|handle| {
            let anchor = anchor_for(handle, Rect::new(x, y, width, height), trigger_radius);
            ActionPointer::new(handle, anchor, trigger_radius)
        });
        Self { id, x, y, width, height, radius, dragging: false, trigger_radius, pointers }
    }

    /// Build a shape from a snapshot.
    #[must_use]
    pub fn from_snapshot(snap: &ShapeSnapshot, trigger_radius: f64) -> Self {
        Self::with_trigger_radius(snap.id, snap.x, snap.y, snap.width, snap.height, snap.radius, trigger_radius)
    }

    // --- Accessors ---

    #[must_use]
    pub fn id(&self) -> ShapeId {
        self.id
    }

    #[must_use]
    pub fn x(&self) -> f64 {
        self.x
    }

    #[must_use]
    pub fn y(&self) -> f64 {
        self.y
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// True while one of this shape's pointers is being dragged.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    #[must_use]
    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    /// The five pointers in scan order (center, then corners clockwise from top-left).
    #[must_use]
    pub fn pointers(&self) -> &[ActionPointer; POINTER_COUNT] {
        &self.pointers
    }

    /// The pointer playing `handle`.
    #[must_use]
    pub fn pointer(&self, handle: Handle) -> Option<&ActionPointer> {
        self.pointers.iter().find(|p| p.handle() == handle)
    }

    /// Role of the pointer currently being dragged, if any.
    #[must_use]
    pub fn active_handle(&self) -> Option<Handle> {
        self.pointers.iter().find(|p| p.dragging).map(ActionPointer::handle)
    }

    #[must_use]
    pub fn snapshot(&self) -> ShapeSnapshot {
        ShapeSnapshot {
            id: self.id,
            x: self.x,
            y: self.y,
            width: self.width,
            height: self.height,
            radius: self.radius,
        }
    }

    // --- Setters ---

    /// Resize without validation. Pointers are re-anchored to the new bounds.
    pub fn set_size(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
        self.relayout_pointers();
    }

    /// Move the top-left corner without validation. Pointers follow.
    pub fn set_position(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
        self.relayout_pointers();
    }

    /// Set the corner radius as given. Callers own the range invariant.
    pub fn set_corner_radius(&mut self, radius: f64) {
        self.radius = radius;
    }

    // --- Interaction ---

    /// Hover/drag step for a pointer at `(x, y)`.
    ///
    /// Returns whether the point lies inside the bounding box (edges
    /// included). Every pointer's visibility is refreshed, and any pointer
    /// mid-drag advances by the travel since the previous call.
    pub fn trace_ray(&mut self, pt: Point) -> bool {
        let hit = self.bounds().contains(pt);
        for i in 0..POINTER_COUNT {
            let pointer = &mut self.pointers[i];
            pointer.visible = hit || pointer.dragging;
            let handle = pointer.handle();
            if let Some(delta) = pointer.on_mouse_move(pt) {
                self.apply_effect(handle, delta);
            }
        }
        hit
    }

    /// Start dragging the first pointer within reach of `pt`.
    ///
    /// Pointers are scanned in [`Handle::ALL`] order, so the center wins over
    /// a corner when both are in reach. Returns the grabbed role.
    pub fn on_click(&mut self, pt: Point) -> Option<Handle> {
        let pointer = self.pointers.iter_mut().find(|p| p.is_hit(pt))?;
        pointer.grab(pt);
        self.dragging = true;
        Some(pointer.handle())
    }

    /// End any drag on this shape. The release position is not used.
    pub fn release_mouse(&mut self, _pt: Point) {
        self.dragging = false;
        for pointer in &mut self.pointers {
            pointer.dragging = false;
        }
    }

    /// Draw the shape and its visible pointers.
    ///
    /// # Errors
    ///
    /// Returns `Err` if any surface call fails.
    pub fn render<S: Surface>(&self, surface: &mut S, style: &Style) -> Result<(), S::Error> {
        render::draw_shape(surface, self, style)
    }

    // --- Effects ---

    fn apply_effect(&mut self, handle: Handle, delta: Delta) {
        match handle {
            Handle::Center => self.translate(delta),
            Handle::Corner(corner) => self.adjust_radius(corner, delta),
        }
    }

    /// Move the shape and slide every pointer by the same amount.
    fn translate(&mut self, delta: Delta) {
        self.x += delta.dx;
        self.y += delta.dy;
        for pointer in &mut self.pointers {
            pointer.shift(delta);
        }
        tracing::trace!(id = self.id, x = self.x, y = self.y, "shape moved");
    }

    /// Grow or shrink the radius from a corner drag, clamped to what fits.
    fn adjust_radius(&mut self, corner: Corner, delta: Delta) {
        let Some(step) = corner.radius_step(delta) else {
            return;
        };
        let max = self.bounds().max_corner_radius();
        self.radius = (self.radius + step).clamp(0.0, max);
        tracing::trace!(id = self.id, radius = self.radius, ?corner, "radius changed");
    }

    fn relayout_pointers(&mut self) {
        let bounds = self.bounds();
        for pointer in &mut self.pointers {
            pointer.position = anchor_for(pointer.handle(), bounds, self.trigger_radius);
        }
    }
}

/// Anchor position of `handle` for a shape occupying `bounds`.
///
/// Corner anchors sit half a trigger radius inside their corner.
fn anchor_for(handle: Handle, bounds: Rect, trigger_radius: f64) -> Point {
    let inset = trigger_radius / 2.0;
    let Rect { x, y, width: w, height: h } = bounds;
    match handle {
        Handle::Center => bounds.center(),
        Handle::Corner(Corner::TopLeft) => Point::new(x + inset, y + inset),
        Handle::Corner(Corner::TopRight) => Point::new(x + w - inset, y + inset),
        Handle::Corner(Corner::BottomRight) => Point::new(x + w - inset, y + h - inset),
        Handle::Corner(Corner::BottomLeft) => Point::new(x + inset, y + h - inset),
    }
}
