//! Scene controller: routes pointer gestures to shapes and orders rendering.
//!
//! The controller owns the shapes in insertion order. Handlers return a list
//! of [`Action`]s for the host; [`Action::RenderNeeded`] asks for a full
//! redraw. This type has no browser dependencies so it can be exercised
//! directly in tests; [`crate::engine::Engine`] wraps it for the canvas.

#[cfg(test)]
#[path = "scene_test.rs"]
mod scene_test;

use crate::config::{SceneConfig, Viewport};
use crate::consts::TRIGGER_RADIUS;
use crate::geom::Point;
use crate::input::{GestureEvent, GestureKind, InputState};
use crate::pointer::Handle;
use crate::render::{self, Style, Surface};
use crate::shape::Shape;
use crate::snapshot::{ShapeId, ShapeSnapshot};

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// A pointer on `id` was grabbed.
    DragStarted { id: ShapeId, handle: Handle },
    /// A dragged shape's geometry after the latest move.
    ShapeChanged(ShapeSnapshot),
    /// The drag on `id` ended.
    DragEnded { id: ShapeId },
    /// The scene should be redrawn.
    RenderNeeded,
}

/// Owns the scene's shapes and its drag state.
#[derive(Debug, Clone)]
pub struct SceneController {
    shapes: Vec<Shape>,
    pub style: Style,
    pub viewport: Viewport,
    pub trigger_radius: f64,
}

impl Default for SceneController {
    fn default() -> Self {
        Self {
            shapes: Vec::new(),
            style: Style::default(),
            viewport: Viewport::default(),
            trigger_radius: TRIGGER_RADIUS,
        }
    }
}

impl SceneController {
    /// An empty scene with default style and trigger radius.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a scene seeded from `config`.
    ///
    /// The config is taken as-is; call [`SceneConfig::validate`] first for
    /// untrusted input.
    #[must_use]
    pub fn from_config(config: &SceneConfig) -> Self {
        let shapes = config
            .shapes
            .iter()
            .map(|snap| Shape::from_snapshot(snap, config.trigger_radius))
            .collect();
        Self {
            shapes,
            style: config.style.clone(),
            viewport: config.viewport,
            trigger_radius: config.trigger_radius,
        }
    }

    // --- Scene membership ---

    /// Append a shape. Always asks for a redraw.
    pub fn add_shape(&mut self, id: ShapeId, x: f64, y: f64, width: f64, height: f64, radius: f64) -> Vec<Action> {
        self.shapes
            .push(Shape::with_trigger_radius(id, x, y, width, height, radius, self.trigger_radius));
        tracing::debug!(id, x, y, width, height, radius, "shape added");
        vec![Action::RenderNeeded]
    }

    /// Remove every shape with `id`. Returns whether anything was removed.
    ///
    /// Unknown ids are a no-op. No redraw is requested.
    pub fn remove_shape(&mut self, id: ShapeId) -> bool {
        let before = self.shapes.len();
        self.shapes.retain(|s| s.id() != id);
        let removed = self.shapes.len() != before;
        if removed {
            tracing::debug!(id, "shape removed");
        }
        removed
    }

    // --- Queries ---

    /// Look up a shape by id.
    #[must_use]
    pub fn shape(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.iter().find(|s| s.id() == id)
    }

    /// Mutable lookup, for programmatic setters.
    pub fn shape_mut(&mut self, id: ShapeId) -> Option<&mut Shape> {
        self.shapes.iter_mut().find(|s| s.id() == id)
    }

    /// Shapes in insertion order.
    #[must_use]
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    #[must_use]
    pub fn snapshots(&self) -> Vec<ShapeSnapshot> {
        self.shapes.iter().map(Shape::snapshot).collect()
    }

    /// Snapshots as a JSON array, for hosts that cannot take Rust values.
    ///
    /// # Errors
    ///
    /// Returns `Err` if serialization fails.
    pub fn snapshots_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.snapshots())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// True while any shape is being dragged.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.shapes.iter().any(Shape::is_dragging)
    }

    /// Current drag state, read from the shapes' own flags.
    ///
    /// The first dragging shape in insertion order wins. Releasing or
    /// removing that shape, by any path, returns the scene to idle.
    #[must_use]
    pub fn input(&self) -> InputState {
        self.shapes
            .iter()
            .filter(|s| s.is_dragging())
            .find_map(|s| s.active_handle().map(|handle| InputState::Dragging { id: s.id(), handle }))
            .unwrap_or_default()
    }

    /// Shapes in draw order: non-dragging first, dragging last.
    ///
    /// The sort is stable, so insertion order is kept within each group.
    #[must_use]
    pub fn render_order(&self) -> Vec<&Shape> {
        let mut ordered: Vec<&Shape> = self.shapes.iter().collect();
        ordered.sort_by_key(|s| s.is_dragging());
        ordered
    }

    // --- Input events ---

    /// Dispatch a normalized gesture event to the matching handler.
    pub fn handle(&mut self, event: GestureEvent) -> Vec<Action> {
        let pt = event.point();
        match event.kind {
            GestureKind::Down => self.on_pointer_down(pt),
            GestureKind::Move => self.on_pointer_move(pt),
            GestureKind::Up => self.on_pointer_up(pt),
        }
    }

    /// Grab a pointer on the first shape under `pt`, if any.
    ///
    /// Only the first hit shape is offered the press, even when its pointers
    /// are all out of reach.
    pub fn on_pointer_down(&mut self, pt: Point) -> Vec<Action> {
        let mut actions = Vec::new();
        for shape in &mut self.shapes {
            if !shape.trace_ray(pt) {
                continue;
            }
            if let Some(handle) = shape.on_click(pt) {
                let id = shape.id();
                tracing::debug!(id, ?handle, "drag started");
                actions.push(Action::DragStarted { id, handle });
            }
            break;
        }
        actions.push(Action::RenderNeeded);
        actions
    }

    /// Advance active drags, or refresh hover on every shape when idle.
    pub fn on_pointer_move(&mut self, pt: Point) -> Vec<Action> {
        let mut actions = Vec::new();
        if self.is_dragging() {
            for shape in self.shapes.iter_mut().filter(|s| s.is_dragging()) {
                shape.trace_ray(pt);
                actions.push(Action::ShapeChanged(shape.snapshot()));
            }
        } else {
            for shape in &mut self.shapes {
                shape.trace_ray(pt);
            }
        }
        actions.push(Action::RenderNeeded);
        actions
    }

    /// Release every shape, which returns the scene to idle.
    pub fn on_pointer_up(&mut self, pt: Point) -> Vec<Action> {
        let mut actions = Vec::new();
        for shape in &mut self.shapes {
            if shape.is_dragging() {
                tracing::debug!(id = shape.id(), "drag ended");
                actions.push(Action::DragEnded { id: shape.id() });
            }
            shape.release_mouse(pt);
        }
        actions.push(Action::RenderNeeded);
        actions
    }

    // --- Render ---

    /// Clear the viewport and draw every shape, dragged shapes on top.
    ///
    /// # Errors
    ///
    /// Returns `Err` if any surface call fails.
    pub fn render<S: Surface>(&self, surface: &mut S) -> Result<(), S::Error> {
        render::draw(surface, self.render_order(), &self.style, self.viewport.width, self.viewport.height)
    }

    /// Record the host's surface size.
    pub fn set_viewport(&mut self, width: f64, height: f64) {
        self.viewport = Viewport { width, height };
    }
}
