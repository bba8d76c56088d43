use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, TouchEvent};

use crate::config::SceneConfig;
use crate::geom::Point;
use crate::input;
use crate::scene::{Action, SceneController};
use crate::snapshot::{ShapeId, ShapeSnapshot};

/// The browser engine. Owns the canvas element, its 2D context, and the scene.
///
/// Exported to JavaScript as `Engine`. The host wires DOM events to the
/// `on*` methods; each one normalizes the event, forwards it to the
/// [`SceneController`], and redraws on request. Shape ids cross the boundary
/// as `BigInt`.
#[wasm_bindgen]
pub struct Engine {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    #[wasm_bindgen(skip)]
    pub scene: SceneController,
}

impl Engine {
    /// Bind to `canvas` with the scene described by `config`.
    ///
    /// The canvas is sized to the config's viewport and drawn once.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the 2D context is unavailable or the first draw fails.
    pub fn with_config(canvas: HtmlCanvasElement, config: &SceneConfig) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        let mut engine = Self { canvas, ctx, scene: SceneController::from_config(config) };
        engine.resize(config.viewport.width, config.viewport.height)?;
        Ok(engine)
    }

    #[must_use]
    pub fn snapshots(&self) -> Vec<ShapeSnapshot> {
        self.scene.snapshots()
    }
}

#[wasm_bindgen]
impl Engine {
    /// `new Engine(canvas, configJson?)`. Without a config the demo scene is used.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the config is invalid, the 2D context is unavailable,
    /// or the first draw fails.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas: HtmlCanvasElement, config_json: Option<String>) -> Result<Engine, JsValue> {
        let config =
            SceneConfig::from_optional_json(config_json.as_deref()).map_err(|err| JsValue::from_str(&err.to_string()))?;
        Self::with_config(canvas, &config)
    }

    // --- Scene membership ---

    /// Add a shape and redraw.
    ///
    /// # Errors
    ///
    /// Returns `Err` if drawing fails.
    #[wasm_bindgen(js_name = addShape)]
    pub fn add_shape(&mut self, id: ShapeId, x: f64, y: f64, width: f64, height: f64, radius: f64) -> Result<(), JsValue> {
        let actions = self.scene.add_shape(id, x, y, width, height, radius);
        self.apply(&actions)
    }

    /// Remove a shape and redraw. Unknown ids are ignored.
    ///
    /// # Errors
    ///
    /// Returns `Err` if drawing fails.
    #[wasm_bindgen(js_name = removeShape)]
    pub fn remove_shape(&mut self, id: ShapeId) -> Result<(), JsValue> {
        if self.scene.remove_shape(id) {
            self.render()?;
        }
        Ok(())
    }

    /// Shape snapshots as a JSON array string.
    ///
    /// # Errors
    ///
    /// Returns `Err` if serialization fails.
    #[wasm_bindgen(js_name = snapshotsJson)]
    pub fn snapshots_json(&self) -> Result<String, JsValue> {
        self.scene.snapshots_json().map_err(|err| JsValue::from_str(&err.to_string()))
    }

    // --- Viewport ---

    /// Resize the canvas backing store and redraw.
    ///
    /// # Errors
    ///
    /// Returns `Err` if drawing fails.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn resize(&mut self, width: f64, height: f64) -> Result<(), JsValue> {
        self.canvas.set_width(width.max(0.0) as u32);
        self.canvas.set_height(height.max(0.0) as u32);
        self.scene.set_viewport(width, height);
        self.render()
    }

    // --- Input events ---

    /// # Errors
    ///
    /// Returns `Err` if drawing fails.
    #[wasm_bindgen(js_name = onMouseDown)]
    pub fn on_mouse_down(&mut self, event: &MouseEvent) -> Result<(), JsValue> {
        self.pointer_down(input::mouse_point(event))
    }

    /// # Errors
    ///
    /// Returns `Err` if drawing fails.
    #[wasm_bindgen(js_name = onMouseMove)]
    pub fn on_mouse_move(&mut self, event: &MouseEvent) -> Result<(), JsValue> {
        self.pointer_move(input::mouse_point(event))
    }

    /// # Errors
    ///
    /// Returns `Err` if drawing fails.
    #[wasm_bindgen(js_name = onMouseUp)]
    pub fn on_mouse_up(&mut self, event: &MouseEvent) -> Result<(), JsValue> {
        self.pointer_up(input::mouse_point(event))
    }

    /// Touch events without any touch point are ignored.
    ///
    /// # Errors
    ///
    /// Returns `Err` if drawing fails.
    #[wasm_bindgen(js_name = onTouchStart)]
    pub fn on_touch_start(&mut self, event: &TouchEvent) -> Result<(), JsValue> {
        match input::touch_point(event) {
            Some(pt) => self.pointer_down(pt),
            None => Ok(()),
        }
    }

    /// # Errors
    ///
    /// Returns `Err` if drawing fails.
    #[wasm_bindgen(js_name = onTouchMove)]
    pub fn on_touch_move(&mut self, event: &TouchEvent) -> Result<(), JsValue> {
        match input::touch_point(event) {
            Some(pt) => self.pointer_move(pt),
            None => Ok(()),
        }
    }

    /// # Errors
    ///
    /// Returns `Err` if drawing fails.
    #[wasm_bindgen(js_name = onTouchEnd)]
    pub fn on_touch_end(&mut self, event: &TouchEvent) -> Result<(), JsValue> {
        match input::touch_point(event) {
            Some(pt) => self.pointer_up(pt),
            None => Ok(()),
        }
    }

    // --- Render ---

    /// Draw the current scene to the canvas.
    ///
    /// # Errors
    ///
    /// Returns `Err` if any `Canvas2D` call fails.
    pub fn render(&mut self) -> Result<(), JsValue> {
        self.scene.render(&mut self.ctx)
    }
}

impl Engine {
    fn pointer_down(&mut self, pt: Point) -> Result<(), JsValue> {
        let actions = self.scene.on_pointer_down(pt);
        self.apply(&actions)
    }

    fn pointer_move(&mut self, pt: Point) -> Result<(), JsValue> {
        let actions = self.scene.on_pointer_move(pt);
        self.apply(&actions)
    }

    fn pointer_up(&mut self, pt: Point) -> Result<(), JsValue> {
        let actions = self.scene.on_pointer_up(pt);
        self.apply(&actions)
    }

    /// Redraw once if any action asks for it.
    fn apply(&mut self, actions: &[Action]) -> Result<(), JsValue> {
        if actions.contains(&Action::RenderNeeded) {
            self.render()?;
        }
        Ok(())
    }
}
