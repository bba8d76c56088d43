//! Rendering: draws shapes and their visible action pointers to a 2D surface.
//!
//! Drawing goes through the [`Surface`] trait so the same code paints a
//! browser canvas ([`web_sys::CanvasRenderingContext2d`]) or a [`Recorder`]
//! in tests and the CLI. Nothing here mutates scene state.
//!
//! Fallible surface calls propagate `S::Error`; the browser surface uses
//! `JsValue`, the recorder cannot fail.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use std::convert::Infallible;

use serde::{Deserialize, Serialize};
use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::consts::{
    FULL_TURN, POINTER_FILL, POINTER_STROKE, POINTER_STROKE_WIDTH, SHAPE_FILL, SHAPE_STROKE, SHAPE_STROKE_WIDTH,
};
use crate::shape::Shape;

/// Primitive 2D drawing operations the renderer needs.
pub trait Surface {
    type Error;

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64);
    fn begin_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn quadratic_curve_to(&mut self, cpx: f64, cpy: f64, x: f64, y: f64);

    /// Append a circular arc centered on `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns the surface's error when the arc is rejected (e.g. negative radius).
    fn arc(&mut self, x: f64, y: f64, radius: f64, start: f64, end: f64) -> Result<(), Self::Error>;

    fn set_fill_style(&mut self, color: &str);
    fn set_stroke_style(&mut self, color: &str);
    fn set_line_width(&mut self, width: f64);
    fn fill(&mut self);
    fn stroke(&mut self);
}

/// Colors and line widths for shapes and pointers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Style {
    pub fill: String,
    pub stroke: String,
    pub stroke_width: f64,
    pub pointer_fill: String,
    pub pointer_stroke: String,
    pub pointer_stroke_width: f64,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            fill: SHAPE_FILL.to_owned(),
            stroke: SHAPE_STROKE.to_owned(),
            stroke_width: SHAPE_STROKE_WIDTH,
            pointer_fill: POINTER_FILL.to_owned(),
            pointer_stroke: POINTER_STROKE.to_owned(),
            pointer_stroke_width: POINTER_STROKE_WIDTH,
        }
    }
}

/// Clear the viewport and draw `shapes` in the given order (first is bottom).
///
/// # Errors
///
/// Returns `Err` if any surface call fails.
pub fn draw<'a, S, I>(surface: &mut S, shapes: I, style: &Style, viewport_w: f64, viewport_h: f64) -> Result<(), S::Error>
where
    S: Surface,
    I: IntoIterator<Item = &'a Shape>,
{
    surface.clear_rect(0.0, 0.0, viewport_w, viewport_h);
    for shape in shapes {
        draw_shape(surface, shape, style)?;
    }
    Ok(())
}

/// Draw one rounded rectangle followed by its visible pointers.
///
/// # Errors
///
/// Returns `Err` if any surface call fails.
pub fn draw_shape<S: Surface>(surface: &mut S, shape: &Shape, style: &Style) -> Result<(), S::Error> {
    trace_rounded_rect(surface, shape.x(), shape.y(), shape.width(), shape.height(), shape.radius());
    surface.set_fill_style(&style.fill);
    surface.fill();
    surface.set_line_width(style.stroke_width);
    surface.set_stroke_style(&style.stroke);
    surface.stroke();

    for pointer in shape.pointers().iter().filter(|p| p.visible) {
        surface.begin_path();
        surface.arc(pointer.position.x, pointer.position.y, pointer.trigger_radius, 0.0, FULL_TURN)?;
        surface.set_fill_style(&style.pointer_fill);
        surface.fill();
        surface.set_line_width(style.pointer_stroke_width);
        surface.set_stroke_style(&style.pointer_stroke);
        surface.stroke();
    }
    Ok(())
}

/// Build a rounded-rectangle path, clockwise from the top edge.
///
/// Corners are quadratic curves with the rectangle corner as control point.
fn trace_rounded_rect<S: Surface>(surface: &mut S, x: f64, y: f64, w: f64, h: f64, r: f64) {
    surface.begin_path();
    surface.move_to(x + r, y);
    surface.line_to(x + w - r, y);
    surface.quadratic_curve_to(x + w, y, x + w, y + r);
    surface.line_to(x + w, y + h - r);
    surface.quadratic_curve_to(x + w, y + h, x + w - r, y + h);
    surface.line_to(x + r, y + h);
    surface.quadratic_curve_to(x, y + h, x, y + h - r);
    surface.line_to(x, y + r);
    surface.quadratic_curve_to(x, y, x + r, y);
}

// =============================================================
// Browser surface
// =============================================================

impl Surface for CanvasRenderingContext2d {
    type Error = JsValue;

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        CanvasRenderingContext2d::clear_rect(self, x, y, width, height);
    }

    fn begin_path(&mut self) {
        CanvasRenderingContext2d::begin_path(self);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        CanvasRenderingContext2d::move_to(self, x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        CanvasRenderingContext2d::line_to(self, x, y);
    }

    fn quadratic_curve_to(&mut self, cpx: f64, cpy: f64, x: f64, y: f64) {
        CanvasRenderingContext2d::quadratic_curve_to(self, cpx, cpy, x, y);
    }

    fn arc(&mut self, x: f64, y: f64, radius: f64, start: f64, end: f64) -> Result<(), JsValue> {
        CanvasRenderingContext2d::arc(self, x, y, radius, start, end)
    }

    fn set_fill_style(&mut self, color: &str) {
        self.set_fill_style_str(color);
    }

    fn set_stroke_style(&mut self, color: &str) {
        self.set_stroke_style_str(color);
    }

    fn set_line_width(&mut self, width: f64) {
        CanvasRenderingContext2d::set_line_width(self, width);
    }

    fn fill(&mut self) {
        CanvasRenderingContext2d::fill(self);
    }

    fn stroke(&mut self) {
        CanvasRenderingContext2d::stroke(self);
    }
}

// =============================================================
// Recording surface
// =============================================================

/// One recorded surface call.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawCommand {
    ClearRect { x: f64, y: f64, width: f64, height: f64 },
    BeginPath,
    MoveTo { x: f64, y: f64 },
    LineTo { x: f64, y: f64 },
    QuadraticCurveTo { cpx: f64, cpy: f64, x: f64, y: f64 },
    Arc { x: f64, y: f64, radius: f64, start: f64, end: f64 },
    FillStyle { color: String },
    StrokeStyle { color: String },
    LineWidth { width: f64 },
    Fill,
    Stroke,
}

/// A [`Surface`] that records every call instead of drawing.
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    pub commands: Vec<DrawCommand>,
}

impl Recorder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of arcs drawn, i.e. visible pointers.
    #[must_use]
    pub fn arc_count(&self) -> usize {
        self.commands.iter().filter(|c| matches!(c, DrawCommand::Arc { .. })).count()
    }
}

impl Surface for Recorder {
    type Error = Infallible;

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.commands.push(DrawCommand::ClearRect { x, y, width, height });
    }

    fn begin_path(&mut self) {
        self.commands.push(DrawCommand::BeginPath);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.commands.push(DrawCommand::MoveTo { x, y });
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.commands.push(DrawCommand::LineTo { x, y });
    }

    fn quadratic_curve_to(&mut self, cpx: f64, cpy: f64, x: f64, y: f64) {
        self.commands.push(DrawCommand::QuadraticCurveTo { cpx, cpy, x, y });
    }

    fn arc(&mut self, x: f64, y: f64, radius: f64, start: f64, end: f64) -> Result<(), Infallible> {
        self.commands.push(DrawCommand::Arc { x, y, radius, start, end });
        Ok(())
    }

    fn set_fill_style(&mut self, color: &str) {
        self.commands.push(DrawCommand::FillStyle { color: color.to_owned() });
    }

    fn set_stroke_style(&mut self, color: &str) {
        self.commands.push(DrawCommand::StrokeStyle { color: color.to_owned() });
    }

    fn set_line_width(&mut self, width: f64) {
        self.commands.push(DrawCommand::LineWidth { width });
    }

    fn fill(&mut self) {
        self.commands.push(DrawCommand::Fill);
    }

    fn stroke(&mut self) {
        self.commands.push(DrawCommand::Stroke);
    }
}
