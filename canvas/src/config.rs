//! Scene configuration: trigger radius, viewport, style, and seed shapes.
//!
//! Every field is optional in JSON; missing fields take the defaults below.
//! The default scene is the three-rectangle demo.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_VIEWPORT_HEIGHT, DEFAULT_VIEWPORT_WIDTH, TRIGGER_RADIUS};
use crate::error::ConfigError;
use crate::geom::Rect;
use crate::render::Style;
use crate::snapshot::ShapeSnapshot;

/// Size of the drawing surface in scene units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self { width: DEFAULT_VIEWPORT_WIDTH, height: DEFAULT_VIEWPORT_HEIGHT }
    }
}

/// Everything needed to build a scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub trigger_radius: f64,
    pub viewport: Viewport,
    pub style: Style,
    pub shapes: Vec<ShapeSnapshot>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            trigger_radius: TRIGGER_RADIUS,
            viewport: Viewport::default(),
            style: Style::default(),
            shapes: demo_shapes(),
        }
    }
}

impl SceneConfig {
    /// Parse and validate a scene from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and any error from
    /// [`SceneConfig::validate`].
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Like [`SceneConfig::from_json`], with `None` meaning the demo scene.
    ///
    /// # Errors
    ///
    /// Same as [`SceneConfig::from_json`].
    pub fn from_optional_json(json: Option<&str>) -> Result<Self, ConfigError> {
        json.map_or_else(|| Ok(Self::default()), Self::from_json)
    }

    /// Check the trigger radius and the seed shapes.
    ///
    /// # Errors
    ///
    /// Returns the first problem found, checking shapes in order.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.trigger_radius.is_finite() || self.trigger_radius <= 0.0 {
            return Err(ConfigError::InvalidTriggerRadius(self.trigger_radius));
        }

        let mut seen = HashSet::new();
        for snap in &self.shapes {
            if !seen.insert(snap.id) {
                return Err(ConfigError::DuplicateShapeId(snap.id));
            }
            if ![snap.x, snap.y, snap.width, snap.height, snap.radius].iter().all(|v| v.is_finite()) {
                return Err(ConfigError::NonFiniteGeometry { id: snap.id });
            }
            if snap.width < 0.0 || snap.height < 0.0 {
                return Err(ConfigError::NegativeSize { id: snap.id, width: snap.width, height: snap.height });
            }
            let max = Rect::new(snap.x, snap.y, snap.width, snap.height).max_corner_radius();
            if !(0.0..=max).contains(&snap.radius) {
                return Err(ConfigError::RadiusOutOfRange { id: snap.id, radius: snap.radius, max });
            }
        }
        Ok(())
    }
}

/// The three demo rectangles.
#[must_use]
pub fn demo_shapes() -> Vec<ShapeSnapshot> {
    vec![
        ShapeSnapshot { id: 0, x: 100.0, y: 100.0, width: 200.0, height: 150.0, radius: 10.0 },
        ShapeSnapshot { id: 1, x: 400.0, y: 150.0, width: 300.0, height: 100.0, radius: 30.0 },
        ShapeSnapshot { id: 2, x: 150.0, y: 400.0, width: 250.0, height: 150.0, radius: 20.0 },
    ]
}
