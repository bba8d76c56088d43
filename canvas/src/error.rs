//! Error types for loading scene configuration.

use crate::snapshot::ShapeId;

/// Error returned by [`crate::config::SceneConfig::from_json`] and
/// [`crate::config::SceneConfig::validate`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The input is not valid scene JSON.
    #[error("invalid scene JSON: {0}")]
    Parse(#[from] serde_json::Error),
    /// The trigger radius must be a positive, finite number.
    #[error("trigger radius must be positive and finite, got {0}")]
    InvalidTriggerRadius(f64),
    /// Two seed shapes share an id.
    #[error("duplicate shape id {0}")]
    DuplicateShapeId(ShapeId),
    /// A seed shape has a NaN or infinite coordinate, size, or radius.
    #[error("shape {id} has non-finite geometry")]
    NonFiniteGeometry { id: ShapeId },
    /// A seed shape has a negative width or height.
    #[error("shape {id} has negative size {width}x{height}")]
    NegativeSize { id: ShapeId, width: f64, height: f64 },
    /// A seed shape's radius does not fit its size.
    #[error("shape {id} radius {radius} outside [0, {max}]")]
    RadiusOutOfRange { id: ShapeId, radius: f64, max: f64 },
}
