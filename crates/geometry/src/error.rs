//! Geometry error types.

use thiserror::Error;

/// Errors raised when building shapes from untrusted values.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    #[error("Inverted bounds: ({x1}, {y1}) is not above-left of ({x2}, {y2})")]
    InvertedBounds { x1: f64, y1: f64, x2: f64, y2: f64 },

    #[error("Coordinate is not finite")]
    NonFinite,

    #[error("Negative radius: {0}")]
    NegativeRadius(f64),
}
