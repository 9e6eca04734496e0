//! Quadtree error types.

use geometry::GeometryError;
use thiserror::Error;

/// Errors from the checked quadtree entry points.
///
/// The core operations never fail; these only come from validating input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QuadtreeError {
    #[error("Invalid quadrant: {0} (expected 1-4)")]
    InvalidQuadrant(u8),

    #[error("Point ({x}, {y}) lies outside the node region")]
    PointOutsideRegion { x: f64, y: f64 },

    #[error(transparent)]
    Geometry(#[from] GeometryError),
}
