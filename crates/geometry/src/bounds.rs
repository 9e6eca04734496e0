//! Axis-aligned rectangles and circles.

use crate::error::GeometryError;
use crate::predicates::{circle_intersects_rectangle, point_in_circle};
use crate::Point2D;

/// Axis-aligned bounding box, `(min_x, min_y)` upper-left to `(max_x, max_y)` lower-right.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    /// Create bounds without checking corner order.
    pub const fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self { min_x, min_y, max_x, max_y }
    }

    /// Create bounds, rejecting non-finite or inverted corners.
    pub fn try_new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Result<Self, GeometryError> {
        if ![min_x, min_y, max_x, max_y].iter().all(|v| v.is_finite()) {
            return Err(GeometryError::NonFinite);
        }
        if min_x > max_x || min_y > max_y {
            return Err(GeometryError::InvertedBounds {
                x1: min_x,
                y1: min_y,
                x2: max_x,
                y2: max_y,
            });
        }
        Ok(Self::new(min_x, min_y, max_x, max_y))
    }

    /// Check if a position lies inside or on the edge.
    #[inline]
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }

    #[inline]
    pub fn contains_point<P: Point2D>(&self, p: &P) -> bool {
        self.contains(p.x(), p.y())
    }

    /// Check if a circle overlaps or touches these bounds.
    #[inline]
    pub fn intersects_circle(&self, cx: f64, cy: f64, cr: f64) -> bool {
        circle_intersects_rectangle(cx, cy, cr, self.min_x, self.min_y, self.max_x, self.max_y)
    }
}

/// A circle in the plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
}

impl Circle {
    pub const fn new(cx: f64, cy: f64, radius: f64) -> Self {
        Self { cx, cy, radius }
    }

    /// Create a circle, rejecting non-finite values and negative radii.
    pub fn try_new(cx: f64, cy: f64, radius: f64) -> Result<Self, GeometryError> {
        if !(cx.is_finite() && cy.is_finite() && radius.is_finite()) {
            return Err(GeometryError::NonFinite);
        }
        if radius < 0.0 {
            return Err(GeometryError::NegativeRadius(radius));
        }
        Ok(Self::new(cx, cy, radius))
    }

    #[inline]
    pub fn contains<P: Point2D>(&self, p: &P) -> bool {
        point_in_circle(p.x(), p.y(), self.cx, self.cy, self.radius)
    }
}
