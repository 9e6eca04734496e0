//! Shared geometry crate for the point quadtree.
//!
//! This crate contains:
//! - The `Point2D` capability every stored element exposes
//! - Axis-aligned `Bounds` and `Circle` shapes
//! - The two predicates the tree prunes with

mod bounds;
mod error;
mod predicates;

pub use bounds::{Bounds, Circle};
pub use error::GeometryError;
pub use predicates::{circle_intersects_rectangle, point_in_circle};

/// Anything with a position in the plane.
///
/// Coordinates follow screen convention: y grows downward.
pub trait Point2D {
    fn x(&self) -> f64;
    fn y(&self) -> f64;
}

impl Point2D for glam::Vec2 {
    #[inline]
    fn x(&self) -> f64 {
        self.x as f64
    }

    #[inline]
    fn y(&self) -> f64 {
        self.y as f64
    }
}

impl Point2D for glam::DVec2 {
    #[inline]
    fn x(&self) -> f64 {
        self.x
    }

    #[inline]
    fn y(&self) -> f64 {
        self.y
    }
}

impl Point2D for (f64, f64) {
    #[inline]
    fn x(&self) -> f64 {
        self.0
    }

    #[inline]
    fn y(&self) -> f64 {
        self.1
    }
}

impl<T: Point2D + ?Sized> Point2D for &T {
    #[inline]
    fn x(&self) -> f64 {
        (**self).x()
    }

    #[inline]
    fn y(&self) -> f64 {
        (**self).y()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::{DVec2, Vec2};

    #[test]
    fn test_point2d_impls() {
        let v = Vec2::new(1.5, -2.0);
        assert_eq!(v.x(), 1.5);
        assert_eq!(v.y(), -2.0);

        let d = DVec2::new(3.0, 4.0);
        assert_eq!((&d).x(), 3.0);

        let t = (7.0, 8.0);
        assert_eq!(t.y(), 8.0);
    }
}
