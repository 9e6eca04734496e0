//! Point quadtree spatial index.
//!
//! Every node anchors one point and splits its region into four quadrants
//! around it. Children are created the first time a quadrant receives a
//! point, and circle queries skip whole subtrees whose region the circle
//! cannot reach.

mod error;
mod quadrant;
mod stats;
mod tree;

pub use error::QuadtreeError;
pub use quadrant::Quadrant;
pub use stats::QueryStats;
pub use tree::{Iter, PointQuadtree};

// Re-export the geometry surface callers need alongside the tree.
pub use geometry::{Bounds, Circle, GeometryError, Point2D};
