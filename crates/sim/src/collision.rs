//! Collision detection between blobs.
//!
//! Colliders are found by indexing every blob in a point quadtree and asking
//! each blob for neighbours within its own radius plus the largest radius.

use crate::blob::Blob;
use fixedbitset::FixedBitSet;
use geometry::{Bounds, Circle, Point2D};
use quadtree::PointQuadtree;

/// A blob as stored in the tree, tagged with its slice index.
#[derive(Debug, Clone, Copy)]
struct Entry<'a> {
    index: usize,
    blob: &'a Blob,
}

impl Point2D for Entry<'_> {
    #[inline]
    fn x(&self) -> f64 {
        self.blob.x()
    }

    #[inline]
    fn y(&self) -> f64 {
        self.blob.y()
    }
}

/// Mark every blob that touches at least one other blob.
///
/// Blob centres must lie inside `border`, which becomes the root region.
/// A blob duplicated by boundary aliasing is recognised by its index, so it
/// never counts as colliding with itself.
pub fn find_colliders(blobs: &[Blob], border: &Bounds) -> FixedBitSet {
    let mut colliding = FixedBitSet::with_capacity(blobs.len());
    let entries = blobs.iter().enumerate().map(|(index, blob)| Entry { index, blob });
    let Some(tree) = PointQuadtree::from_points(*border, entries) else {
        return colliding;
    };

    let max_radius = blobs.iter().map(|b| b.radius as f64).fold(0.0, f64::max);
    for (index, blob) in blobs.iter().enumerate() {
        let reach = blob.radius as f64 + max_radius;
        let hit = tree
            .find_in(&Circle::new(blob.x(), blob.y(), reach))
            .into_iter()
            .any(|other| other.index != index && blob.touches(other.blob));
        colliding.set(index, hit);
    }
    colliding
}
