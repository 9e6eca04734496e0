//! The point quadtree node.
//!
//! A node owns one anchor point, the region it is responsible for, and up
//! to four children, one per quadrant around the anchor. Walks use an
//! explicit stack so a skewed tree (sorted input gives depth `n`) never
//! runs out of call stack.

use std::fmt;

use geometry::{point_in_circle, Bounds, Circle, Point2D};
use tracing::trace;

use crate::error::QuadtreeError;
use crate::quadrant::Quadrant;
use crate::stats::QueryStats;

/// A node of a point quadtree; the root node is the tree.
pub struct PointQuadtree<P> {
    /// The point anchoring this node.
    point: P,
    /// Region this node and its descendants cover.
    bounds: Bounds,
    /// Children indexed by `Quadrant::slot`.
    children: [Option<Box<PointQuadtree<P>>>; 4],
}

impl<P> PointQuadtree<P> {
    /// Create a leaf holding `point` in `bounds`.
    ///
    /// The point is not checked against the bounds; see [`PointQuadtree::try_new`].
    pub fn with_bounds(point: P, bounds: Bounds) -> Self {
        Self {
            point,
            bounds,
            children: [None, None, None, None],
        }
    }

    /// The anchor point of this node.
    #[inline]
    pub fn point(&self) -> &P {
        &self.point
    }

    #[inline]
    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    #[inline]
    pub fn x1(&self) -> f64 {
        self.bounds.min_x
    }

    #[inline]
    pub fn y1(&self) -> f64 {
        self.bounds.min_y
    }

    #[inline]
    pub fn x2(&self) -> f64 {
        self.bounds.max_x
    }

    #[inline]
    pub fn y2(&self) -> f64 {
        self.bounds.max_y
    }

    /// Get the child at quadrant 1-4. Any other number yields `None`.
    pub fn child(&self, quadrant: u8) -> Option<&Self> {
        Quadrant::try_from(quadrant).ok().and_then(|q| self.child_in(q))
    }

    /// Check for a child at quadrant 1-4. Any other number yields `false`.
    pub fn has_child(&self, quadrant: u8) -> bool {
        self.child(quadrant).is_some()
    }

    #[inline]
    pub fn child_in(&self, quadrant: Quadrant) -> Option<&Self> {
        self.children[quadrant.slot()].as_deref()
    }

    /// Present children in quadrant order.
    pub fn children(&self) -> impl Iterator<Item = &Self> {
        self.children.iter().filter_map(|c| c.as_deref())
    }

    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.children.iter().all(Option::is_none)
    }

    /// Number of points stored in this node and all descendants.
    pub fn size(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.children());
        }
        count
    }

    /// Number of levels below and including this node; a leaf has depth 1.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(self, 1)];
        while let Some((node, level)) = stack.pop() {
            deepest = deepest.max(level);
            stack.extend(node.children().map(|child| (child, level + 1)));
        }
        deepest
    }

    /// Pre-order iterator: this node's point, then quadrants 1 to 4.
    pub fn iter(&self) -> Iter<'_, P> {
        Iter { stack: vec![self] }
    }

    /// Every point in this subtree, in pre-order.
    pub fn all_points(&self) -> Vec<&P> {
        self.iter().collect()
    }
}

impl<P: Point2D> PointQuadtree<P> {
    /// Create a leaf holding `point` in the rectangle `(x1, y1)`-`(x2, y2)`.
    pub fn new(point: P, x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self::with_bounds(point, Bounds::new(x1, y1, x2, y2))
    }

    /// Create a leaf, checking the rectangle and that it contains `point`.
    pub fn try_new(point: P, bounds: Bounds) -> Result<Self, QuadtreeError> {
        let bounds = Bounds::try_new(bounds.min_x, bounds.min_y, bounds.max_x, bounds.max_y)?;
        if !bounds.contains_point(&point) {
            return Err(QuadtreeError::PointOutsideRegion {
                x: point.x(),
                y: point.y(),
            });
        }
        Ok(Self::with_bounds(point, bounds))
    }

    /// Build a tree rooted at the first point, inserting the rest in order.
    ///
    /// Returns `None` for an empty iterator.
    pub fn from_points<I>(bounds: Bounds, points: I) -> Option<Self>
    where
        I: IntoIterator<Item = P>,
        P: Clone,
    {
        let mut points = points.into_iter();
        let mut tree = Self::with_bounds(points.next()?, bounds);
        for point in points {
            tree.insert(point);
        }
        Some(tree)
    }

    /// Insert a point below this node.
    ///
    /// Each quadrant test runs independently, so a point sharing an axis
    /// coordinate with an anchor is placed in every quadrant that accepts it.
    /// A quadrant either hands the point to its existing child or gets a new
    /// leaf whose region is that quadrant of the parent's region.
    ///
    /// A point outside this node's region is still placed by its position
    /// relative to the anchors, but circle queries around it will not find it:
    /// pruning uses the nominal regions. Use [`PointQuadtree::try_new`] and
    /// [`Bounds::contains_point`] to keep points inside.
    pub fn insert(&mut self, point: P)
    where
        P: Clone,
    {
        let (px, py) = (point.x(), point.y());
        let mut stack = vec![self];

        while let Some(node) = stack.pop() {
            let (ax, ay) = (node.point.x(), node.point.y());
            let bounds = node.bounds;

            for (quadrant, slot) in Quadrant::ALL.into_iter().zip(node.children.iter_mut()) {
                if !quadrant.contains(ax, ay, px, py) {
                    continue;
                }
                if slot.is_none() {
                    trace!(%quadrant, ax, ay, px, py, "new leaf");
                    let region = quadrant.split(&bounds, ax, ay);
                    *slot = Some(Box::new(Self::with_bounds(point.clone(), region)));
                    continue;
                }
                if let Some(child) = slot.as_deref_mut() {
                    stack.push(child);
                }
            }
        }
    }

    /// All points within or on the circle centred at `(cx, cy)` with radius `cr`.
    ///
    /// Results follow pre-order like [`PointQuadtree::all_points`].
    pub fn find_in_circle(&self, cx: f64, cy: f64, cr: f64) -> Vec<&P> {
        let mut found = Vec::new();
        self.accumulate_in_circle(&mut found, cx, cy, cr);
        found
    }

    pub fn find_in(&self, circle: &Circle) -> Vec<&P> {
        self.find_in_circle(circle.cx, circle.cy, circle.radius)
    }

    /// Same as [`PointQuadtree::find_in_circle`], also counting visited and pruned nodes.
    pub fn find_in_circle_with_stats(&self, cx: f64, cy: f64, cr: f64) -> (Vec<&P>, QueryStats) {
        let mut found = Vec::new();
        let stats = self.accumulate_in_circle(&mut found, cx, cy, cr);
        (found, stats)
    }

    /// Push every point of this subtree inside the circle onto `found`.
    ///
    /// A node whose region misses the circle is skipped with its whole
    /// subtree; otherwise its anchor is tested and its children are queued.
    fn accumulate_in_circle<'a>(
        &'a self,
        found: &mut Vec<&'a P>,
        cx: f64,
        cy: f64,
        cr: f64,
    ) -> QueryStats {
        let mut stats = QueryStats::default();
        let mut stack = vec![self];

        while let Some(node) = stack.pop() {
            if !node.bounds.intersects_circle(cx, cy, cr) {
                stats.nodes_pruned += 1;
                continue;
            }
            stats.nodes_visited += 1;

            if point_in_circle(node.point.x(), node.point.y(), cx, cy, cr) {
                found.push(&node.point);
            }
            // Reversed so quadrant 1 is popped first.
            stack.extend(node.children.iter().rev().filter_map(|c| c.as_deref()));
        }

        stats
    }
}

impl<P> Drop for PointQuadtree<P> {
    fn drop(&mut self) {
        // Detach descendants onto the heap so dropping never recurses per level.
        let mut stack: Vec<Box<PointQuadtree<P>>> =
            self.children.iter_mut().filter_map(Option::take).collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.children.iter_mut().filter_map(Option::take));
        }
    }
}

impl<P: Point2D> fmt::Debug for PointQuadtree<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PointQuadtree")
            .field("anchor", &(self.point.x(), self.point.y()))
            .field("bounds", &self.bounds)
            .field("size", &self.size())
            .finish()
    }
}

impl<'a, P> IntoIterator for &'a PointQuadtree<P> {
    type Item = &'a P;
    type IntoIter = Iter<'a, P>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Pre-order iterator over the points of a subtree.
pub struct Iter<'a, P> {
    stack: Vec<&'a PointQuadtree<P>>,
}

impl<'a, P> Iterator for Iter<'a, P> {
    type Item = &'a P;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack
            .extend(node.children.iter().rev().filter_map(|c| c.as_deref()));
        Some(&node.point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Dot {
        id: u32,
        x: f64,
        y: f64,
    }

    impl Dot {
        fn new(id: u32, x: f64, y: f64) -> Self {
            Self { id, x, y }
        }
    }

    impl Point2D for Dot {
        fn x(&self) -> f64 {
            self.x
        }

        fn y(&self) -> f64 {
            self.y
        }
    }

    fn ids(points: &[&Dot]) -> Vec<u32> {
        points.iter().map(|d| d.id).collect()
    }

    fn centred_tree() -> PointQuadtree<Dot> {
        PointQuadtree::new(Dot::new(0, 50.0, 50.0), 0.0, 0.0, 100.0, 100.0)
    }

    #[test]
    fn test_leaf() {
        let tree = centred_tree();
        assert_eq!(tree.size(), 1);
        assert_eq!(tree.depth(), 1);
        assert!(tree.is_leaf());
        assert_eq!(ids(&tree.all_points()), vec![0]);
        assert_eq!((tree.x1(), tree.y1(), tree.x2(), tree.y2()), (0.0, 0.0, 100.0, 100.0));
        assert_eq!(tree.point().id, 0);
    }

    #[test]
    fn test_quadrant_partition() {
        let mut tree = centred_tree();
        tree.insert(Dot::new(1, 70.0, 30.0));
        tree.insert(Dot::new(2, 30.0, 30.0));
        tree.insert(Dot::new(3, 30.0, 70.0));
        tree.insert(Dot::new(4, 70.0, 70.0));

        let q1 = tree.child(1).unwrap();
        assert_eq!(q1.point().id, 1);
        assert_eq!(*q1.bounds(), Bounds::new(50.0, 0.0, 100.0, 50.0));
        assert_eq!(tree.child(2).unwrap().point().id, 2);
        assert_eq!(*tree.child(2).unwrap().bounds(), Bounds::new(0.0, 0.0, 50.0, 50.0));
        assert_eq!(tree.child(3).unwrap().point().id, 3);
        assert_eq!(*tree.child(3).unwrap().bounds(), Bounds::new(0.0, 50.0, 50.0, 100.0));
        assert_eq!(tree.child(4).unwrap().point().id, 4);
        assert_eq!(*tree.child(4).unwrap().bounds(), Bounds::new(50.0, 50.0, 100.0, 100.0));

        // Descends into the existing quadrant-1 child.
        tree.insert(Dot::new(5, 80.0, 20.0));
        let q1 = tree.child(1).unwrap();
        assert_eq!(q1.point().id, 1);
        let nested = q1.child(1).unwrap();
        assert_eq!(nested.point().id, 5);
        assert_eq!(*nested.bounds(), Bounds::new(70.0, 0.0, 100.0, 30.0));
        assert_eq!(tree.size(), 6);
        assert_eq!(tree.depth(), 3);
    }

    #[test]
    fn test_invalid_quadrant_lookup() {
        let mut tree = centred_tree();
        tree.insert(Dot::new(1, 70.0, 30.0));
        assert!(tree.has_child(1));
        assert!(!tree.has_child(2));
        assert!(!tree.has_child(0));
        assert!(!tree.has_child(5));
        assert!(tree.child(0).is_none());
        assert!(tree.child(200).is_none());
        assert!(tree.child_in(Quadrant::First).is_some());
    }

    #[test]
    fn test_all_points_preorder() {
        let mut tree = centred_tree();
        tree.insert(Dot::new(1, 30.0, 70.0)); // Q3
        tree.insert(Dot::new(2, 70.0, 30.0)); // Q1
        tree.insert(Dot::new(3, 20.0, 90.0)); // Q3 -> Q3
        tree.insert(Dot::new(4, 30.0, 30.0)); // Q2
        tree.insert(Dot::new(5, 90.0, 10.0)); // Q1 -> Q1

        assert_eq!(ids(&tree.all_points()), vec![0, 2, 5, 4, 1, 3]);
        let again: Vec<u32> = tree.iter().map(|d| d.id).collect();
        assert_eq!(again, vec![0, 2, 5, 4, 1, 3]);
    }

    #[test]
    fn test_boundary_point_lands_in_two_quadrants() {
        let mut tree = centred_tree();
        // Straight above the anchor: quadrants 1 and 2 both accept it.
        tree.insert(Dot::new(1, 50.0, 20.0));
        assert_eq!(tree.child(1).unwrap().point().id, 1);
        assert_eq!(tree.child(2).unwrap().point().id, 1);
        assert_eq!(tree.size(), 3);
        assert_eq!(ids(&tree.all_points()), vec![0, 1, 1]);
    }

    #[test]
    fn test_point_equal_to_anchor_lands_everywhere() {
        let mut tree = centred_tree();
        tree.insert(Dot::new(1, 70.0, 30.0));
        tree.insert(Dot::new(9, 50.0, 50.0));

        // Existing Q1 child gets it pushed down; the other three get new leaves.
        assert_eq!(tree.child(1).unwrap().point().id, 1);
        assert_eq!(tree.child(1).unwrap().size(), 2);
        for q in 2..=4 {
            assert_eq!(tree.child(q).unwrap().point().id, 9);
        }
        assert_eq!(tree.size(), 6);
    }

    #[test]
    fn test_out_of_region_point() {
        let mut tree = centred_tree();
        tree.insert(Dot::new(1, 150.0, -20.0));
        let q1 = tree.child(1).unwrap();
        assert_eq!(q1.point().id, 1);
        // Region is still the nominal quadrant, not stretched to the point.
        assert_eq!(*q1.bounds(), Bounds::new(50.0, 0.0, 100.0, 50.0));
        assert_eq!(tree.size(), 2);
        assert_eq!(tree.all_points().len(), 2);

        // Stored, but unreachable by a query at its own position.
        assert!(tree.find_in_circle(150.0, -20.0, 0.0).is_empty());
        assert!(tree.find_in_circle(150.0, -20.0, 10.0).is_empty());
    }

    #[test]
    fn test_find_in_circle() {
        let mut tree = centred_tree();
        tree.insert(Dot::new(1, 70.0, 30.0));
        tree.insert(Dot::new(2, 30.0, 30.0));
        tree.insert(Dot::new(3, 30.0, 70.0));
        tree.insert(Dot::new(4, 70.0, 70.0));
        tree.insert(Dot::new(5, 80.0, 20.0));

        assert_eq!(ids(&tree.find_in_circle(75.0, 25.0, 10.0)), vec![1, 5]);
        assert_eq!(ids(&tree.find_in_circle(30.0, 70.0, 1.0)), vec![3]);
        assert!(tree.find_in_circle(5.0, 95.0, 3.0).is_empty());
        assert_eq!(ids(&tree.find_in(&Circle::new(50.0, 50.0, 0.0))), vec![0]);
    }

    #[test]
    fn test_zero_radius_hits_exact_point() {
        let mut tree = centred_tree();
        tree.insert(Dot::new(1, 12.5, 87.25));
        assert_eq!(ids(&tree.find_in_circle(12.5, 87.25, 0.0)), vec![1]);
    }

    #[test]
    fn test_covering_circle_returns_everything() {
        let mut tree = centred_tree();
        for (i, (x, y)) in [(10.0, 10.0), (90.0, 10.0), (10.0, 90.0), (90.0, 90.0), (60.0, 40.0)]
            .into_iter()
            .enumerate()
        {
            tree.insert(Dot::new(i as u32 + 1, x, y));
        }
        let found = tree.find_in_circle(50.0, 50.0, 75.0);
        assert_eq!(ids(&found), ids(&tree.all_points()));
        assert_eq!(found.len(), tree.size());
    }

    #[test]
    fn test_pruning_skips_far_subtrees() {
        let mut tree = centred_tree();
        tree.insert(Dot::new(1, 70.0, 30.0));
        tree.insert(Dot::new(2, 30.0, 30.0));
        tree.insert(Dot::new(3, 30.0, 70.0));
        tree.insert(Dot::new(4, 70.0, 70.0));
        tree.insert(Dot::new(5, 20.0, 80.0));

        let (found, stats) = tree.find_in_circle_with_stats(90.0, 10.0, 5.0);
        assert!(found.is_empty());
        // Root and Q1 are examined; Q2, Q3, Q4 are pruned and Q3's child is never reached.
        assert_eq!(stats.nodes_visited, 2);
        assert_eq!(stats.nodes_pruned, 3);
        assert_eq!(stats.nodes_reached(), 5);
    }

    #[test]
    fn test_circle_outside_root_prunes_everything() {
        let mut tree = centred_tree();
        tree.insert(Dot::new(1, 70.0, 30.0));
        let (found, stats) = tree.find_in_circle_with_stats(500.0, 500.0, 10.0);
        assert!(found.is_empty());
        assert_eq!(stats, QueryStats { nodes_visited: 0, nodes_pruned: 1 });
    }

    #[test]
    fn test_try_new() {
        let bounds = Bounds::new(0.0, 0.0, 10.0, 10.0);
        assert!(PointQuadtree::try_new((5.0, 5.0), bounds).is_ok());
        assert!(PointQuadtree::try_new((10.0, 0.0), bounds).is_ok());
        assert_eq!(
            PointQuadtree::try_new((11.0, 5.0), bounds).unwrap_err(),
            QuadtreeError::PointOutsideRegion { x: 11.0, y: 5.0 }
        );
        assert!(matches!(
            PointQuadtree::try_new((5.0, 5.0), Bounds::new(10.0, 0.0, 0.0, 10.0)),
            Err(QuadtreeError::Geometry(_))
        ));
    }

    #[test]
    fn test_from_points() {
        let bounds = Bounds::new(0.0, 0.0, 100.0, 100.0);
        assert!(PointQuadtree::<(f64, f64)>::from_points(bounds, Vec::new()).is_none());

        let tree = PointQuadtree::from_points(bounds, vec![(50.0, 50.0), (10.0, 10.0), (90.0, 90.0)]).unwrap();
        assert_eq!(*tree.point(), (50.0, 50.0));
        assert_eq!(tree.size(), 3);
        assert!(tree.has_child(2));
        assert!(tree.has_child(4));
    }

    #[test]
    fn test_skewed_tree_does_not_overflow() {
        const N: usize = 10_000;
        let mut tree = PointQuadtree::new((0.0, 0.0), 0.0, 0.0, N as f64, N as f64);
        for i in 1..N {
            tree.insert((i as f64, i as f64));
        }
        assert_eq!(tree.size(), N);
        assert_eq!(tree.depth(), N);
        assert_eq!(tree.all_points().len(), N);
        assert_eq!(tree.find_in_circle(N as f64 - 1.0, N as f64 - 1.0, 0.5).len(), 1);
        drop(tree);
    }

    // Sorted insertion walks the whole chain each time, so this is quadratic.
    #[test]
    #[ignore = "slow: 100k sorted insertions"]
    fn test_skewed_tree_100k() {
        const N: usize = 100_000;
        let mut tree = PointQuadtree::new((0.0, 0.0), 0.0, 0.0, N as f64, N as f64);
        for i in 1..N {
            tree.insert((i as f64, i as f64));
        }
        assert_eq!(tree.size(), N);
        assert_eq!(tree.depth(), N);
        assert_eq!(tree.iter().count(), N);
        assert_eq!(tree.find_in_circle(0.0, 0.0, 1.5).len(), 2);
    }

    #[test]
    fn test_debug_summary() {
        let mut tree = centred_tree();
        tree.insert(Dot::new(1, 70.0, 30.0));
        let text = format!("{tree:?}");
        assert!(text.contains("PointQuadtree"));
        assert!(text.contains("size: 2"));
    }
}
