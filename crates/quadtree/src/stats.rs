//! Counters describing how much of the tree a query touched.

use std::ops::AddAssign;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QueryStats {
    /// Nodes whose region reached the query circle; their anchor was tested.
    pub nodes_visited: u64,
    /// Nodes skipped together with their whole subtree.
    pub nodes_pruned: u64,
}

impl QueryStats {
    /// Nodes the walk looked at, pruned or not.
    #[inline]
    pub fn nodes_reached(&self) -> u64 {
        self.nodes_visited + self.nodes_pruned
    }
}

impl AddAssign for QueryStats {
    fn add_assign(&mut self, rhs: Self) {
        self.nodes_visited += rhs.nodes_visited;
        self.nodes_pruned += rhs.nodes_pruned;
    }
}
