//! Quadrant numbering around an anchor point.
//!
//! ```text
//!        |
//!    2   |   1
//! -------A-------   (y grows downward)
//!    3   |   4
//!        |
//! ```

use crate::error::QuadtreeError;
use geometry::Bounds;

/// One of the four quadrants of a node's region, numbered 1-4.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quadrant {
    /// Upper right (quadrant 1).
    First = 1,
    /// Upper left (quadrant 2).
    Second = 2,
    /// Lower left (quadrant 3).
    Third = 3,
    /// Lower right (quadrant 4).
    Fourth = 4,
}

impl Quadrant {
    /// All quadrants in traversal order.
    pub const ALL: [Quadrant; 4] = [Quadrant::First, Quadrant::Second, Quadrant::Third, Quadrant::Fourth];

    /// The 1-based quadrant number.
    #[inline]
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Position in a node's child array.
    #[inline]
    pub(crate) fn slot(self) -> usize {
        self as usize - 1
    }

    /// Check if `(px, py)` belongs to this quadrant of an anchor at `(ax, ay)`.
    ///
    /// The tests are inclusive on both axes, so a point sharing a coordinate
    /// with the anchor belongs to two quadrants (all four if it equals it).
    #[inline]
    pub fn contains(self, ax: f64, ay: f64, px: f64, py: f64) -> bool {
        match self {
            Quadrant::First => px >= ax && py <= ay,
            Quadrant::Second => px <= ax && py <= ay,
            Quadrant::Third => px <= ax && py >= ay,
            Quadrant::Fourth => px >= ax && py >= ay,
        }
    }

    /// The sub-region of `region` this quadrant covers when split at `(ax, ay)`.
    #[inline]
    pub fn split(self, region: &Bounds, ax: f64, ay: f64) -> Bounds {
        match self {
            Quadrant::First => Bounds::new(ax, region.min_y, region.max_x, ay),
            Quadrant::Second => Bounds::new(region.min_x, region.min_y, ax, ay),
            Quadrant::Third => Bounds::new(region.min_x, ay, ax, region.max_y),
            Quadrant::Fourth => Bounds::new(ax, ay, region.max_x, region.max_y),
        }
    }
}

impl TryFrom<u8> for Quadrant {
    type Error = QuadtreeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Quadrant::First),
            2 => Ok(Quadrant::Second),
            3 => Ok(Quadrant::Third),
            4 => Ok(Quadrant::Fourth),
            other => Err(QuadtreeError::InvalidQuadrant(other)),
        }
    }
}

impl std::fmt::Display for Quadrant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Q{}", self.index())
    }
}
