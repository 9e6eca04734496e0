//! Random dot survey.
//!
//! Scatters dots over the world, builds a tree from them and fires random
//! circle queries at it, checking every answer against a linear scan.

use crate::config::Config;
use geometry::{Bounds, Circle, GeometryError, Point2D};
use glam::DVec2;
use quadtree::{PointQuadtree, QueryStats};
use rand::Rng;
use tracing::{debug, warn};

/// A surveyed dot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dot {
    pub id: usize,
    pub position: DVec2,
}

impl Point2D for Dot {
    #[inline]
    fn x(&self) -> f64 {
        self.position.x
    }

    #[inline]
    fn y(&self) -> f64 {
        self.position.y
    }
}

/// Result of one circle query.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryReport {
    pub circle: Circle,
    /// Distinct dots found.
    pub hits: usize,
    pub stats: QueryStats,
    /// Whether the tree answer matched the linear scan.
    pub agrees: bool,
}

/// Aggregate over all queries of a survey.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SurveyReport {
    pub dots: usize,
    /// Nodes in the tree; exceeds `dots` when dots were aliased onto quadrant boundaries.
    pub tree_size: usize,
    pub tree_depth: usize,
    pub queries: Vec<QueryReport>,
    pub total_hits: usize,
    pub total_stats: QueryStats,
    pub mismatches: usize,
}

/// Scatter `count` dots uniformly inside `border`.
pub fn scatter<R: Rng + ?Sized>(rng: &mut R, border: &Bounds, count: usize) -> Vec<Dot> {
    (0..count)
        .map(|id| Dot {
            id,
            position: DVec2::new(
                rng.random_range(border.min_x..=border.max_x),
                rng.random_range(border.min_y..=border.max_y),
            ),
        })
        .collect()
}

/// Run the survey described by `config.survey` over `config.world`.
///
/// Fails when the world size or query radius do not describe valid shapes.
pub fn run_survey<R: Rng + ?Sized>(
    config: &Config,
    rng: &mut R,
) -> Result<SurveyReport, GeometryError> {
    let border = Bounds::try_new(0.0, 0.0, config.world.width as f64, config.world.height as f64)?;
    let dots = scatter(rng, &border, config.survey.dots);
    let circles = (0..config.survey.queries)
        .map(|_| {
            Circle::try_new(
                rng.random_range(border.min_x..=border.max_x),
                rng.random_range(border.min_y..=border.max_y),
                config.survey.radius,
            )
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(survey(&border, &dots, &circles))
}

/// Query a tree of `dots` with each circle and compare against a linear scan.
pub fn survey(border: &Bounds, dots: &[Dot], circles: &[Circle]) -> SurveyReport {
    let Some(tree) = PointQuadtree::from_points(*border, dots.iter().copied()) else {
        warn!("Survey has no dots, skipping queries");
        return SurveyReport::default();
    };

    let mut report = SurveyReport {
        dots: dots.len(),
        tree_size: tree.size(),
        tree_depth: tree.depth(),
        ..SurveyReport::default()
    };

    for circle in circles {
        let (found, stats) = tree.find_in_circle_with_stats(circle.cx, circle.cy, circle.radius);
        let mut found: Vec<usize> = found.iter().map(|d| d.id).collect();
        found.sort_unstable();
        found.dedup();

        let expected: Vec<usize> = dots.iter().filter(|d| circle.contains(*d)).map(|d| d.id).collect();
        let agrees = found == expected;
        if !agrees {
            warn!(
                ?circle,
                found = found.len(),
                expected = expected.len(),
                "Tree query disagrees with scan"
            );
            report.mismatches += 1;
        }
        debug!(
            cx = circle.cx,
            cy = circle.cy,
            hits = found.len(),
            visited = stats.nodes_visited,
            pruned = stats.nodes_pruned,
            "query"
        );

        report.total_hits += found.len();
        report.total_stats += stats;
        report.queries.push(QueryReport {
            circle: *circle,
            hits: found.len(),
            stats,
            agrees,
        });
    }

    report
}
