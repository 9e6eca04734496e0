//! Pure geometry predicates.
//!
//! Both tests are inclusive: touching counts as inside.

/// Check if `(px, py)` lies within or on the circle centred at `(cx, cy)`.
#[inline]
pub fn point_in_circle(px: f64, py: f64, cx: f64, cy: f64, cr: f64) -> bool {
    let dx = px - cx;
    let dy = py - cy;
    dx * dx + dy * dy <= cr * cr
}

/// Check if the circle overlaps or touches the rectangle `(x1, y1)`-`(x2, y2)`.
///
/// Clamps the centre onto the rectangle and tests that closest point.
#[inline]
pub fn circle_intersects_rectangle(
    cx: f64,
    cy: f64,
    cr: f64,
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
) -> bool {
    let closest_x = cx.max(x1).min(x2);
    let closest_y = cy.max(y1).min(y2);
    point_in_circle(closest_x, closest_y, cx, cy, cr)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_in_circle() {
        assert!(point_in_circle(3.0, 4.0, 0.0, 0.0, 5.0)); // on the rim
        assert!(point_in_circle(1.0, 1.0, 0.0, 0.0, 5.0));
        assert!(!point_in_circle(3.0, 4.1, 0.0, 0.0, 5.0));
    }

    #[test]
    fn test_zero_radius() {
        assert!(point_in_circle(2.0, 2.0, 2.0, 2.0, 0.0));
        assert!(!point_in_circle(2.0, 2.0001, 2.0, 2.0, 0.0));
    }

    #[test]
    fn test_circle_rectangle() {
        // centre inside
        assert!(circle_intersects_rectangle(5.0, 5.0, 1.0, 0.0, 0.0, 10.0, 10.0));
        // touching the left edge
        assert!(circle_intersects_rectangle(-2.0, 5.0, 2.0, 0.0, 0.0, 10.0, 10.0));
        // near a corner but outside its radius
        assert!(!circle_intersects_rectangle(-3.0, -3.0, 4.0, 0.0, 0.0, 10.0, 10.0));
        // same corner, large enough
        assert!(circle_intersects_rectangle(-3.0, -3.0, 4.25, 0.0, 0.0, 10.0, 10.0));
        // far away
        assert!(!circle_intersects_rectangle(50.0, 50.0, 5.0, 0.0, 0.0, 10.0, 10.0));
    }

    #[test]
    fn test_degenerate_rectangle() {
        // A zero-area rectangle behaves like a point.
        assert!(circle_intersects_rectangle(0.0, 0.0, 1.0, 1.0, 0.0, 1.0, 0.0));
        assert!(!circle_intersects_rectangle(0.0, 0.0, 0.5, 1.0, 0.0, 1.0, 0.0));
    }
}
