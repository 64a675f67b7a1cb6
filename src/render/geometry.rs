//! Edge geometry: rectangle boundary intersection and arrowhead triangles.
//!
//! Arrows must terminate on the target node's box, not at its center. The
//! intersection is a two-step rectangle/ray test, not a generic polygon
//! clip: pick the side family (vertical vs horizontal) from the dominant
//! axis of the edge direction, and fall back to the adjacent side when the
//! candidate point leaves the rectangle. The branch ordering and comparison
//! signs decide which side an arrow lands on; keep them as they are.

use crate::model::Point;

// ─── Rect ─────────────────────────────────────────────────────────────────────

/// An axis-aligned rectangle given by its four sides.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Rect {
    /// Build the box of a node from its center and dimensions.
    pub fn around(center: Point, width: f64, height: f64) -> Self {
        Self {
            left: center.x - width / 2.0,
            right: center.x + width / 2.0,
            top: center.y - height / 2.0,
            bottom: center.y + height / 2.0,
        }
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }
}

// ─── Boundary intersection ───────────────────────────────────────────────────

/// Where the straight line from `start` to `end` crosses the boundary of
/// `target`, the box centered on `end`.
///
/// A perfectly vertical edge has no defined slope; it is taken to enter
/// through the top or bottom side directly, from the sign of `dy` alone.
pub fn boundary_intersection(start: Point, end: Point, target: Rect) -> Point {
    let dx = end.x - start.x;
    let dy = end.y - start.y;

    if dx == 0.0 {
        let y = if dy > 0.0 { target.top } else { target.bottom };
        return Point::new(start.x, y);
    }

    let slope = dy / dx;
    let mut ix;
    let mut iy;

    if dx.abs() > dy.abs() {
        // Enters through the left or right side first.
        ix = if dx > 0.0 { target.left } else { target.right };
        iy = start.y + slope * (ix - start.x);
        if iy < target.top || iy > target.bottom {
            iy = if dy > 0.0 { target.bottom } else { target.top };
            ix = start.x + (iy - start.y) / slope;
        }
    } else {
        // Enters through the top or bottom side first.
        iy = if dy > 0.0 { target.top } else { target.bottom };
        ix = start.x + (iy - start.y) / slope;
        if ix < target.left || ix > target.right {
            ix = if dx > 0.0 { target.left } else { target.right };
            iy = start.y + slope * (ix - start.x);
        }
    }

    Point::new(ix, iy)
}

// ─── Arrowhead ───────────────────────────────────────────────────────────────

/// The three vertices of a filled arrowhead: the tip, then the two back
/// vertices offset by `length` at `±half_angle` from the edge direction.
pub fn arrowhead(tip: Point, angle: f64, length: f64, half_angle: f64) -> [Point; 3] {
    [
        tip,
        Point::new(
            tip.x - length * (angle - half_angle).cos(),
            tip.y - length * (angle - half_angle).sin(),
        ),
        Point::new(
            tip.x - length * (angle + half_angle).cos(),
            tip.y - length * (angle + half_angle).sin(),
        ),
    ]
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_6;

    fn target_at(x: f64, y: f64) -> Rect {
        Rect::around(Point::new(x, y), 100.0, 50.0)
    }

    #[test]
    fn test_rect_around() {
        let r = target_at(200.0, 100.0);
        assert_eq!(r.left, 150.0);
        assert_eq!(r.right, 250.0);
        assert_eq!(r.top, 75.0);
        assert_eq!(r.bottom, 125.0);
        assert_eq!(r.width(), 100.0);
        assert_eq!(r.height(), 50.0);
    }

    #[test]
    fn test_horizontal_edge_hits_left_side() {
        // dy = 0, dx > 0, centers 200 apart: boundary point is the left edge
        // of the target box at the target's center height.
        let start = Point::new(0.0, 100.0);
        let end = Point::new(200.0, 100.0);
        let p = boundary_intersection(start, end, target_at(200.0, 100.0));
        assert_eq!(p.x, 150.0);
        assert_eq!(p.y, 100.0);
    }

    #[test]
    fn test_horizontal_edge_leftward_hits_right_side() {
        let start = Point::new(400.0, 100.0);
        let end = Point::new(200.0, 100.0);
        let p = boundary_intersection(start, end, target_at(200.0, 100.0));
        assert_eq!(p.x, 250.0);
        assert_eq!(p.y, 100.0);
    }

    #[test]
    fn test_vertical_edge_downward_hits_top() {
        // dx == 0 takes the guarded branch: top side, x unchanged.
        let start = Point::new(200.0, 0.0);
        let end = Point::new(200.0, 300.0);
        let p = boundary_intersection(start, end, target_at(200.0, 300.0));
        assert_eq!(p.x, 200.0);
        assert_eq!(p.y, 275.0);
    }

    #[test]
    fn test_vertical_edge_upward_hits_bottom() {
        let start = Point::new(200.0, 600.0);
        let end = Point::new(200.0, 300.0);
        let p = boundary_intersection(start, end, target_at(200.0, 300.0));
        assert_eq!(p.x, 200.0);
        assert_eq!(p.y, 325.0);
    }

    #[test]
    fn test_steep_edge_takes_horizontal_side() {
        // |dy| > |dx|: enters through the top, x interpolated by the slope.
        let start = Point::new(190.0, 0.0);
        let end = Point::new(200.0, 300.0);
        let p = boundary_intersection(start, end, target_at(200.0, 300.0));
        assert_eq!(p.y, 275.0);
        assert!(p.x > 190.0 && p.x < 200.0);
    }

    #[test]
    fn test_shallow_diagonal_stays_on_vertical_side() {
        // Mostly horizontal approach: candidate y stays inside [top, bottom].
        let start = Point::new(0.0, 90.0);
        let end = Point::new(200.0, 100.0);
        let p = boundary_intersection(start, end, target_at(200.0, 100.0));
        assert_eq!(p.x, 150.0);
        assert!(p.y > 75.0 && p.y < 125.0);
    }

    #[test]
    fn test_intersection_independent_of_distance() {
        // Same direction, different start distance: same boundary point.
        let end = Point::new(200.0, 100.0);
        let rect = target_at(200.0, 100.0);
        let a = boundary_intersection(Point::new(0.0, 100.0), end, rect);
        let b = boundary_intersection(Point::new(-1000.0, 100.0), end, rect);
        assert_eq!(a, b);
    }

    #[test]
    fn test_arrowhead_points_back_along_edge() {
        // Rightward edge (angle 0): back vertices sit left of the tip,
        // symmetric about its y.
        let tip = Point::new(150.0, 100.0);
        let [t, b1, b2] = arrowhead(tip, 0.0, 20.0, FRAC_PI_6);
        assert_eq!(t, tip);
        assert!(b1.x < tip.x && b2.x < tip.x);
        assert!((b1.x - b2.x).abs() < 1e-9);
        assert!(((b1.y + b2.y) / 2.0 - tip.y).abs() < 1e-9);
        // Back offset along the edge is length·cos(π/6).
        assert!((tip.x - b1.x - 20.0 * FRAC_PI_6.cos()).abs() < 1e-9);
    }
}
