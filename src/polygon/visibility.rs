//! Mutual visibility of two points inside a polygon.
//!
//! Two points see each other iff the closed segment between them stays in
//! the closed region bounded by the polygon. Contacts with the boundary do
//! not block sight: the first instant two moving points clear a reflex
//! corner is exactly a vertex-grazing configuration, and it must count as
//! visible.
//!
//! # Example
//!
//! ```
//! use visum::polygon::{is_visible_in, Polygon};
//! use visum::Point2;
//!
//! let room = Polygon::new(vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(10.0, 0.0),
//!     Point2::new(10.0, 10.0),
//!     Point2::new(0.0, 10.0),
//! ]);
//!
//! assert!(is_visible_in(&room, Point2::new(1.0, 1.0), Point2::new(9.0, 9.0)));
//! assert!(!is_visible_in(&room, Point2::new(1.0, 1.0), Point2::new(11.0, 1.0)));
//! ```

use super::core::Polygon;
use crate::primitives::{Point2, Segment2};
use crate::tolerance::{self, on_segment, orient2d, segments_intersect, Orientation};
use num_traits::Float;

/// Tests whether the closed segment `qr` lies inside the closed region of
/// the polygon.
///
/// The points need not be polygon vertices or even inside the polygon; two
/// exterior points are never mutually visible. The test is symmetric in
/// `q` and `r` but not transitive.
///
/// Boundary contact policy:
/// - an endpoint of `qr` coinciding with an edge endpoint is not a blocker,
/// - a polygon vertex lying on the open segment `qr` (a graze) is not a
///   blocker,
/// - only a strict proper crossing of an edge blocks sight.
pub fn is_visible_in<F: Float>(polygon: &Polygon<F>, q: Point2<F>, r: Point2<F>) -> bool {
    let e = tolerance::eps::<F>();

    if q.approx_eq(r, e) {
        return polygon.contains(q);
    }

    // A segment that crosses no edge can still run through the exterior of
    // a non-convex polygon; the midpoint picks that case up.
    if !polygon.contains(q.midpoint(r)) {
        return false;
    }

    let sight = Segment2::new(q, r);

    for i in 0..polygon.len() {
        let edge = polygon.edge(i);

        if !segments_intersect(sight, edge) {
            continue;
        }

        // Endpoint incidence: q or r sits on a polygon vertex.
        if q.approx_eq(edge.start, e)
            || q.approx_eq(edge.end, e)
            || r.approx_eq(edge.start, e)
            || r.approx_eq(edge.end, e)
        {
            continue;
        }

        // Vertex graze: an edge endpoint lies on the open segment qr.
        if grazes(edge.start, sight) || grazes(edge.end, sight) {
            continue;
        }

        let o1 = orient2d(q, r, edge.start);
        let o2 = orient2d(q, r, edge.end);
        let o3 = orient2d(edge.start, edge.end, q);
        let o4 = orient2d(edge.start, edge.end, r);

        let degenerate = [o1, o2, o3, o4]
            .iter()
            .any(|&o| o == Orientation::Collinear);

        if !degenerate && o1 != o2 && o3 != o4 {
            return false;
        }
    }

    true
}

/// Tests whether `p` lies on the segment (collinear and within its box).
fn grazes<F: Float>(p: Point2<F>, s: Segment2<F>) -> bool {
    orient2d(s.start, s.end, p) == Orientation::Collinear && on_segment(p, s)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(size: f64) -> Polygon<f64> {
        Polygon::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(size, 0.0),
            Point2::new(size, size),
            Point2::new(0.0, size),
        ])
    }

    /// Room with a wall hanging from the top, x in [4, 6], y in [4, 10].
    fn hanging_wall() -> Polygon<f64> {
        Polygon::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(10.0, 0.0),
            Point2::new(10.0, 10.0),
            Point2::new(6.0, 10.0),
            Point2::new(6.0, 4.0),
            Point2::new(4.0, 4.0),
            Point2::new(4.0, 10.0),
            Point2::new(0.0, 10.0),
        ])
    }

    #[test]
    fn test_clear_line_in_square() {
        let room = square(10.0);
        assert!(is_visible_in(&room, Point2::new(2.0, 2.0), Point2::new(8.0, 8.0)));
    }

    #[test]
    fn test_exterior_target_not_visible() {
        let room = square(10.0);
        assert!(!is_visible_in(&room, Point2::new(5.0, 5.0), Point2::new(20.0, 5.0)));
    }

    #[test]
    fn test_blocked_by_hanging_wall() {
        let poly = hanging_wall();
        assert!(!is_visible_in(&poly, Point2::new(2.0, 8.0), Point2::new(8.0, 8.0)));
    }

    #[test]
    fn test_visible_below_hanging_wall() {
        let poly = hanging_wall();
        assert!(is_visible_in(&poly, Point2::new(2.0, 2.0), Point2::new(8.0, 2.0)));
    }

    #[test]
    fn test_grazing_the_wall_tip_is_visible() {
        let poly = hanging_wall();
        // The sight line runs along y = 4, exactly under both wall corners.
        assert!(is_visible_in(&poly, Point2::new(2.0, 4.0), Point2::new(8.0, 4.0)));
    }

    #[test]
    fn test_just_above_the_wall_tip_is_blocked() {
        let poly = hanging_wall();
        assert!(!is_visible_in(&poly, Point2::new(2.0, 4.1), Point2::new(8.0, 4.1)));
    }

    #[test]
    fn test_exterior_shortcut_rejected_by_midpoint() {
        let poly = hanging_wall();
        // Along the top boundary, through the wall notch: the segment only
        // touches edge endpoints (no proper crossing), yet its middle runs
        // through the cut-out. Only the midpoint test rejects it.
        assert!(!is_visible_in(&poly, Point2::new(2.0, 10.0), Point2::new(8.0, 10.0)));
    }

    #[test]
    fn test_symmetry() {
        let poly = hanging_wall();
        let pairs = [
            (Point2::new(2.0, 8.0), Point2::new(8.0, 8.0)),
            (Point2::new(2.0, 4.0), Point2::new(8.0, 4.0)),
            (Point2::new(1.0, 1.0), Point2::new(9.0, 9.0)),
            (Point2::new(2.0, 2.0), Point2::new(8.0, 2.0)),
        ];
        for (a, b) in pairs {
            assert_eq!(is_visible_in(&poly, a, b), is_visible_in(&poly, b, a));
        }
    }

    #[test]
    fn test_point_sees_itself() {
        let poly = hanging_wall();
        let p = Point2::new(1.0, 1.0);
        assert!(is_visible_in(&poly, p, p));
        // A coincident pair outside the polygon does not.
        let out = Point2::new(5.0, 7.0);
        assert!(!is_visible_in(&poly, out, out));
    }

    #[test]
    fn test_vertex_to_vertex_along_boundary() {
        let room = square(10.0);
        assert!(is_visible_in(
            &room,
            Point2::new(0.0, 0.0),
            Point2::new(10.0, 0.0)
        ));
    }

    #[test]
    fn test_segment_on_boundary_edge() {
        let room = square(10.0);
        // Entirely within the bottom edge.
        assert!(is_visible_in(
            &room,
            Point2::new(2.0, 0.0),
            Point2::new(8.0, 0.0)
        ));
    }
}
