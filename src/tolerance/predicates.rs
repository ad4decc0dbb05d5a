//! Orientation and segment-intersection predicates.

use super::eps;
use crate::primitives::{Point2, Segment2};
use num_traits::Float;

/// Result of an orientation test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Points make a left turn (positive signed area).
    CounterClockwise,
    /// Points make a right turn (negative signed area).
    Clockwise,
    /// Points are collinear within tolerance.
    Collinear,
}

/// Computes the z-component of the cross product `(b - a) × (c - a)`.
///
/// Equals twice the signed area of triangle abc. Positive iff `a → b → c`
/// is a left turn.
#[inline]
pub fn cross_z<F: Float>(a: Point2<F>, b: Point2<F>, c: Point2<F>) -> F {
    (b - a).cross(c - a)
}

/// Computes the orientation of three points.
///
/// Returns [`Orientation::Collinear`] when the cross product magnitude falls
/// below the global tolerance.
#[inline]
pub fn orient2d<F: Float>(a: Point2<F>, b: Point2<F>, c: Point2<F>) -> Orientation {
    let cross = cross_z(a, b, c);
    let e = eps::<F>();

    if cross > e {
        Orientation::CounterClockwise
    } else if cross < -e {
        Orientation::Clockwise
    } else {
        Orientation::Collinear
    }
}

/// Tests whether `p` lies within the axis-aligned bounding box of `s`.
///
/// Callers establish collinearity with the segment's supporting line first
/// (via [`orient2d`]); only then does this test mean "p lies on the segment".
#[inline]
pub fn on_segment<F: Float>(p: Point2<F>, s: Segment2<F>) -> bool {
    let e = eps::<F>();
    p.x <= s.start.x.max(s.end.x) + e
        && p.x >= s.start.x.min(s.end.x) - e
        && p.y <= s.start.y.max(s.end.y) + e
        && p.y >= s.start.y.min(s.end.y) - e
}

/// Tests whether two segments share at least one point.
///
/// The classic four-orientation test: a proper crossing is reported when the
/// endpoints of each segment straddle the other's supporting line, and the
/// collinear cases fall back to [`on_segment`] box checks. T-touches,
/// endpoint contacts, and collinear overlaps all count as intersecting.
pub fn segments_intersect<F: Float>(s1: Segment2<F>, s2: Segment2<F>) -> bool {
    let o1 = orient2d(s1.start, s1.end, s2.start);
    let o2 = orient2d(s1.start, s1.end, s2.end);
    let o3 = orient2d(s2.start, s2.end, s1.start);
    let o4 = orient2d(s2.start, s2.end, s1.end);

    if o1 != o2 && o3 != o4 {
        return true;
    }

    if o1 == Orientation::Collinear && on_segment(s2.start, s1) {
        return true;
    }
    if o2 == Orientation::Collinear && on_segment(s2.end, s1) {
        return true;
    }
    if o3 == Orientation::Collinear && on_segment(s1.start, s2) {
        return true;
    }
    if o4 == Orientation::Collinear && on_segment(s1.end, s2) {
        return true;
    }

    false
}
