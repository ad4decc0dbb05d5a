//! 2D line segment type.

use super::Point2;
use num_traits::Float;

/// A 2D line segment defined by two endpoints.
///
/// Generic over floating-point types (`f32` or `f64`). The endpoint order
/// carries no meaning for the intersection predicates; swapping `start` and
/// `end` never changes a classification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment2<F> {
    pub start: Point2<F>,
    pub end: Point2<F>,
}

impl<F: Float> Segment2<F> {
    /// Creates a new segment from two points.
    #[inline]
    pub fn new(start: Point2<F>, end: Point2<F>) -> Self {
        Self { start, end }
    }

    /// Creates a segment from coordinate pairs.
    #[inline]
    pub fn from_coords(x1: F, y1: F, x2: F, y2: F) -> Self {
        Self {
            start: Point2::new(x1, y1),
            end: Point2::new(x2, y2),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let s: Segment2<f64> = Segment2::new(Point2::new(0.0, 0.0), Point2::new(3.0, 4.0));
        assert_eq!(s.start.x, 0.0);
        assert_eq!(s.end.x, 3.0);
    }

    #[test]
    fn test_from_coords() {
        let s: Segment2<f64> = Segment2::from_coords(1.0, 2.0, 3.0, 4.0);
        assert_eq!(s.start.x, 1.0);
        assert_eq!(s.start.y, 2.0);
        assert_eq!(s.end.x, 3.0);
        assert_eq!(s.end.y, 4.0);
    }
}
