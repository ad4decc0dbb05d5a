//! Core polygon type and basic operations.

use crate::primitives::{Point2, Segment2};
use crate::tolerance::{self, cross_z, on_segment, orient2d, Orientation};
use num_traits::Float;

/// A simple polygon represented as a sequence of vertices.
///
/// Vertices are stored in counter-clockwise order; the polygon is implicitly
/// closed (the last vertex connects to the first). Vertex and edge indices
/// are taken modulo the vertex count, so `vertex(n)` is `vertex(0)`.
///
/// The query algorithms assume the polygon is simple and CCW; use
/// [`build_polygon`](super::build_polygon) to validate and normalize raw
/// input, or [`Polygon::new`] when the caller guarantees both.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon<F> {
    /// The vertices of the polygon in CCW order.
    pub vertices: Vec<Point2<F>>,
}

impl<F: Float> Polygon<F> {
    /// Creates a new polygon from vertices, without validation.
    #[inline]
    pub fn new(vertices: Vec<Point2<F>>) -> Self {
        Self { vertices }
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns true if the polygon has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns vertex `i`, with the index taken modulo the vertex count.
    #[inline]
    pub fn vertex(&self, i: usize) -> Point2<F> {
        self.vertices[i % self.vertices.len()]
    }

    /// Returns edge `i`, joining `vertex(i)` and `vertex(i + 1)`.
    #[inline]
    pub fn edge(&self, i: usize) -> Segment2<F> {
        Segment2::new(self.vertex(i), self.vertex(i + 1))
    }

    /// Tests whether vertex `i` is reflex (interior angle greater than pi).
    ///
    /// Assumes CCW winding: a right turn at the vertex means it juts into
    /// the interior.
    pub fn is_reflex(&self, i: usize) -> bool {
        let n = self.vertices.len();
        let prev = self.vertex((i + n - 1) % n);
        let curr = self.vertex(i);
        let next = self.vertex(i + 1);

        cross_z(prev, curr, next) < -tolerance::eps::<F>()
    }

    /// Returns the signed area via the shoelace formula.
    ///
    /// Positive for CCW winding, negative for CW winding.
    pub fn signed_area(&self) -> F {
        polygon_signed_area(&self.vertices)
    }

    /// Tests whether a point is inside the closed region of the polygon.
    ///
    /// Boundary points count as inside.
    pub fn contains(&self, point: Point2<F>) -> bool {
        polygon_contains(&self.vertices, point)
    }

    /// Reverses the vertex list when the winding is clockwise.
    pub fn ensure_ccw(&mut self) {
        if self.signed_area() < F::zero() {
            self.vertices.reverse();
        }
    }
}

/// Computes the signed area of a vertex chain using the shoelace formula.
pub fn polygon_signed_area<F: Float>(vertices: &[Point2<F>]) -> F {
    if vertices.len() < 3 {
        return F::zero();
    }

    let mut area = F::zero();
    let n = vertices.len();

    for i in 0..n {
        let j = (i + 1) % n;
        area = area + vertices[i].x * vertices[j].y;
        area = area - vertices[j].x * vertices[i].y;
    }

    area / F::from(2.0).unwrap()
}

/// Tests if a point is inside a polygon using ray casting.
///
/// Uses the half-open `(v1.y > p.y) != (v2.y > p.y)` crossing convention;
/// points on the boundary are reported as inside.
pub fn polygon_contains<F: Float>(vertices: &[Point2<F>], point: Point2<F>) -> bool {
    if vertices.len() < 3 {
        return false;
    }

    let mut inside = false;
    let n = vertices.len();

    for i in 0..n {
        let v1 = vertices[i];
        let v2 = vertices[(i + 1) % n];

        if (v1.y > point.y) != (v2.y > point.y) {
            let x_inters = (v2.x - v1.x) * (point.y - v1.y) / (v2.y - v1.y) + v1.x;
            if point.x < x_inters {
                inside = !inside;
            }
        }

        let edge = Segment2::new(v1, v2);
        if orient2d(v1, v2, point) == Orientation::Collinear && on_segment(point, edge) {
            return true;
        }
    }

    inside
}
