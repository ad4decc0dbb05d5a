//! Polygon ingestion: validation and winding normalization.
//!
//! The query algorithms in this crate require a simple, CCW polygon.
//! [`build_polygon`] is the checked entry point for raw vertex data; it
//! rejects degenerate chains and reverses clockwise input.

use super::core::{polygon_signed_area, Polygon};
use crate::error::PolygonError;
use crate::primitives::Point2;
use crate::tolerance::{self, cross_z};
use num_traits::Float;

/// Builds a validated, CCW-normalized polygon from raw vertices.
///
/// Rejects chains with fewer than three vertices, chains that enclose no
/// area, and self-intersecting chains. Clockwise input is reversed so the
/// returned polygon always winds counter-clockwise.
///
/// # Example
///
/// ```
/// use visum::{build_polygon, Point2};
///
/// // Clockwise square; comes back CCW.
/// let poly = build_polygon(vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(0.0, 1.0),
///     Point2::new(1.0, 1.0),
///     Point2::new(1.0, 0.0),
/// ])
/// .unwrap();
/// assert!(poly.signed_area() > 0.0);
/// ```
pub fn build_polygon<F: Float>(vertices: Vec<Point2<F>>) -> Result<Polygon<F>, PolygonError> {
    let count = vertices.len();
    if count < 3 {
        return Err(PolygonError::TooFewVertices { count });
    }

    let mut polygon = Polygon::new(vertices);
    if !is_simple(&polygon) {
        return Err(PolygonError::SelfIntersecting);
    }

    // A simple chain with no area is a collinear sliver.
    if polygon_signed_area(&polygon.vertices).abs() <= tolerance::eps::<F>() {
        return Err(PolygonError::ZeroArea);
    }

    polygon.ensure_ccw();
    Ok(polygon)
}

/// Tests whether a polygon is simple (no two non-adjacent edges cross).
///
/// Adjacent edges sharing a vertex are not counted. Quadratic in the number
/// of vertices; intended for ingestion, not per-query use.
pub fn is_simple<F: Float>(polygon: &Polygon<F>) -> bool {
    let n = polygon.vertices.len();
    if n < 4 {
        return true;
    }

    for i in 0..n {
        let a1 = polygon.vertex(i);
        let a2 = polygon.vertex(i + 1);

        for j in (i + 2)..n {
            // Skip the adjacent pair that wraps around.
            if (j + 1) % n == i {
                continue;
            }

            let b1 = polygon.vertex(j);
            let b2 = polygon.vertex(j + 1);

            if segments_properly_cross(a1, a2, b1, b2) {
                return false;
            }
        }
    }

    true
}

/// Tests whether two segments cross at a point interior to both.
fn segments_properly_cross<F: Float>(
    a1: Point2<F>,
    a2: Point2<F>,
    b1: Point2<F>,
    b2: Point2<F>,
) -> bool {
    let d1 = cross_z(b1, b2, a1);
    let d2 = cross_z(b1, b2, a2);
    let d3 = cross_z(a1, a2, b1);
    let d4 = cross_z(a1, a2, b2);

    d1 * d2 < F::zero() && d3 * d4 < F::zero()
}
