//! Taut-string paths between points inside a polygon.
//!
//! The taut string between two mutually invisible points bends only at
//! reflex vertices; those bend points are the critical pivots that the
//! velocity-space decomposition in [`crate::diagram`] partitions over. The
//! construction here is a monotone-chain reduction over the reflex vertices
//! in polygon order: it recovers the ordered pivot set separating the two
//! endpoints, which is what the decomposition needs, without the
//! triangulation a metrically exact geodesic would require.
//!
//! # Example
//!
//! ```
//! use visum::path::taut_string_path;
//! use visum::polygon::Polygon;
//! use visum::Point2;
//!
//! let square = Polygon::new(vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(10.0, 0.0),
//!     Point2::new(10.0, 10.0),
//!     Point2::new(0.0, 10.0),
//! ]);
//!
//! // Nothing blocks the straight shot.
//! let path = taut_string_path(&square, Point2::new(1.0, 1.0), Point2::new(9.0, 9.0));
//! assert_eq!(path.len(), 2);
//! ```

use crate::polygon::{is_visible_in, Polygon};
use crate::primitives::Point2;
use crate::tolerance::{self, cross_z};
use num_traits::Float;

/// Computes the taut-string path from `a` to `b` inside the polygon.
///
/// The returned sequence starts with `a` and ends with `b`; every interior
/// point is a reflex vertex of the polygon, listed in the order the string
/// meets them. When the straight segment `ab` already lies inside the
/// polygon the path is exactly `[a, b]`.
///
/// Each reflex vertex is pushed and popped at most once, so the reduction
/// runs in linear time after the initial visibility check.
pub fn taut_string_path<F: Float>(
    polygon: &Polygon<F>,
    a: Point2<F>,
    b: Point2<F>,
) -> Vec<Point2<F>> {
    let e = tolerance::eps::<F>();

    if a.approx_eq(b, e) {
        return vec![a];
    }

    if is_visible_in(polygon, a, b) {
        return vec![a, b];
    }

    // Monotone chain over {a, reflex vertices in polygon order, b}: a
    // candidate that turns left relative to the chain tail slackens the
    // string, so the tail pivot pops.
    let mut chain: Vec<Point2<F>> = vec![a];

    let feed = |chain: &mut Vec<Point2<F>>, v: Point2<F>| {
        while chain.len() >= 2 && cross_z(chain[chain.len() - 2], chain[chain.len() - 1], v) > e {
            chain.pop();
        }
        chain.push(v);
    };

    for i in 0..polygon.len() {
        if !polygon.is_reflex(i) {
            continue;
        }
        let v = polygon.vertex(i);
        if v.approx_eq(a, e) || v.approx_eq(b, e) {
            continue;
        }
        feed(&mut chain, v);
    }
    feed(&mut chain, b);

    debug_assert!(chain.last().is_some_and(|p| p.approx_eq(b, e)));

    chain.dedup_by(|x, y| x.approx_eq(*y, e));
    chain
}
