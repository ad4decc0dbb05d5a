//! Earliest mutual visibility of two moving points.
//!
//! The driver enumerates every candidate transition time (collinearity of
//! the two moving points with a polygon vertex), verifies each against the
//! visibility oracle, and keeps the earliest instant that verifies. All
//! vertices contribute events, not only reflex ones: a sight line can start
//! or stop passing through a convex vertex that lies between the points.
//!
//! # Example
//!
//! ```
//! use visum::motion::Trajectory;
//! use visum::polygon::Polygon;
//! use visum::sight::first_sight;
//! use visum::{Point2, Vec2};
//!
//! let room = Polygon::new(vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(10.0, 0.0),
//!     Point2::new(10.0, 10.0),
//!     Point2::new(6.0, 10.0),
//!     Point2::new(6.0, 4.0),
//!     Point2::new(4.0, 4.0),
//!     Point2::new(4.0, 10.0),
//!     Point2::new(0.0, 10.0),
//! ]);
//!
//! // Two points descending on either side of the hanging wall first see
//! // each other the moment they clear its lower corners.
//! let q = Trajectory::new(Point2::new(2.0, 8.0), Vec2::new(0.0, -1.0));
//! let r = Trajectory::new(Point2::new(8.0, 8.0), Vec2::new(0.0, -1.0));
//!
//! assert_eq!(first_sight(&room, &q, &r), Some(4.0));
//! ```

use crate::motion::{collinear_events, Trajectory};
use crate::polygon::{is_visible_in, Polygon};
use num_traits::Float;

/// Finds the earliest `t >= 0` at which the two trajectories see each
/// other inside the polygon.
///
/// Returns zero when the starting positions are already mutually visible
/// and `None` when no candidate event ever verifies. Among events within
/// tolerance of each other the first to verify wins; the result is unique
/// up to the global tolerance.
pub fn first_sight<F: Float>(
    polygon: &Polygon<F>,
    q: &Trajectory<F>,
    r: &Trajectory<F>,
) -> Option<F> {
    if is_visible_in(polygon, q.position_at(F::zero()), r.position_at(F::zero())) {
        return Some(F::zero());
    }

    let mut best: Option<F> = None;

    for i in 0..polygon.len() {
        let pivot = polygon.vertex(i);

        for t in collinear_events(q, r, pivot) {
            if t < F::zero() {
                continue;
            }
            if best.is_some_and(|b| t >= b) {
                continue;
            }
            if is_visible_in(polygon, q.position_at(t), r.position_at(t)) {
                best = Some(t);
            }
        }
    }

    best
}
