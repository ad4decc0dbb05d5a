//! Velocity-space decomposition for repeated first-sight queries.
//!
//! For a fixed polygon and a fixed pair of base trajectories, the reflex
//! pivots separating the two starting positions are computed once (via
//! [`crate::path::taut_string_path`]); each pivot is then attributed an
//! angular sector of velocity space. A query scales the base velocities by
//! `(alpha, beta)`, locates the sector containing `atan2(beta, alpha)` by
//! binary search, and solves the single collinearity equation of that
//! sector's pivot. Construction is linear in the polygon size, queries are
//! logarithmic in the pivot count.
//!
//! The sector bounds are an equal-width partition of `[-pi, pi]`; the exact
//! decomposition would place boundaries at bitangents of the polygon
//! relative to the base geometry. See the note on [`SplinegonDiagram::new`].
//!
//! # Example
//!
//! ```
//! use visum::diagram::SplinegonDiagram;
//! use visum::motion::Trajectory;
//! use visum::polygon::Polygon;
//! use visum::{Point2, Vec2};
//!
//! let room: Polygon<f64> = Polygon::new(vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(10.0, 0.0),
//!     Point2::new(10.0, 10.0),
//!     Point2::new(6.0, 10.0),
//!     Point2::new(6.0, 4.0),
//!     Point2::new(4.0, 4.0),
//!     Point2::new(4.0, 10.0),
//!     Point2::new(0.0, 10.0),
//! ]);
//! let q = Trajectory::new(Point2::new(2.0, 8.0), Vec2::new(0.0, -1.0));
//! let r = Trajectory::new(Point2::new(8.0, 8.0), Vec2::new(0.0, -1.0));
//!
//! let diagram = SplinegonDiagram::new(&room, q, r);
//! let t = diagram.shoot_ray(1.0, 1.0).unwrap();
//! assert!((t - 4.0).abs() < 1e-9);
//! ```

use crate::motion::{collinear_events, Trajectory};
use crate::path::taut_string_path;
use crate::polygon::Polygon;
use crate::primitives::Point2;
use crate::tolerance;
use num_traits::Float;

/// One angular sector of velocity space, owned by one reflex pivot.
///
/// The pivot's collinearity equation determines the earliest visibility
/// event for every velocity direction in `[theta_start, theta_end]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RationalArc<F> {
    /// The reflex vertex whose equation governs this sector.
    pub pivot: Point2<F>,
    /// Lower angular bound, in `[-pi, pi]`.
    pub theta_start: F,
    /// Upper angular bound, in `[-pi, pi]`.
    pub theta_end: F,
}

impl<F: Float> RationalArc<F> {
    /// Tests whether the sector contains the given angle.
    #[inline]
    pub fn covers_angle(&self, theta: F) -> bool {
        theta >= self.theta_start && theta <= self.theta_end
    }
}

/// Preprocessed angular decomposition answering velocity-space ray queries.
#[derive(Debug, Clone)]
pub struct SplinegonDiagram<F> {
    arcs: Vec<RationalArc<F>>,
    q_base: Trajectory<F>,
    r_base: Trajectory<F>,
}

impl<F: Float> SplinegonDiagram<F> {
    /// Builds the diagram for a polygon and two base trajectories.
    ///
    /// Runs the taut-string preprocessor between the two starting
    /// positions and assigns each interior pivot an equal-width sector of
    /// `[-pi, pi]` in path order, the last sector clamped to `pi`. The
    /// equal-width split is a deliberate approximation of the
    /// bitangent-exact sector bounds; it keeps the arcs sorted and
    /// non-overlapping, which is all the binary search requires.
    ///
    /// An empty diagram (no pivots, i.e. the starts already see each
    /// other) answers every query with time zero.
    pub fn new(polygon: &Polygon<F>, q_base: Trajectory<F>, r_base: Trajectory<F>) -> Self {
        let pivots = taut_string_path(polygon, q_base.start, r_base.start);

        let mut arcs = Vec::new();
        if pivots.len() > 2 {
            let pi = F::from(std::f64::consts::PI).unwrap();
            let count = pivots.len() - 2;
            let step = (pi + pi) / F::from(count).unwrap();

            let mut theta = -pi;
            for pivot in &pivots[1..pivots.len() - 1] {
                arcs.push(RationalArc {
                    pivot: *pivot,
                    theta_start: theta,
                    theta_end: theta + step,
                });
                theta = theta + step;
            }

            // Guard the top bound against accumulated rounding.
            if let Some(last) = arcs.last_mut() {
                last.theta_end = pi;
            }
        }

        Self {
            arcs,
            q_base,
            r_base,
        }
    }

    /// Returns the angular sectors, ordered by `theta_start`.
    #[inline]
    pub fn arcs(&self) -> &[RationalArc<F>] {
        &self.arcs
    }

    /// Returns true when no pivot separates the base starting positions.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.arcs.is_empty()
    }

    /// Queries the earliest positive visibility event for scaled speeds.
    ///
    /// The base velocities are scaled by `alpha` (for q) and `beta` (for
    /// r); the sector containing `atan2(beta, alpha)` supplies the pivot
    /// whose collinearity equation is solved. Returns the first root
    /// greater than the tolerance, `Some(0)` when the diagram is empty, or
    /// `None` when no sighting occurs.
    pub fn shoot_ray(&self, alpha: F, beta: F) -> Option<F> {
        if self.arcs.is_empty() {
            return Some(F::zero());
        }

        let theta = beta.atan2(alpha);

        let idx = self.arcs.partition_point(|arc| arc.theta_end < theta);
        let arc = self.arcs.get(idx)?;
        if theta < arc.theta_start {
            return None;
        }

        let q = self.q_base.scaled(alpha);
        let r = self.r_base.scaled(beta);

        collinear_events(&q, &r, arc.pivot)
            .into_iter()
            .find(|t| *t > tolerance::eps::<F>())
    }
}
