//! Linear point trajectories.

use crate::primitives::{Point2, Vec2};
use num_traits::Float;

/// A point moving along a straight line at constant velocity.
///
/// Position at time `t` is `start + t * velocity`; the time domain of every
/// query is `t >= 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Trajectory<F> {
    /// Position at t = 0.
    pub start: Point2<F>,
    /// Displacement per unit time.
    pub velocity: Vec2<F>,
}

impl<F: Float> Trajectory<F> {
    /// Creates a trajectory from a starting position and velocity.
    #[inline]
    pub fn new(start: Point2<F>, velocity: Vec2<F>) -> Self {
        Self { start, velocity }
    }

    /// Returns the position at time `t`.
    #[inline]
    pub fn position_at(&self, t: F) -> Point2<F> {
        self.start + self.velocity * t
    }

    /// Returns the same path traversed with the speed scaled by `factor`.
    #[inline]
    pub fn scaled(&self, factor: F) -> Self {
        Self {
            start: self.start,
            velocity: self.velocity * factor,
        }
    }
}
