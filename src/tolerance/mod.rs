//! Epsilon-aware geometric predicates.
//!
//! A single process-wide tolerance [`EPSILON`] governs every equality, sign,
//! and on-segment decision in the crate. Inside the epsilon band a predicate
//! may go either way, but it is internally consistent: swapping segment
//! endpoints never changes a classification.

mod predicates;

use num_traits::Float;

pub use predicates::{
    cross_z, on_segment, orient2d, segments_intersect, Orientation,
};

/// The global numeric tolerance.
pub const EPSILON: f64 = 1e-9;

/// Lifts [`EPSILON`] into the working float type.
#[inline]
pub fn eps<F: Float>() -> F {
    F::from(EPSILON).unwrap()
}
