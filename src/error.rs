//! Error types for polygon ingestion.

use thiserror::Error;

/// Errors that can occur while building a polygon from raw vertices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PolygonError {
    /// Fewer than three vertices were supplied.
    #[error("polygon needs at least 3 vertices, got {count}")]
    TooFewVertices {
        /// Number of vertices supplied.
        count: usize,
    },

    /// The vertex chain encloses no area (all vertices collinear).
    #[error("polygon has zero area")]
    ZeroArea,

    /// Two non-adjacent edges cross each other.
    #[error("polygon is self-intersecting")]
    SelfIntersecting,
}
