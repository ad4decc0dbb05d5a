//! visum - First mutual visibility of moving points in a simple polygon
//!
//! Two points travel along straight lines inside a simple, possibly
//! non-convex polygon. This library computes the earliest non-negative time
//! at which the segment between them lies entirely inside the polygon, with
//! a single floating-point tolerance in place of exact arithmetic.
//!
//! Two query front ends share the same algebraic core:
//!
//! - [`sight::first_sight`] enumerates the collinearity events of every
//!   polygon vertex and verifies each against the visibility oracle.
//! - [`diagram::SplinegonDiagram`] preprocesses the reflex pivots between
//!   the two starting positions into an angular decomposition of velocity
//!   space, then answers speed-scaled queries by binary search.

pub mod diagram;
pub mod error;
pub mod motion;
pub mod path;
pub mod polygon;
pub mod primitives;
pub mod sight;
pub mod tolerance;

pub use diagram::{RationalArc, SplinegonDiagram};
pub use error::PolygonError;
pub use motion::Trajectory;
pub use path::taut_string_path;
pub use polygon::{build_polygon, is_visible_in, Polygon};
pub use primitives::{Point2, Segment2, Vec2};
pub use sight::first_sight;
pub use tolerance::{orient2d, Orientation, EPSILON};
