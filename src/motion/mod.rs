//! Moving points and the algebra of their visibility events.
//!
//! # Example
//!
//! ```
//! use visum::motion::{collinear_events, Trajectory};
//! use visum::{Point2, Vec2};
//!
//! // Two points descending in lockstep past a corner at (4, 4).
//! let q = Trajectory::new(Point2::new(2.0, 8.0), Vec2::new(0.0, -1.0));
//! let r = Trajectory::new(Point2::new(8.0, 8.0), Vec2::new(0.0, -1.0));
//!
//! let events = collinear_events(&q, &r, Point2::new(4.0, 4.0));
//! assert_eq!(events, vec![4.0]);
//! ```

mod events;
mod trajectory;

pub use events::{collinear_events, solve_quadratic_nonneg};
pub use trajectory::Trajectory;
