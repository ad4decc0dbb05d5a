//! Simple polygons: construction, classification, and visibility.
//!
//! The [`Polygon`] type stores a CCW vertex loop with modular indexing and
//! answers the classification queries the motion-planning layers need:
//! point containment (boundary inclusive), reflex-vertex detection, and
//! mutual visibility of two points through the interior.
//!
//! # Example
//!
//! ```
//! use visum::polygon::{is_visible_in, Polygon};
//! use visum::Point2;
//!
//! // Room with a wall hanging from the ceiling.
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
//! // The wall corners are reflex; they pivot every sight line.
//! assert!(room.is_reflex(4));
//! assert!(!is_visible_in(&room, Point2::new(2.0, 8.0), Point2::new(8.0, 8.0)));
//! ```

mod core;
mod validate;
mod visibility;

pub use self::core::{polygon_contains, polygon_signed_area, Polygon};
pub use validate::{build_polygon, is_simple};
pub use visibility::is_visible_in;
