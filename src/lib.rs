//! Closest points, intersection tests, contact generation and ray casts for
//! 2D points, segments, planes, halfspaces, circles and axis-aligned rectangles.
//!
//! Everything is a free function over `Copy` value types. Results are written
//! into caller-owned output values so the queries can run every simulation
//! step without allocating.
//!
//! ```
//! use collide2d::{collision::{collide, intersect}, Circle2D, Contact2D, Rectangle2D};
//!
//! let ball = Circle2D::from_components(2.0, 2.5, 1.0);
//! let paddle = Rectangle2D::from_components(0.0, 0.0, 4.0, 2.0);
//!
//! let mut contact = Contact2D::default();
//! if intersect::circle_in_rectangle(&ball, &paddle) {
//!     collide::circle_in_rectangle(&ball, &paddle, &mut contact);
//! }
//! assert_eq!(contact.normal, collide2d::Vector2D::new(0.0, 1.0));
//! assert_eq!(contact.depth, 0.5);
//! ```

pub mod collision;
pub mod math;
pub mod shapes;

// Re-export key types for easier use
pub use collision::Contact2D;
pub use math::Vector2D;
pub use shapes::{Circle2D, Plane2D, Rectangle2D, Segment2D, Shape2D};
