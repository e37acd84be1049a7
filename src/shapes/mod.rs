pub mod circle;
pub mod plane;
pub mod rectangle;
pub mod segment;

// Re-export the specific shape types
pub use circle::Circle2D;
pub use plane::Plane2D;
pub use rectangle::Rectangle2D;
pub use segment::Segment2D;

use crate::math::Vector2D;

/// Any of the shapes the query modules understand.
///
/// A [`Plane2D`] appears twice: as a two-sided boundary and as a one-sided
/// halfspace. The routines behind the two variants differ.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Shape2D {
    Point(Vector2D),
    Segment(Segment2D),
    Plane(Plane2D),
    Halfspace(Plane2D),
    Circle(Circle2D),
    Rectangle(Rectangle2D),
}

impl From<Vector2D> for Shape2D {
    fn from(point: Vector2D) -> Self {
        Shape2D::Point(point)
    }
}

impl From<Segment2D> for Shape2D {
    fn from(segment: Segment2D) -> Self {
        Shape2D::Segment(segment)
    }
}

impl From<Circle2D> for Shape2D {
    fn from(circle: Circle2D) -> Self {
        Shape2D::Circle(circle)
    }
}

impl From<Rectangle2D> for Shape2D {
    fn from(rectangle: Rectangle2D) -> Self {
        Shape2D::Rectangle(rectangle)
    }
}
