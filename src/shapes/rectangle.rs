use crate::math::Vector2D;

/// An axis-aligned rectangle defined by its minimum and maximum corner points.
///
/// `min <= max` on both axes is assumed, not enforced.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rectangle2D {
    pub min: Vector2D,
    pub max: Vector2D,
}

impl Rectangle2D {
    pub fn new(min: Vector2D, max: Vector2D) -> Self {
        Self { min, max }
    }

    pub fn from_components(min_x: f32, min_y: f32, max_x: f32, max_y: f32) -> Self {
        Self::new(Vector2D::new(min_x, min_y), Vector2D::new(max_x, max_y))
    }

    /// Creates a rectangle from its center point and half extents.
    pub fn from_center(center: Vector2D, half_extents: Vector2D) -> Self {
        Self::new(center - half_extents, center + half_extents)
    }

    /// Creates the smallest rectangle that encloses a set of points.
    pub fn from_points(points: &[Vector2D]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut min = *first;
        let mut max = *first;
        for point in rest {
            min.x = min.x.min(point.x);
            min.y = min.y.min(point.y);
            max.x = max.x.max(point.x);
            max.y = max.y.max(point.y);
        }
        Some(Self::new(min, max))
    }

    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// Half the width and height.
    pub fn half_extents(&self) -> Vector2D {
        (self.max - self.min) * 0.5
    }

    pub fn center(&self) -> Vector2D {
        self.min + self.half_extents()
    }
}
