use crate::math::Vector2D;

/// A circle in 2D space. The radius is assumed non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Circle2D {
    pub center: Vector2D,
    pub radius: f32,
}

impl Circle2D {
    pub fn new(center: Vector2D, radius: f32) -> Self {
        Self { center, radius }
    }

    pub fn from_components(center_x: f32, center_y: f32, radius: f32) -> Self {
        Self::new(Vector2D::new(center_x, center_y), radius)
    }
}
