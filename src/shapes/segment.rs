use crate::math::Vector2D;

/// A bounded line segment from `a` to `b`, parameterized as `a + t * (b - a)` for `t` in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Segment2D {
    pub a: Vector2D,
    pub b: Vector2D,
}

impl Segment2D {
    pub fn new(a: Vector2D, b: Vector2D) -> Self {
        Self { a, b }
    }

    /// Calculates the length of the line segment.
    pub fn length(&self) -> f32 {
        self.a.distance(self.b)
    }

    /// Returns the direction vector of the line segment (from a to b).
    pub fn direction(&self) -> Vector2D {
        self.b - self.a
    }

    /// The point at parameter `t`; not clamped.
    pub fn point_at(&self, t: f32) -> Vector2D {
        self.a + self.direction() * t
    }
}
