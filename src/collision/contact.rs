use crate::math::Vector2D;

/// Stores the result of a collision between two shapes.
///
/// Produced by the routines in [`crate::collision::collide`], which write into
/// a caller-owned value so the same contact can be reused every step.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Contact2D {
    /// The collision normal, pointing from the second shape towards the first.
    pub normal: Vector2D,
    /// The normal rotated 90 degrees clockwise.
    pub tangent: Vector2D,
    /// The amount of penetration between the shapes, never negative.
    pub depth: f32,
}

impl Contact2D {
    pub fn new(normal: Vector2D, tangent: Vector2D, depth: f32) -> Self {
        Self { normal, tangent, depth }
    }

    pub fn from_components(
        normal_x: f32,
        normal_y: f32,
        tangent_x: f32,
        tangent_y: f32,
        depth: f32,
    ) -> Self {
        Self::new(
            Vector2D::new(normal_x, normal_y),
            Vector2D::new(tangent_x, tangent_y),
            depth,
        )
    }

    /// Writes the normal and derives the tangent from it.
    pub fn set_normal(&mut self, normal: Vector2D) {
        self.normal = normal;
        self.tangent = normal.tangent();
    }

    /// Flips the contact in the opposite direction, so it reads from the
    /// other shape's point of view. The depth is unchanged.
    pub fn flip(&mut self) {
        self.normal = -self.normal;
        self.tangent = -self.tangent;
    }

    /// Returns a flipped copy of the contact.
    pub fn flipped(self) -> Self {
        let mut copy = self;
        copy.flip();
        copy
    }
}
