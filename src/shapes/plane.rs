use crate::math::Vector2D;

/// A line in 2D space of the form `normal.x * x + normal.y * y + offset = 0`.
///
/// The same value is read as a one-sided halfspace by the `*_in_halfspace`
/// routines, where points with a negative signed distance are inside.
/// The normal is expected to be unit length; nothing checks it.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Plane2D {
    pub normal: Vector2D,
    pub offset: f32,
}

impl Plane2D {
    pub fn new(normal: Vector2D, offset: f32) -> Self {
        Self { normal, offset }
    }

    pub fn from_components(normal_x: f32, normal_y: f32, offset: f32) -> Self {
        Self::new(Vector2D::new(normal_x, normal_y), offset)
    }

    /// Builds the plane through `point1` and `point2` with a left-hand normal.
    pub fn from_points_left(point1: Vector2D, point2: Vector2D) -> Self {
        let mut plane = Self::default();
        plane.calculate_plane_left(point1, point2);
        plane
    }

    /// Builds the plane through `point1` and `point2` with a right-hand normal.
    pub fn from_points_right(point1: Vector2D, point2: Vector2D) -> Self {
        let mut plane = Self::default();
        plane.calculate_plane_right(point1, point2);
        plane
    }

    /// Recomputes the plane in place so it passes through both points, with
    /// the normal rotated counter-clockwise from `point1 -> point2`.
    ///
    /// Coincident points give the `(1, 0)` normal through `point1`.
    pub fn calculate_plane_left(&mut self, point1: Vector2D, point2: Vector2D) {
        self.normal.set(point1.y - point2.y, point2.x - point1.x);
        self.normal.normalize();
        self.offset = -self.normal.dot(point1);
    }

    /// Recomputes the plane in place so it passes through both points, with
    /// the normal rotated clockwise from `point1 -> point2`.
    pub fn calculate_plane_right(&mut self, point1: Vector2D, point2: Vector2D) {
        self.normal.set(point2.y - point1.y, point1.x - point2.x);
        self.normal.normalize();
        self.offset = -self.normal.dot(point1);
    }

    /// `normal . point + offset`; negative means inside when used as a halfspace.
    #[inline]
    pub fn signed_distance(&self, point: Vector2D) -> f32 {
        self.normal.dot(point) + self.offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    const EPSILON: f32 = 1e-6;

    #[test]
    fn test_plane_new() {
        let plane = Plane2D::from_components(0.0, 1.0, -2.0);
        assert_eq!(plane, Plane2D::new(Vector2D::new(0.0, 1.0), -2.0));
        assert_eq!(Plane2D::default().offset, 0.0);
    }

    #[test]
    fn test_plane_signed_distance() {
        // The line y = 2, normal pointing up.
        let plane = Plane2D::from_components(0.0, 1.0, -2.0);
        assert!((plane.signed_distance(Vector2D::new(7.0, 5.0)) - 3.0).abs() < EPSILON);
        assert!((plane.signed_distance(Vector2D::new(-1.0, 0.0)) - -2.0).abs() < EPSILON);
        assert_eq!(plane.signed_distance(Vector2D::new(100.0, 2.0)), 0.0);
    }

    #[test]
    fn test_plane_left_from_points() {
        // Walking along +x, the left-hand normal points up.
        let p1 = Vector2D::new(0.0, 3.0);
        let p2 = Vector2D::new(4.0, 3.0);
        let plane = Plane2D::from_points_left(p1, p2);
        assert!((plane.normal.x - 0.0).abs() < EPSILON);
        assert!((plane.normal.y - 1.0).abs() < EPSILON);
        assert!((plane.offset - -3.0).abs() < EPSILON);
        assert!(plane.signed_distance(p1).abs() < EPSILON);
        assert!(plane.signed_distance(p2).abs() < EPSILON);
    }

    #[test]
    fn test_plane_right_is_opposite_of_left() {
        let p1 = Vector2D::new(1.0, 1.0);
        let p2 = Vector2D::new(4.0, 5.0);
        let left = Plane2D::from_points_left(p1, p2);
        let right = Plane2D::from_points_right(p1, p2);
        assert!((left.normal.x + right.normal.x).abs() < EPSILON);
        assert!((left.normal.y + right.normal.y).abs() < EPSILON);
        assert!((left.offset + right.offset).abs() < EPSILON);
        assert!((right.normal.magnitude() - 1.0).abs() < EPSILON);
        assert!(right.signed_distance(p1).abs() < EPSILON);
        assert!(right.signed_distance(p2).abs() < 1e-5);
    }

    #[test]
    fn test_plane_calculate_in_place() {
        let mut plane = Plane2D::from_components(9.0, 9.0, 9.0);
        plane.calculate_plane_right(Vector2D::new(2.0, 0.0), Vector2D::new(2.0, 10.0));
        // Walking along +y, the right-hand normal points along +x: the line x = 2.
        assert!((plane.normal.x - 1.0).abs() < EPSILON);
        assert!(plane.normal.y.abs() < EPSILON);
        assert!((plane.offset - -2.0).abs() < EPSILON);
    }

    #[test]
    fn test_plane_from_coincident_points() {
        let p = Vector2D::new(3.0, -1.0);
        let plane = Plane2D::from_points_left(p, p);
        assert_eq!(plane.normal, Vector2D::UNIT_X);
        assert_eq!(plane.offset, -3.0);
    }
}
