use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

/// A single precision vector or point in 2D space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector2D {
    pub x: f32,
    pub y: f32,
}

impl Vector2D {
    pub const ZERO: Vector2D = Vector2D { x: 0.0, y: 0.0 };
    /// The value a zero-length vector takes when normalized.
    pub const UNIT_X: Vector2D = Vector2D { x: 1.0, y: 0.0 };

    /// Creates a new Vector2D.
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Overwrites both components in place.
    pub fn set(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    /// Calculates the dot product of two vectors.
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y
    }

    /// Calculates the squared magnitude (length) of the vector.
    /// Useful for comparisons as it avoids a square root.
    pub fn magnitude_squared(self) -> f32 {
        self.dot(self)
    }

    /// Calculates the magnitude (length) of the vector.
    ///
    /// The sum of squares and the root are taken in `f64` and narrowed back,
    /// so components near the edge of the `f32` range do not overflow.
    pub fn magnitude(self) -> f32 {
        self.length_squared_f64().sqrt() as f32
    }

    /// Normalizes the vector in place.
    ///
    /// A vector whose squared length is exactly zero becomes [`Vector2D::UNIT_X`]
    /// rather than a pair of NaNs. Contact generation relies on this for
    /// coincident centers.
    pub fn normalize(&mut self) {
        let length_squared = self.length_squared_f64();
        if length_squared != 0.0 {
            let inverse = 1.0 / length_squared.sqrt();
            self.x = (self.x as f64 * inverse) as f32;
            self.y = (self.y as f64 * inverse) as f32;
        } else {
            log::trace!("normalizing a zero-length vector, falling back to (1, 0)");
            *self = Self::UNIT_X;
        }
    }

    /// Returns a normalized copy of the vector, with the same zero fallback as [`Vector2D::normalize`].
    pub fn normalized(self) -> Self {
        let mut copy = self;
        copy.normalize();
        copy
    }

    /// Calculates the squared distance between two vector points.
    pub fn distance_squared(self, other: Self) -> f32 {
        (self - other).magnitude_squared()
    }

    /// Calculates the distance between two vector points.
    pub fn distance(self, other: Self) -> f32 {
        (self - other).magnitude()
    }

    /// Returns a vector perpendicular to this vector (90-degree counter-clockwise rotation).
    pub fn perpendicular(self) -> Self {
        Self::new(-self.y, self.x)
    }

    /// Returns the 90-degree clockwise rotation, the tangent of a contact normal.
    pub fn tangent(self) -> Self {
        Self::new(self.y, -self.x)
    }

    /// Reflects a direction about a unit normal: `v - 2(n.v)n`.
    pub fn reflect(self, normal: Self) -> Self {
        self - normal * (2.0 * normal.dot(self))
    }

    fn length_squared_f64(self) -> f64 {
        let x = self.x as f64;
        let y = self.y as f64;
        x * x + y * y
    }
}

impl Add for Vector2D {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl Sub for Vector2D {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

// Vector2D * f32
impl Mul<f32> for Vector2D {
    type Output = Self;

    fn mul(self, scalar: f32) -> Self {
        Self {
            x: self.x * scalar,
            y: self.y * scalar,
        }
    }
}

// f32 * Vector2D
impl Mul<Vector2D> for f32 {
    type Output = Vector2D;

    fn mul(self, vector: Vector2D) -> Vector2D {
        vector * self
    }
}

// Division by zero is left to IEEE semantics (infinity or NaN).
impl Div<f32> for Vector2D {
    type Output = Self;

    fn div(self, rhs: f32) -> Self::Output {
        Vector2D::new(self.x / rhs, self.y / rhs)
    }
}

impl AddAssign for Vector2D {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl SubAssign for Vector2D {
    fn sub_assign(&mut self, rhs: Self) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl Neg for Vector2D {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    const EPSILON: f32 = 1e-6;

    #[test]
    fn test_vector_new_and_default() {
        let v = Vector2D::new(1.0, 2.0);
        assert_eq!(v.x, 1.0);
        assert_eq!(v.y, 2.0);
        assert_eq!(Vector2D::default(), Vector2D::ZERO);
    }

    #[test]
    fn test_vector_set() {
        let mut v = Vector2D::new(1.0, 2.0);
        v.set(-3.0, 4.5);
        assert_eq!(v, Vector2D::new(-3.0, 4.5));
    }

    #[test]
    fn test_vector_arithmetic() {
        let v1 = Vector2D::new(1.0, 2.0);
        let v2 = Vector2D::new(3.0, 4.0);
        assert_eq!(v1 + v2, Vector2D::new(4.0, 6.0));
        assert_eq!(v2 - v1, Vector2D::new(2.0, 2.0));
        assert_eq!(v1 * 3.0, Vector2D::new(3.0, 6.0));
        assert_eq!(3.0 * v1, Vector2D::new(3.0, 6.0));
        assert_eq!(v2 / 2.0, Vector2D::new(1.5, 2.0));
        assert_eq!(-v1, Vector2D::new(-1.0, -2.0));

        let mut acc = v1;
        acc += v2;
        assert_eq!(acc, Vector2D::new(4.0, 6.0));
        acc -= v1;
        assert_eq!(acc, v2);
    }

    #[test]
    fn test_vector_dot_and_magnitude() {
        let v1 = Vector2D::new(1.0, 2.0);
        let v2 = Vector2D::new(3.0, 4.0);
        assert!((v1.dot(v2) - 11.0).abs() < EPSILON);
        assert!((v2.magnitude_squared() - 25.0).abs() < EPSILON);
        assert!((v2.magnitude() - 5.0).abs() < EPSILON);
        assert_eq!(Vector2D::ZERO.magnitude(), 0.0);
    }

    #[test]
    fn test_vector_magnitude_does_not_overflow() {
        // x * x overflows f32 here, the f64 intermediate does not.
        let v = Vector2D::new(3.0e20, 4.0e20);
        let magnitude = v.magnitude();
        assert!(magnitude.is_finite());
        assert!((magnitude / 5.0e20 - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_vector_normalize() {
        let mut v = Vector2D::new(3.0, 4.0);
        v.normalize();
        assert!((v.magnitude() - 1.0).abs() < EPSILON);
        assert!((v.x - 0.6).abs() < EPSILON);
        assert!((v.y - 0.8).abs() < EPSILON);
    }

    #[test]
    fn test_vector_normalize_zero_falls_back_to_unit_x() {
        let mut v = Vector2D::ZERO;
        v.normalize();
        assert_eq!(v, Vector2D::new(1.0, 0.0));

        let mut negative_zero = Vector2D::new(-0.0, -0.0);
        negative_zero.normalize();
        assert_eq!(negative_zero, Vector2D::UNIT_X);
    }

    #[test]
    fn test_vector_normalize_tiny_components() {
        // Squares underflow in f32 but not in f64, so this is not the zero case.
        let mut v = Vector2D::new(1.0e-30, 0.0);
        v.normalize();
        assert!((v.x - 1.0).abs() < EPSILON);
        assert_eq!(v.y, 0.0);

        let mut w = Vector2D::new(0.0, -1.0e-30);
        w.normalize();
        assert!((w.y - -1.0).abs() < EPSILON);
        assert_eq!(w.x, 0.0);
    }

    #[test]
    fn test_vector_normalize_always_unit() {
        for i in -10..=10 {
            for j in -10..=10 {
                let mut v = Vector2D::new(i as f32 * 0.37, j as f32 * 1.9);
                v.normalize();
                assert!((v.magnitude() - 1.0).abs() < EPSILON, "not unit: {:?}", v);
            }
        }
    }

    #[test]
    fn test_vector_normalized_leaves_original() {
        let v = Vector2D::new(0.0, 2.0);
        let n = v.normalized();
        assert_eq!(v, Vector2D::new(0.0, 2.0));
        assert_eq!(n, Vector2D::new(0.0, 1.0));
        assert_eq!(Vector2D::ZERO.normalized(), Vector2D::UNIT_X);
    }

    #[test]
    fn test_vector_distance() {
        let v1 = Vector2D::new(1.0, 2.0);
        let v2 = Vector2D::new(4.0, 6.0);
        assert!((v1.distance_squared(v2) - 25.0).abs() < EPSILON);
        assert!((v2.distance(v1) - 5.0).abs() < EPSILON);
    }

    #[test]
    fn test_vector_perpendicular_and_tangent() {
        let v = Vector2D::new(3.0, 4.0);
        assert_eq!(v.perpendicular(), Vector2D::new(-4.0, 3.0));
        assert_eq!(v.tangent(), Vector2D::new(4.0, -3.0));
        assert_eq!(v.tangent(), -v.perpendicular());
        assert!(v.dot(v.tangent()).abs() < EPSILON);
    }

    #[test]
    fn test_vector_reflect() {
        // A ball travelling down-right hits a floor whose normal points up.
        let direction = Vector2D::new(1.0, -1.0);
        let reflected = direction.reflect(Vector2D::new(0.0, 1.0));
        assert!((reflected.x - 1.0).abs() < EPSILON);
        assert!((reflected.y - 1.0).abs() < EPSILON);

        // Head-on reflection reverses the direction.
        let head_on = Vector2D::new(-2.0, 0.0).reflect(Vector2D::new(1.0, 0.0));
        assert_eq!(head_on, Vector2D::new(2.0, 0.0));
    }
}
