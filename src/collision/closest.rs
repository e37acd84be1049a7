//! Closest point queries.
//!
//! Each routine writes the point of a shape nearest to `point` into
//! `closest_point`. The output is always overwritten. All routines assume
//! valid shapes (unit plane normals, non-negative radii, `min <= max`).

use crate::math::Vector2D;
use crate::shapes::{Circle2D, Plane2D, Rectangle2D, Segment2D};

/// Parameter `t` in `[0, 1]` of the point on segment `a -> b` nearest to `point`.
///
/// A zero-length segment is treated as the single point `a`.
pub(crate) fn segment_parameter(point: Vector2D, segment_a: Vector2D, segment_b: Vector2D) -> f32 {
    let direction = segment_b - segment_a;
    let direction_squared = direction.magnitude_squared();
    if direction_squared == 0.0 {
        log::trace!("zero-length segment at {:?}, using its start point", segment_a);
        return 0.0;
    }

    let projection = (point - segment_a).dot(direction);
    (projection / direction_squared).clamp(0.0, 1.0)
}

/// Gets the point on segment `a -> b` closest to `point`.
pub fn point_in_segment(
    point: Vector2D,
    segment_a: Vector2D,
    segment_b: Vector2D,
    closest_point: &mut Vector2D,
) {
    let t = segment_parameter(point, segment_a, segment_b);
    *closest_point = Segment2D::new(segment_a, segment_b).point_at(t);
}

/// Gets the orthogonal projection of `point` onto the plane's boundary.
pub fn point_in_plane(point: Vector2D, plane: &Plane2D, closest_point: &mut Vector2D) {
    let distance = plane.signed_distance(point);
    *closest_point = point - plane.normal * distance;
}

/// Gets the point of the halfspace closest to `point`; a point already
/// inside is its own closest point.
pub fn point_in_halfspace(point: Vector2D, halfspace: &Plane2D, closest_point: &mut Vector2D) {
    let distance = halfspace.signed_distance(point);
    if distance <= 0.0 {
        *closest_point = point;
    } else {
        *closest_point = point - halfspace.normal * distance;
    }
}

/// Gets the point of the (solid) circle closest to `point`.
pub fn point_in_circle(point: Vector2D, circle: &Circle2D, closest_point: &mut Vector2D) {
    let offset = point - circle.center;
    let distance_squared = offset.magnitude_squared();
    let radius_squared = circle.radius * circle.radius;

    if distance_squared <= radius_squared {
        *closest_point = point;
    } else {
        // distance_squared > radius_squared >= 0 here, so the division is safe.
        let scale = (radius_squared / distance_squared).sqrt();
        *closest_point = circle.center + offset * scale;
    }
}

/// Gets the point of the (solid) rectangle closest to `point` by clamping each axis.
pub fn point_in_rectangle(point: Vector2D, rectangle: &Rectangle2D, closest_point: &mut Vector2D) {
    *closest_point = point;
    if closest_point.x < rectangle.min.x {
        closest_point.x = rectangle.min.x;
    }
    if closest_point.y < rectangle.min.y {
        closest_point.y = rectangle.min.y;
    }
    if closest_point.x > rectangle.max.x {
        closest_point.x = rectangle.max.x;
    }
    if closest_point.y > rectangle.max.y {
        closest_point.y = rectangle.max.y;
    }
}
