//! Boolean intersection tests.
//!
//! Touching counts as intersecting everywhere. All routines assume valid
//! shapes (unit plane normals, non-negative radii, `min <= max`).

use crate::collision::closest;
use crate::math::Vector2D;
use crate::shapes::{Circle2D, Plane2D, Rectangle2D, Segment2D, Shape2D};

/// Clips the segment `from -> to` against the rectangle with the slab method.
///
/// Returns the parametric interval `(t_min, t_max)` inside `[0, 1]` where the
/// segment is within the rectangle, or `None` if the interval is empty.
pub(crate) fn clip_segment(from: Vector2D, to: Vector2D, rectangle: &Rectangle2D) -> Option<(f32, f32)> {
    let direction = to - from;
    let mut t_min = 0.0_f32;
    let mut t_max = 1.0_f32;

    for (start, delta, slab_min, slab_max) in [
        (from.x, direction.x, rectangle.min.x, rectangle.max.x),
        (from.y, direction.y, rectangle.min.y, rectangle.max.y),
    ] {
        if delta == 0.0 {
            // Parallel to the slab: either always inside it or never.
            if start < slab_min || start > slab_max {
                return None;
            }
            continue;
        }

        let inverse = 1.0 / delta;
        let (t1, t2) = if inverse > 0.0 {
            ((slab_min - start) * inverse, (slab_max - start) * inverse)
        } else {
            ((slab_max - start) * inverse, (slab_min - start) * inverse)
        };

        t_min = t_min.max(t1);
        t_max = t_max.min(t2);
        if t_min > t_max {
            return None;
        }
    }

    Some((t_min, t_max))
}

/// Returns true if the point lies exactly on the plane. No tolerance is applied.
pub fn point_in_plane(point: Vector2D, plane: &Plane2D) -> bool {
    plane.signed_distance(point) == 0.0
}

/// Returns true if the point is inside or on the boundary of the halfspace.
pub fn point_in_halfspace(point: Vector2D, halfspace: &Plane2D) -> bool {
    halfspace.signed_distance(point) <= 0.0
}

/// Returns true if the point is inside or on the circle.
pub fn point_in_circle(point: Vector2D, circle: &Circle2D) -> bool {
    let distance_squared = point.distance_squared(circle.center);
    distance_squared <= circle.radius * circle.radius
}

/// Returns true if the point is inside or on the rectangle.
pub fn point_in_rectangle(point: Vector2D, rectangle: &Rectangle2D) -> bool {
    point.x >= rectangle.min.x
        && point.y >= rectangle.min.y
        && point.x <= rectangle.max.x
        && point.y <= rectangle.max.y
}

/// Returns true if the segment touches or crosses the plane.
pub fn segment_in_plane(point_a: Vector2D, point_b: Vector2D, plane: &Plane2D) -> bool {
    let distance_a = plane.signed_distance(point_a);
    let distance_b = plane.signed_distance(point_b);

    (distance_a <= 0.0 && distance_b >= 0.0) || (distance_a >= 0.0 && distance_b <= 0.0)
}

/// Returns true if either end of the segment is inside the halfspace.
pub fn segment_in_halfspace(point_a: Vector2D, point_b: Vector2D, halfspace: &Plane2D) -> bool {
    halfspace.signed_distance(point_a) <= 0.0 || halfspace.signed_distance(point_b) <= 0.0
}

/// Returns true if the segment passes within the circle's radius of its center.
pub fn segment_in_circle(point_a: Vector2D, point_b: Vector2D, circle: &Circle2D) -> bool {
    let t = closest::segment_parameter(circle.center, point_a, point_b);
    let closest_point = Segment2D::new(point_a, point_b).point_at(t);

    point_in_circle(closest_point, circle)
}

/// Returns true if any part of the segment is inside the rectangle.
pub fn segment_in_rectangle(point_a: Vector2D, point_b: Vector2D, rectangle: &Rectangle2D) -> bool {
    clip_segment(point_a, point_b, rectangle).is_some()
}

/// Returns true if the circle touches or crosses the plane.
pub fn circle_in_plane(circle: &Circle2D, plane: &Plane2D) -> bool {
    plane.signed_distance(circle.center).abs() <= circle.radius
}

/// Returns true if any part of the circle is inside the halfspace.
pub fn circle_in_halfspace(circle: &Circle2D, halfspace: &Plane2D) -> bool {
    halfspace.signed_distance(circle.center) <= circle.radius
}

/// Returns true if the two circles overlap or touch.
pub fn circle_in_circle(circle1: &Circle2D, circle2: &Circle2D) -> bool {
    let distance_squared = circle2.center.distance_squared(circle1.center);
    let radius_sum = circle1.radius + circle2.radius;

    distance_squared <= radius_sum * radius_sum
}

/// Returns true if the circle and rectangle overlap or touch.
pub fn circle_in_rectangle(circle: &Circle2D, rectangle: &Rectangle2D) -> bool {
    let mut closest_point = Vector2D::ZERO;
    closest::point_in_rectangle(circle.center, rectangle, &mut closest_point);

    point_in_circle(closest_point, circle)
}

/// Half the rectangle's extent projected onto the plane normal, and the signed
/// distance of its center from the plane.
pub(crate) fn rectangle_projection(rectangle: &Rectangle2D, plane: &Plane2D) -> (f32, f32) {
    let extents = rectangle.half_extents();
    let projection = extents.x * plane.normal.x.abs() + extents.y * plane.normal.y.abs();
    (projection, plane.signed_distance(rectangle.center()))
}

/// Returns true if the rectangle touches or crosses the plane.
pub fn rectangle_in_plane(rectangle: &Rectangle2D, plane: &Plane2D) -> bool {
    let (projection, distance) = rectangle_projection(rectangle, plane);
    distance.abs() <= projection
}

/// Returns true if any part of the rectangle is inside the halfspace.
pub fn rectangle_in_halfspace(rectangle: &Rectangle2D, halfspace: &Plane2D) -> bool {
    let (projection, distance) = rectangle_projection(rectangle, halfspace);
    distance <= projection
}

/// Returns true if the two rectangles overlap or touch.
pub fn rectangle_in_rectangle(rectangle1: &Rectangle2D, rectangle2: &Rectangle2D) -> bool {
    if rectangle1.max.x < rectangle2.min.x || rectangle1.min.x > rectangle2.max.x {
        return false;
    }
    if rectangle1.max.y < rectangle2.min.y || rectangle1.min.y > rectangle2.max.y {
        return false;
    }
    true
}

fn ordered(a: &Shape2D, b: &Shape2D) -> Option<bool> {
    use Shape2D::*;

    let result = match (a, b) {
        (Point(p), Plane(plane)) => point_in_plane(*p, plane),
        (Point(p), Halfspace(halfspace)) => point_in_halfspace(*p, halfspace),
        (Point(p), Circle(circle)) => point_in_circle(*p, circle),
        (Point(p), Rectangle(rectangle)) => point_in_rectangle(*p, rectangle),
        (Segment(s), Plane(plane)) => segment_in_plane(s.a, s.b, plane),
        (Segment(s), Halfspace(halfspace)) => segment_in_halfspace(s.a, s.b, halfspace),
        (Segment(s), Circle(circle)) => segment_in_circle(s.a, s.b, circle),
        (Segment(s), Rectangle(rectangle)) => segment_in_rectangle(s.a, s.b, rectangle),
        (Circle(circle), Plane(plane)) => circle_in_plane(circle, plane),
        (Circle(circle), Halfspace(halfspace)) => circle_in_halfspace(circle, halfspace),
        (Circle(c1), Circle(c2)) => circle_in_circle(c1, c2),
        (Circle(circle), Rectangle(rectangle)) => circle_in_rectangle(circle, rectangle),
        (Rectangle(rectangle), Plane(plane)) => rectangle_in_plane(rectangle, plane),
        (Rectangle(rectangle), Halfspace(halfspace)) => rectangle_in_halfspace(rectangle, halfspace),
        (Rectangle(r1), Rectangle(r2)) => rectangle_in_rectangle(r1, r2),
        _ => return None,
    };
    Some(result)
}

/// Tests any pair of shapes, in either order.
///
/// Returns `None` for pairs that have no test, such as two planes or two points.
pub fn shapes(a: &Shape2D, b: &Shape2D) -> Option<bool> {
    ordered(a, b).or_else(|| ordered(b, a))
}
