//! Ray casts of the bounded segment `ray_from -> ray_to` against shapes.
//!
//! Each routine returns whether the segment hits the shape and writes the
//! first point of contact into `contact_point`. On a miss `contact_point` is
//! set to `ray_to`, so it is always overwritten: only the returned flag tells
//! a hit from a miss. All routines assume valid shapes (unit plane normals,
//! non-negative radii, `min <= max`).

use crate::collision::intersect;
use crate::math::Vector2D;
use crate::shapes::{Circle2D, Plane2D, Rectangle2D, Shape2D};

/// Writes the point at `t` for a hit, or `ray_to` for a miss.
fn finish(ray_from: Vector2D, ray_to: Vector2D, t: Option<f32>, contact_point: &mut Vector2D) -> bool {
    match t {
        Some(t) if (0.0..=1.0).contains(&t) => {
            *contact_point = ray_from + (ray_to - ray_from) * t;
            true
        }
        _ => {
            *contact_point = ray_to;
            false
        }
    }
}

/// Parameter where the ray crosses the plane given the signed distance of
/// its start. A ray starting on the plane hits at `t = 0`; a ray parallel to
/// the plane and off it gives an infinite parameter, which is a miss.
fn plane_parameter(ray_from: Vector2D, ray_to: Vector2D, plane: &Plane2D, distance: f32) -> f32 {
    let direction = ray_to - ray_from;
    if distance == 0.0 {
        return 0.0;
    }
    if direction == Vector2D::ZERO {
        log::trace!("zero-length ray at {:?} off the plane", ray_from);
    }
    let projection = direction.dot(plane.normal);
    -distance / projection
}

/// Casts the ray against a two-sided plane.
pub fn ray_in_plane(ray_from: Vector2D, ray_to: Vector2D, plane: &Plane2D, contact_point: &mut Vector2D) -> bool {
    let distance = plane.signed_distance(ray_from);
    let t = plane_parameter(ray_from, ray_to, plane, distance);
    finish(ray_from, ray_to, Some(t), contact_point)
}

/// Casts the ray against a halfspace. A ray starting inside hits at its start.
pub fn ray_in_halfspace(
    ray_from: Vector2D,
    ray_to: Vector2D,
    halfspace: &Plane2D,
    contact_point: &mut Vector2D,
) -> bool {
    let distance = halfspace.signed_distance(ray_from).max(0.0);
    let t = plane_parameter(ray_from, ray_to, halfspace, distance);
    finish(ray_from, ray_to, Some(t), contact_point)
}

/// Casts the ray against a solid circle. A ray starting inside hits at its start.
pub fn ray_in_circle(ray_from: Vector2D, ray_to: Vector2D, circle: &Circle2D, contact_point: &mut Vector2D) -> bool {
    let direction = ray_to - ray_from;
    let offset = ray_from - circle.center;
    let distance_squared = offset.magnitude_squared();
    let radius_squared = circle.radius * circle.radius;

    if distance_squared <= radius_squared {
        return finish(ray_from, ray_to, Some(0.0), contact_point);
    }

    let direction_squared = direction.magnitude_squared();
    if direction_squared == 0.0 {
        log::trace!("zero-length ray at {:?} outside the circle", ray_from);
        return finish(ray_from, ray_to, None, contact_point);
    }

    // Roots of |offset + t * direction|^2 = radius^2.
    let projection = direction.dot(offset);
    let discriminant = projection * projection - direction_squared * (distance_squared - radius_squared);
    if discriminant < 0.0 {
        return finish(ray_from, ray_to, None, contact_point);
    }

    // Starting outside, both roots share a sign; the smaller one is the entry.
    let t = -(projection + discriminant.sqrt()) / direction_squared;
    finish(ray_from, ray_to, Some(t), contact_point)
}

/// Casts the ray against a solid rectangle. A ray starting inside hits at its start.
pub fn ray_in_rectangle(
    ray_from: Vector2D,
    ray_to: Vector2D,
    rectangle: &Rectangle2D,
    contact_point: &mut Vector2D,
) -> bool {
    if ray_from == ray_to {
        log::trace!("zero-length ray at {:?} against a rectangle", ray_from);
    }
    let t = intersect::clip_segment(ray_from, ray_to, rectangle).map(|(t_min, _)| t_min);
    finish(ray_from, ray_to, t, contact_point)
}

/// Casts the ray against any shape with a ray cast routine.
///
/// Returns `None`, leaving `contact_point` untouched, for points and segments.
pub fn shape(ray_from: Vector2D, ray_to: Vector2D, shape: &Shape2D, contact_point: &mut Vector2D) -> Option<bool> {
    let hit = match shape {
        Shape2D::Plane(plane) => ray_in_plane(ray_from, ray_to, plane, contact_point),
        Shape2D::Halfspace(halfspace) => ray_in_halfspace(ray_from, ray_to, halfspace, contact_point),
        Shape2D::Circle(circle) => ray_in_circle(ray_from, ray_to, circle, contact_point),
        Shape2D::Rectangle(rectangle) => ray_in_rectangle(ray_from, ray_to, rectangle, contact_point),
        Shape2D::Point(_) | Shape2D::Segment(_) => return None,
    };
    Some(hit)
}
