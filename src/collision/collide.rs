//! Contact generation.
//!
//! Each routine writes a [`Contact2D`] for a pair of shapes that the caller
//! has already found to intersect (see [`crate::collision::intersect`]). The
//! normal points from the second shape towards the first, the tangent is the
//! normal rotated clockwise, and the depth is clamped at zero, so calling a
//! routine on separated shapes yields a meaningless but well-formed contact.
//! The contact is always overwritten.
//!
//! All routines assume valid shapes (unit plane normals, non-negative radii,
//! `min <= max`).

use crate::collision::{closest, intersect};
use crate::collision::contact::Contact2D;
use crate::math::Vector2D;
use crate::shapes::{Circle2D, Plane2D, Rectangle2D, Shape2D};

/// Picks the axis-aligned normal from the face distances of a rectangle.
///
/// `x_min`/`x_max` are how far the other shape reaches past the rectangle's
/// min/max face on x, likewise for y. The axis with the smaller separation
/// wins (x only when strictly smaller), pointing out of the nearer face.
fn face_contact(x_min: f32, x_max: f32, y_min: f32, y_max: f32, contact: &mut Contact2D) {
    let distance_x = x_min.min(x_max);
    let distance_y = y_min.min(y_max);
    let distance = distance_x.min(distance_y);

    let normal = if distance_x < distance_y {
        Vector2D::new(if x_min < x_max { -1.0 } else { 1.0 }, 0.0)
    } else {
        Vector2D::new(0.0, if y_min < y_max { -1.0 } else { 1.0 })
    };

    contact.set_normal(normal);
    contact.depth = distance.max(0.0);
}

/// The plane normal, turned to face the side `distance` is on.
fn facing_normal(plane: &Plane2D, distance: f32) -> Vector2D {
    if distance < 0.0 {
        -plane.normal
    } else {
        plane.normal
    }
}

/// Contact between a point and a two-sided plane. A point has no extent, so the depth is zero.
pub fn point_in_plane(point: Vector2D, plane: &Plane2D, contact: &mut Contact2D) {
    let distance = plane.signed_distance(point);
    contact.set_normal(facing_normal(plane, distance));
    contact.depth = 0.0;
}

/// Contact between a point and a halfspace; the depth is how far the point is inside.
pub fn point_in_halfspace(point: Vector2D, halfspace: &Plane2D, contact: &mut Contact2D) {
    contact.set_normal(halfspace.normal);
    contact.depth = (-halfspace.signed_distance(point)).max(0.0);
}

/// Contact between a point and a circle, normal pointing from the center towards the point.
pub fn point_in_circle(point: Vector2D, circle: &Circle2D, contact: &mut Contact2D) {
    let offset = point - circle.center;
    contact.set_normal(offset.normalized());

    let distance = contact.normal.dot(offset);
    contact.depth = (circle.radius - distance).max(0.0);
}

/// Contact between a point and a rectangle, normal pointing out of the nearest face.
pub fn point_in_rectangle(point: Vector2D, rectangle: &Rectangle2D, contact: &mut Contact2D) {
    face_contact(
        point.x - rectangle.min.x,
        rectangle.max.x - point.x,
        point.y - rectangle.min.y,
        rectangle.max.y - point.y,
        contact,
    );
}

/// Contact between a circle and a two-sided plane, normal on the circle's side.
pub fn circle_in_plane(circle: &Circle2D, plane: &Plane2D, contact: &mut Contact2D) {
    let distance = plane.signed_distance(circle.center);
    contact.set_normal(facing_normal(plane, distance));
    contact.depth = (circle.radius - distance.abs()).max(0.0);
}

/// Contact between a circle and a halfspace.
pub fn circle_in_halfspace(circle: &Circle2D, halfspace: &Plane2D, contact: &mut Contact2D) {
    contact.set_normal(halfspace.normal);

    let distance = halfspace.signed_distance(circle.center);
    contact.depth = (circle.radius - distance).max(0.0);
}

/// Contact between two circles, normal pointing from `circle2` towards `circle1`.
///
/// Concentric circles get the `(1, 0)` normal.
pub fn circle_in_circle(circle1: &Circle2D, circle2: &Circle2D, contact: &mut Contact2D) {
    let offset = circle1.center - circle2.center;
    contact.set_normal(offset.normalized());

    let distance = contact.normal.dot(offset);
    contact.depth = ((circle1.radius + circle2.radius) - distance).max(0.0);
}

/// Contact between a circle and a rectangle, normal pointing from the rectangle towards the circle.
///
/// A center beyond a corner (outside on both axes) uses the closest point of
/// the rectangle; otherwise the nearest face of the radius-expanded circle wins.
pub fn circle_in_rectangle(circle: &Circle2D, rectangle: &Rectangle2D, contact: &mut Contact2D) {
    let center = circle.center;
    let outside_x = center.x < rectangle.min.x || center.x > rectangle.max.x;
    let outside_y = center.y < rectangle.min.y || center.y > rectangle.max.y;

    if outside_x && outside_y {
        let mut closest_point = Vector2D::ZERO;
        closest::point_in_rectangle(center, rectangle, &mut closest_point);

        let offset = center - closest_point;
        contact.set_normal(offset.normalized());

        let distance = contact.normal.dot(offset);
        contact.depth = (circle.radius - distance).max(0.0);
    } else {
        face_contact(
            (center.x + circle.radius) - rectangle.min.x,
            rectangle.max.x - (center.x - circle.radius),
            (center.y + circle.radius) - rectangle.min.y,
            rectangle.max.y - (center.y - circle.radius),
            contact,
        );
    }
}

/// Contact between a rectangle and a two-sided plane, normal on the rectangle center's side.
pub fn rectangle_in_plane(rectangle: &Rectangle2D, plane: &Plane2D, contact: &mut Contact2D) {
    let (projection, distance) = intersect::rectangle_projection(rectangle, plane);
    contact.set_normal(facing_normal(plane, distance));
    contact.depth = (projection - distance.abs()).max(0.0);
}

/// Contact between a rectangle and a halfspace.
pub fn rectangle_in_halfspace(rectangle: &Rectangle2D, halfspace: &Plane2D, contact: &mut Contact2D) {
    let (projection, distance) = intersect::rectangle_projection(rectangle, halfspace);
    contact.set_normal(halfspace.normal);
    contact.depth = (projection - distance).max(0.0);
}

/// Contact between two rectangles, normal pointing from `rectangle2` towards `rectangle1`.
pub fn rectangle_in_rectangle(rectangle1: &Rectangle2D, rectangle2: &Rectangle2D, contact: &mut Contact2D) {
    face_contact(
        rectangle1.max.x - rectangle2.min.x,
        rectangle2.max.x - rectangle1.min.x,
        rectangle1.max.y - rectangle2.min.y,
        rectangle2.max.y - rectangle1.min.y,
        contact,
    );
}

fn ordered(a: &Shape2D, b: &Shape2D, contact: &mut Contact2D) -> bool {
    use Shape2D::*;

    match (a, b) {
        (Point(p), Plane(plane)) => point_in_plane(*p, plane, contact),
        (Point(p), Halfspace(halfspace)) => point_in_halfspace(*p, halfspace, contact),
        (Point(p), Circle(circle)) => point_in_circle(*p, circle, contact),
        (Point(p), Rectangle(rectangle)) => point_in_rectangle(*p, rectangle, contact),
        (Circle(circle), Plane(plane)) => circle_in_plane(circle, plane, contact),
        (Circle(circle), Halfspace(halfspace)) => circle_in_halfspace(circle, halfspace, contact),
        (Circle(c1), Circle(c2)) => circle_in_circle(c1, c2, contact),
        (Circle(circle), Rectangle(rectangle)) => circle_in_rectangle(circle, rectangle, contact),
        (Rectangle(rectangle), Plane(plane)) => rectangle_in_plane(rectangle, plane, contact),
        (Rectangle(rectangle), Halfspace(halfspace)) => rectangle_in_halfspace(rectangle, halfspace, contact),
        (Rectangle(r1), Rectangle(r2)) => rectangle_in_rectangle(r1, r2, contact),
        _ => return false,
    }
    true
}

/// Computes the contact for any supported pair, normal pointing towards `a`.
///
/// Pairs only implemented the other way round (a plane against a circle,
/// say) are computed reversed and flipped. Returns `false` and leaves the
/// contact untouched for pairs with no contact routine, such as segments.
pub fn shapes(a: &Shape2D, b: &Shape2D, contact: &mut Contact2D) -> bool {
    if ordered(a, b, contact) {
        return true;
    }
    if ordered(b, a, contact) {
        contact.flip();
        return true;
    }
    false
}
