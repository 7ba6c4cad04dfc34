//! # Geometry Primitives
//!
//! Points and the handful of planar transforms the generators are built from.
//! Coordinates are millimeters; angles are radians.

use glam::{DVec2, DVec3};

/// A position in model space.
pub type Point3D = DVec3;

/// A position in the XY plane.
pub type Point2D = DVec2;

/// Converts polar coordinates to a point in the XY plane.
///
/// # Example
///
/// ```rust
/// use jewelry_mesh::point::polar_to_cartesian;
///
/// let p = polar_to_cartesian(2.0, std::f64::consts::FRAC_PI_2);
/// assert!(p.x.abs() < 1e-12);
/// assert!((p.y - 2.0).abs() < 1e-12);
/// ```
#[inline]
pub fn polar_to_cartesian(radius: f64, angle: f64) -> Point2D {
    DVec2::new(radius * angle.cos(), radius * angle.sin())
}

/// Rotates a planar point counter-clockwise about the origin.
#[inline]
pub fn rotate_point_2d(point: Point2D, angle: f64) -> Point2D {
    DVec2::from_angle(angle).rotate(point)
}

/// Lifts a planar point to the given height.
#[inline]
pub fn extrude_to_z(point: Point2D, z: f64) -> Point3D {
    point.extend(z)
}

/// Returns `count` points evenly spaced on a circle, starting at angle 0.
pub fn circle_points(center: Point2D, radius: f64, count: u32) -> Vec<Point2D> {
    (0..count)
        .map(|i| center + polar_to_cartesian(radius, fraction_of_turn(i, count)))
        .collect()
}

/// Angle of step `i` out of `count` around a full turn.
#[inline]
pub fn fraction_of_turn(i: u32, count: u32) -> f64 {
    f64::from(i) / f64::from(count) * std::f64::consts::TAU
}
