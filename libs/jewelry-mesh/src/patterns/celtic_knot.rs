//! # Celtic Knot
//!
//! A closed tube swept along a looping curve:
//!
//! ```text
//! x = R·cos(t)·(1 + 0.3·cos(L·t))
//! y = R·sin(t)·(1 + 0.3·cos(L·t))
//! z = 0.2·R·sin(L·t)
//! ```
//!
//! The tube cross-section lies in the plane normal to the curve tangent.

use crate::mesh::MeshBuilder;
use crate::point::{fraction_of_turn, Point3D};
use config::constants::{KNOT_SEGMENTS_PER_LOOP, KNOT_TUBE_SIDES};
use glam::DVec3;
use jewelry_params::GeometryParameters;

/// Radial modulation depth of the loops.
const LOOP_DEPTH: f64 = 0.3;
/// Vertical weave height as a fraction of the knot radius.
const WEAVE_HEIGHT: f64 = 0.2;

/// Number of loops, `2..=6`.
pub fn loop_count(complexity: f64) -> u32 {
    (complexity * 4.0).floor() as u32 + 2
}

/// Point on the knot curve and its (unnormalized) tangent.
pub fn knot_frame(t: f64, radius: f64, loops: u32) -> (Point3D, DVec3) {
    let l = f64::from(loops);
    let (sin_t, cos_t) = t.sin_cos();
    let (sin_lt, cos_lt) = (l * t).sin_cos();

    let modulation = 1.0 + LOOP_DEPTH * cos_lt;
    let d_modulation = -LOOP_DEPTH * l * sin_lt;

    let point = DVec3::new(
        radius * cos_t * modulation,
        radius * sin_t * modulation,
        radius * WEAVE_HEIGHT * sin_lt,
    );
    let tangent = DVec3::new(
        radius * (cos_t * d_modulation - sin_t * modulation),
        radius * (sin_t * d_modulation + cos_t * modulation),
        radius * WEAVE_HEIGHT * l * cos_lt,
    );
    (point, tangent)
}

/// Appends a Celtic knot to `builder`.
pub fn build(params: &GeometryParameters, builder: &mut MeshBuilder) {
    let loops = loop_count(params.complexity);
    let segments = loops * KNOT_SEGMENTS_PER_LOOP;
    let knot_radius = params.size * 0.7;
    let tube_radius = params.thickness * 0.8;
    let lift = DVec3::new(0.0, 0.0, params.thickness);

    let rings: Vec<Vec<u32>> = (0..segments)
        .map(|i| {
            let (point, tangent) = knot_frame(fraction_of_turn(i, segments), knot_radius, loops);
            // The horizontal speed never drops below 0.7·R, so `side` is never zero.
            let side = DVec3::Z.cross(tangent).normalize();
            let up = tangent.normalize().cross(side);

            (0..KNOT_TUBE_SIDES)
                .map(|j| {
                    let (sin_a, cos_a) = fraction_of_turn(j, KNOT_TUBE_SIDES).sin_cos();
                    let offset = (side * cos_a + up * sin_a) * tube_radius;
                    builder.add_vertex(point + offset + lift)
                })
                .collect()
        })
        .collect();

    let sides = KNOT_TUBE_SIDES as usize;
    for (i, ring) in rings.iter().enumerate() {
        let next = &rings[(i + 1) % rings.len()];
        for j in 0..sides {
            let k = (j + 1) % sides;
            builder.add_quad(ring[j], ring[k], next[k], next[j]);
        }
    }
}
