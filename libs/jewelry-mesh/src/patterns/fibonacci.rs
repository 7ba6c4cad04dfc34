//! # Fibonacci Spiral
//!
//! A tapering ribbon along a spiral whose radius grows as `t^(1/φ)`.

use crate::mesh::MeshBuilder;
use crate::point::{extrude_to_z, polar_to_cartesian, Point2D};
use config::constants::{PHI, SPIRAL_SEGMENTS_PER_TURN};
use jewelry_params::GeometryParameters;
use std::f64::consts::TAU;

/// Ribbon width lost between the start and the end of the spiral.
const TAPER: f64 = 0.3;

/// Point on the spiral centerline at `t ∈ [0, 1]`.
pub fn spiral_point(t: f64, max_radius: f64, turns: u32) -> Point2D {
    let angle = t * f64::from(turns) * TAU;
    polar_to_cartesian(max_radius * t.powf(1.0 / PHI), angle)
}

/// Appends a Fibonacci spiral to `builder`.
pub fn build(params: &GeometryParameters, builder: &mut MeshBuilder) {
    let turns = params.spiral_turns;
    let segments = turns * SPIRAL_SEGMENTS_PER_TURN;
    let max_radius = params.size * 0.8;
    let thickness = params.thickness;

    let centerline: Vec<Point2D> = (0..=segments)
        .map(|i| spiral_point(f64::from(i) / f64::from(segments), max_radius, turns))
        .collect();

    // [left bottom, right bottom, left top, right top] per step
    let steps: Vec<[u32; 4]> = centerline
        .iter()
        .enumerate()
        .map(|(i, &point)| {
            let t = i as f64 / f64::from(segments);
            let before = centerline[i.saturating_sub(1)];
            let after = centerline[(i + 1).min(centerline.len() - 1)];
            let left = (after - before).perp().normalize_or_zero();
            let offset = left * (thickness * (1.0 - t * TAPER) / 2.0);

            [
                builder.add_vertex(extrude_to_z(point + offset, 0.0)),
                builder.add_vertex(extrude_to_z(point - offset, 0.0)),
                builder.add_vertex(extrude_to_z(point + offset, thickness)),
                builder.add_vertex(extrude_to_z(point - offset, thickness)),
            ]
        })
        .collect();

    for pair in steps.windows(2) {
        let [lb, rb, lt, rt] = pair[0];
        let [nlb, nrb, nlt, nrt] = pair[1];

        builder.add_quad(rt, nrt, nlt, lt);
        builder.add_quad(rb, lb, nlb, nrb);
        builder.add_quad(lb, lt, nlt, nlb);
        builder.add_quad(rb, nrb, nrt, rt);
    }

    if let (Some(&[lb, rb, lt, rt]), Some(&[elb, erb, elt, ert])) = (steps.first(), steps.last()) {
        builder.add_quad(rb, rt, lt, lb);
        builder.add_quad(elb, elt, ert, erb);
    }
}
