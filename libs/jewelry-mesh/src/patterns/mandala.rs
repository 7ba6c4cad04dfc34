//! # Mandala
//!
//! A central disk surrounded by concentric layers of petals. Layer `k` carries
//! `symmetry * k` petals, each displaced along its ring by a sine wave of
//! period `symmetry`. Petal radii follow the golden ratio.

use super::add_prism;
use crate::mesh::MeshBuilder;
use crate::point::{circle_points, extrude_to_z, fraction_of_turn, polar_to_cartesian};
use config::constants::PHI;
use glam::DVec2;
use jewelry_params::GeometryParameters;

/// Amplitude of the petal angle wave, in radians.
const WAVE_AMPLITUDE: f64 = 0.3;

/// Number of petal layers, `1..=6` over the complexity range.
pub fn layer_count(complexity: f64) -> u32 {
    (complexity * 5.0).floor() as u32 + 1
}

/// Angle of petal `i` of `count` after the wave displacement.
pub fn petal_angle(i: u32, count: u32, symmetry: u32) -> f64 {
    let angle = fraction_of_turn(i, count);
    angle + (angle * f64::from(symmetry)).sin() * WAVE_AMPLITUDE
}

/// Appends a mandala to `builder`.
pub fn build(params: &GeometryParameters, builder: &mut MeshBuilder) {
    let symmetry = params.symmetry;
    let thickness = params.thickness;

    let center_radius = params.size * 0.1;
    add_prism(
        builder,
        &circle_points(DVec2::ZERO, center_radius, symmetry),
        Some(DVec2::ZERO),
        thickness,
    );

    let layers = layer_count(params.complexity);
    for layer in 1..=layers {
        let layer_radius = params.size * (f64::from(layer) / f64::from(layers)) * 0.8;
        let inner_radius = layer_radius * (1.0 - 1.0 / PHI);
        let petal_count = symmetry * layer;

        // [inner bottom, inner top, outer bottom, outer top] per petal
        let petals: Vec<[u32; 4]> = (0..petal_count)
            .map(|i| {
                let angle = petal_angle(i, petal_count, symmetry);
                let inner = polar_to_cartesian(inner_radius, angle);
                let outer = polar_to_cartesian(layer_radius, angle);
                [
                    builder.add_vertex(extrude_to_z(inner, 0.0)),
                    builder.add_vertex(extrude_to_z(inner, thickness)),
                    builder.add_vertex(extrude_to_z(outer, 0.0)),
                    builder.add_vertex(extrude_to_z(outer, thickness)),
                ]
            })
            .collect();

        for (i, &[ib, it, ob, ot]) in petals.iter().enumerate() {
            let [nib, nit, nob, not] = petals[(i + 1) % petals.len()];

            // Top fan: top face and outer wall.
            builder.add_quad(it, ot, not, nit);
            builder.add_quad(ob, nob, not, ot);

            // Mirrored bottom fan: bottom face and inner wall.
            builder.add_quad(ib, nib, nob, ob);
            builder.add_quad(ib, it, nit, nib);
        }
    }
}
