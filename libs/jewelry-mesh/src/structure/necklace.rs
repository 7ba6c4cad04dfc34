//! # Necklace
//!
//! Full-scale pattern with two chain loops above it, spaced by the golden
//! ratio.

use super::{generate_pattern_into, JewelryStructure};
use crate::error::MeshError;
use crate::mesh::{MeshBuilder, Provenance};
use crate::patterns::PatternKind;
use crate::point::{circle_points, extrude_to_z, Point3D};
use config::constants::{CHAIN_LOOP_SEGMENTS, PHI};
use glam::DVec3;
use jewelry_params::GeometryParameters;
use tracing::debug;

/// Chain attachment points, left then right.
pub fn attachment_points(params: &GeometryParameters) -> [Point3D; 2] {
    let spacing = params.size * PHI * 0.3;
    let height = params.size * 0.8;
    let z = params.thickness / 2.0;
    [
        DVec3::new(-spacing, height, z),
        DVec3::new(spacing, height, z),
    ]
}

pub(crate) fn compose(
    pattern: PatternKind,
    params: &GeometryParameters,
    chain_length: f64,
    builder: &mut MeshBuilder,
) -> Result<JewelryStructure, MeshError> {
    generate_pattern_into(pattern, params, builder)?;

    let attachments = attachment_points(params);
    builder.set_provenance(Provenance::Structure);
    for &point in &attachments {
        add_chain_loop(builder, point, params.thickness);
    }
    debug!(loops = attachments.len(), chain_length, "Added chain loops");

    Ok(JewelryStructure::Necklace {
        chain_attachments: attachments.to_vec(),
        chain_length,
    })
}

/// Appends a short open cylinder standing on `center`.
fn add_chain_loop(builder: &mut MeshBuilder, center: Point3D, thickness: f64) {
    let radius = thickness * 0.5;
    let height = thickness * 0.2;

    let rims: Vec<(u32, u32)> = circle_points(center.truncate(), radius, CHAIN_LOOP_SEGMENTS)
        .into_iter()
        .map(|p| {
            (
                builder.add_vertex(extrude_to_z(p, center.z)),
                builder.add_vertex(extrude_to_z(p, center.z + height)),
            )
        })
        .collect();

    for (i, &(bottom, top)) in rims.iter().enumerate() {
        let (next_bottom, next_top) = rims[(i + 1) % rims.len()];
        builder.add_quad(bottom, next_bottom, next_top, top);
    }
}
