//! # Earrings
//!
//! The pattern is generated at reduced scale (`size × 0.6`,
//! `thickness × 0.8`) and an ear wire is attached above it: either a hook
//! bent along a partial circle or a straight stud post.

use super::{generate_pattern_into, JewelryStructure, WireType};
use crate::error::MeshError;
use crate::mesh::{MeshBuilder, Provenance};
use crate::patterns::PatternKind;
use crate::point::{fraction_of_turn, Point3D};
use config::constants::{HOOK_SEGMENTS, WIRE_SIDES};
use glam::DVec3;
use jewelry_params::GeometryParameters;
use std::f64::consts::{FRAC_PI_2, PI};
use tracing::debug;

/// Size factor applied to the pattern.
pub const EARRING_SIZE_FACTOR: f64 = 0.6;
/// Thickness factor applied to the pattern.
pub const EARRING_THICKNESS_FACTOR: f64 = 0.8;

/// Fraction of a half turn swept by the hook.
const HOOK_SWEEP: f64 = 1.2;

/// Where the ear wire meets the (already scaled) pattern.
pub fn attachment_point(scaled: &GeometryParameters) -> Point3D {
    DVec3::new(0.0, scaled.size * 0.9, scaled.thickness / 2.0)
}

pub(crate) fn compose(
    pattern: PatternKind,
    params: &GeometryParameters,
    wire_type: WireType,
    builder: &mut MeshBuilder,
) -> Result<JewelryStructure, MeshError> {
    let scaled = params.scaled(EARRING_SIZE_FACTOR, EARRING_THICKNESS_FACTOR);
    generate_pattern_into(pattern, &scaled, builder)?;

    let attachment = attachment_point(&scaled);
    builder.set_provenance(Provenance::Structure);
    let start = builder.vertex_count();
    match wire_type {
        WireType::Hook => add_hook(builder, attachment, &scaled),
        WireType::Stud => add_stud(builder, attachment, &scaled),
    }
    debug!(
        wire = ?wire_type,
        vertices = builder.vertex_count() - start,
        "Added ear wire"
    );

    Ok(JewelryStructure::Earrings {
        ear_wire_attachment: attachment,
        wire_type,
    })
}

/// Sweeps a round wire along a partial circle above the attachment point.
fn add_hook(builder: &mut MeshBuilder, attachment: Point3D, scaled: &GeometryParameters) {
    let hook_radius = scaled.size * 0.3;
    let wire_radius = scaled.thickness * 0.3;
    let pivot = attachment + DVec3::new(0.0, hook_radius, 0.0);

    let rings: Vec<Vec<u32>> = (0..=HOOK_SEGMENTS)
        .map(|i| {
            let angle = f64::from(i) / f64::from(HOOK_SEGMENTS) * PI * HOOK_SWEEP + FRAC_PI_2;
            let radial = DVec3::new(angle.cos(), angle.sin(), 0.0);
            let center = pivot + radial * hook_radius;

            // Cross-section spans the radial direction and +z, normal to the path.
            (0..WIRE_SIDES)
                .map(|j| {
                    let (sin_a, cos_a) = fraction_of_turn(j, WIRE_SIDES).sin_cos();
                    builder.add_vertex(center + (DVec3::Z * cos_a + radial * sin_a) * wire_radius)
                })
                .collect()
        })
        .collect();

    let sides = WIRE_SIDES as usize;
    for pair in rings.windows(2) {
        let (ring, next) = (&pair[0], &pair[1]);
        for j in 0..sides {
            let k = (j + 1) % sides;
            builder.add_quad(ring[j], ring[k], next[k], next[j]);
        }
    }
}

/// Adds a capped hexagonal post rising along +y from the attachment point.
fn add_stud(builder: &mut MeshBuilder, attachment: Point3D, scaled: &GeometryParameters) {
    let radius = scaled.thickness * 0.2;
    let height = scaled.thickness * 2.0;
    let rise = DVec3::new(0.0, height, 0.0);

    let (bottom, top): (Vec<u32>, Vec<u32>) = (0..WIRE_SIDES)
        .map(|j| {
            let (sin_a, cos_a) = fraction_of_turn(j, WIRE_SIDES).sin_cos();
            let p = attachment + (DVec3::Z * cos_a + DVec3::X * sin_a) * radius;
            (builder.add_vertex(p), builder.add_vertex(p + rise))
        })
        .unzip();

    let sides = bottom.len();
    for j in 0..sides {
        let k = (j + 1) % sides;
        builder.add_quad(bottom[j], bottom[k], top[k], top[j]);
    }

    let bottom_center = builder.add_vertex(attachment);
    let top_center = builder.add_vertex(attachment + rise);
    let reversed: Vec<u32> = bottom.iter().rev().copied().collect();
    builder.add_fan(bottom_center, &reversed);
    builder.add_fan(top_center, &top);
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn earring(wire_type: WireType) -> crate::mesh::PatternResult {
        let mut builder = MeshBuilder::new();
        compose(
            PatternKind::FlowerOfLife,
            &GeometryParameters::default(),
            wire_type,
            &mut builder,
        )
        .unwrap();
        builder.finish()
    }

    #[test]
    fn test_attachment_uses_scaled_params() {
        let scaled = GeometryParameters::default().scaled(0.6, 0.8);
        let p = attachment_point(&scaled);
        assert_relative_eq!(p.y, 0.54, epsilon = 1e-12);
        assert_relative_eq!(p.z, 0.08, epsilon = 1e-12);
    }

    #[test]
    fn test_hook_counts() {
        let mesh = earring(WireType::Hook);
        let rings = (HOOK_SEGMENTS + 1) as usize;
        let sides = WIRE_SIDES as usize;
        assert_eq!(mesh.count_with_provenance(Provenance::Structure), rings * sides);
        assert!(mesh.validate());
    }

    #[test]
    fn test_hook_wire_radius() {
        let mesh = earring(WireType::Hook);
        let scaled = GeometryParameters::default().scaled(0.6, 0.8);
        let hook_radius = scaled.size * 0.3;
        // First ring is centered straight above the pivot.
        let center = attachment_point(&scaled) + DVec3::new(0.0, 2.0 * hook_radius, 0.0);
        let first_ring = &mesh.vertices[mesh.vertex_count() - (HOOK_SEGMENTS as usize + 1) * 6..];
        for v in first_ring.iter().take(6) {
            assert_relative_eq!(v.distance(center), scaled.thickness * 0.3, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_stud_is_capped_post() {
        let mesh = earring(WireType::Stud);
        assert_eq!(mesh.count_with_provenance(Provenance::Structure), 14);
        assert!(mesh.validate());

        let scaled = GeometryParameters::default().scaled(0.6, 0.8);
        let base = attachment_point(&scaled);
        let top = mesh.vertices[mesh.vertex_count() - 1];
        assert_relative_eq!(top.y - base.y, scaled.thickness * 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_stud_cap_faces_up() {
        let mesh = earring(WireType::Stud);
        let [a, b, c] = mesh.triangle(mesh.faces[mesh.face_count() - 1]);
        assert!((b - a).cross(c - a).y > 0.0);
    }
}
