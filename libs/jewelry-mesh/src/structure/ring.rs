//! # Ring
//!
//! A flat annular band sized from a US finger size, with the pattern scaled
//! to the band width and seated on top of it.
//!
//! ```text
//!            pattern (lifted, pushed out of the finger hole)
//!   ┌──────────────────────────────┐  z = bandHeight + thickness/2
//!   │                              │
//!   ├────────┐            ┌────────┤  z = bandHeight
//!   │  band  │   finger   │  band  │
//!   └────────┘            └────────┘  z = 0
//!   outer  inner        inner  outer
//! ```

use super::{generate_pattern_into, JewelryStructure, RingBand};
use crate::error::MeshError;
use crate::mesh::{MeshBuilder, Provenance};
use crate::patterns::PatternKind;
use crate::point::{circle_points, extrude_to_z};
use config::constants::{
    MIN_REPROJECTION_DISTANCE, RING_BAND_SEGMENTS, RING_BASE_CIRCUMFERENCE_MM,
    RING_SIZE_INCREMENT_MM,
};
use glam::DVec2;
use jewelry_params::GeometryParameters;
use std::f64::consts::PI;
use tracing::debug;

/// Converts a US ring size to an inner diameter in millimeters.
///
/// # Example
///
/// ```rust
/// use jewelry_mesh::structure::ring::ring_diameter;
///
/// assert!((ring_diameter(7.0) - 19.7734).abs() < 1e-4);
/// ```
pub fn ring_diameter(size: f64) -> f64 {
    (RING_BASE_CIRCUMFERENCE_MM + size * RING_SIZE_INCREMENT_MM) / PI
}

/// Band dimensions for the given parameters and finger size.
pub fn band_dimensions(params: &GeometryParameters, finger_size: f64) -> RingBand {
    let inner_radius = ring_diameter(finger_size) / 2.0;
    RingBand {
        inner_radius,
        outer_radius: inner_radius + params.size * 8.0,
        height: params.thickness * 2.0,
    }
}

pub(crate) fn compose(
    pattern: PatternKind,
    params: &GeometryParameters,
    finger_size: f64,
    builder: &mut MeshBuilder,
) -> Result<JewelryStructure, MeshError> {
    let band = band_dimensions(params, finger_size);
    let band_width = band.width();

    let pattern_params = params.scaled(0.8 * band_width / 10.0, 1.0);
    generate_pattern_into(pattern, &pattern_params, builder)?;

    seat_pattern(builder, &band, band.height + params.thickness * 0.5);

    builder.set_provenance(Provenance::Structure);
    add_band(builder, &band);
    debug!(
        finger_size,
        inner_radius = band.inner_radius,
        outer_radius = band.outer_radius,
        "Added ring band"
    );

    Ok(JewelryStructure::Ring { ring_band: band })
}

/// Lifts every pattern vertex by `lift` and pushes vertices inside the finger
/// hole out onto the middle of the band.
fn seat_pattern(builder: &mut MeshBuilder, band: &RingBand, lift: f64) {
    let target = band.inner_radius + band.width() * 0.5;
    for vertex in builder.vertices_with_provenance_mut(Provenance::Pattern) {
        vertex.z += lift;
        let distance = vertex.truncate().length();
        if distance < band.inner_radius {
            let scale = target / distance.max(MIN_REPROJECTION_DISTANCE);
            vertex.x *= scale;
            vertex.y *= scale;
        }
    }
}

/// Appends the band: inner wall facing the finger, outer wall, top and
/// bottom annuli. Eight triangles per segment.
fn add_band(builder: &mut MeshBuilder, band: &RingBand) {
    let mut ring = |radius: f64| -> Vec<(u32, u32)> {
        circle_points(DVec2::ZERO, radius, RING_BAND_SEGMENTS)
            .into_iter()
            .map(|p| {
                (
                    builder.add_vertex(extrude_to_z(p, 0.0)),
                    builder.add_vertex(extrude_to_z(p, band.height)),
                )
            })
            .collect()
    };
    let inner = ring(band.inner_radius);
    let outer = ring(band.outer_radius);

    let n = inner.len();
    for i in 0..n {
        let j = (i + 1) % n;
        let (ib, it) = inner[i];
        let (nib, nit) = inner[j];
        let (ob, ot) = outer[i];
        let (nob, not) = outer[j];

        builder.add_quad(ib, it, nit, nib);
        builder.add_quad(ob, nob, not, ot);
        builder.add_quad(it, ot, not, nit);
        builder.add_quad(ib, nib, nob, ob);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn ring_mesh(pattern: PatternKind, params: &GeometryParameters) -> crate::mesh::PatternResult {
        let mut builder = MeshBuilder::new();
        compose(pattern, params, 7.0, &mut builder).unwrap();
        builder.finish()
    }

    #[test]
    fn test_ring_diameter_formula() {
        assert_relative_eq!(ring_diameter(0.0), 44.2 / PI);
        assert_relative_eq!(ring_diameter(7.0), (44.2 + 17.92) / PI);
        assert!(ring_diameter(8.0) > ring_diameter(7.5));
    }

    #[test]
    fn test_band_width_is_eight_sizes() {
        let params = GeometryParameters {
            size: 1.5,
            ..GeometryParameters::default()
        };
        let band = band_dimensions(&params, 9.0);
        assert!(band.inner_radius > 0.0);
        assert!(band.outer_radius > band.inner_radius);
        assert_relative_eq!(band.width(), 12.0, epsilon = 1e-12);
        assert_relative_eq!(band.height, 0.4, epsilon = 1e-12);
    }

    #[test]
    fn test_band_counts() {
        let mesh = ring_mesh(PatternKind::Islamic, &GeometryParameters::default());
        let segments = RING_BAND_SEGMENTS as usize;
        assert_eq!(mesh.count_with_provenance(Provenance::Structure), segments * 4);
        let pattern_faces = 4 * GeometryParameters::default().symmetry as usize * 2;
        assert_eq!(mesh.face_count(), pattern_faces + segments * 8);
        assert!(mesh.validate());
    }

    #[test]
    fn test_seat_pattern_pushes_out_of_hole() {
        use glam::DVec3;

        let band = band_dimensions(&GeometryParameters::default(), 7.0);
        let target = band.inner_radius + band.width() * 0.5;

        let mut builder = MeshBuilder::new();
        builder.add_vertex(DVec3::ZERO);
        builder.add_vertex(DVec3::new(0.05, 0.0, 0.0));
        builder.add_vertex(DVec3::new(0.0, 1.0, 0.1));
        builder.add_vertex(DVec3::new(20.0, 0.0, 0.0));
        builder.set_provenance(Provenance::Structure);
        builder.add_vertex(DVec3::new(1.0, 0.0, 0.0));

        seat_pattern(&mut builder, &band, 0.5);

        // The origin has no direction to push along.
        assert_eq!(builder.vertex(0), DVec3::new(0.0, 0.0, 0.5));
        // Near the origin the divisor is clamped.
        assert_relative_eq!(builder.vertex(1).x, target * 0.5, epsilon = 1e-12);
        assert_relative_eq!(builder.vertex(2).y, target, epsilon = 1e-12);
        assert_relative_eq!(builder.vertex(2).z, 0.6, epsilon = 1e-12);
        // Already outside the finger hole.
        assert_eq!(builder.vertex(3), DVec3::new(20.0, 0.0, 0.5));
        // Structure vertices are never moved.
        assert_eq!(builder.vertex(4), DVec3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_pattern_lifted_above_band() {
        let params = GeometryParameters::default();
        let mesh = ring_mesh(PatternKind::Mandala, &params);
        let band = band_dimensions(&params, 7.0);
        let lift = band.height + params.thickness * 0.5;

        for (v, tag) in mesh.vertices.iter().zip(&mesh.provenance) {
            if *tag == Provenance::Pattern {
                assert!(v.z >= lift - 1e-12);
            }
        }
    }

    #[test]
    fn test_band_vertices_untouched() {
        let params = GeometryParameters::default();
        let mesh = ring_mesh(PatternKind::Celtic, &params);
        let band = band_dimensions(&params, 7.0);

        let structure: Vec<_> = mesh
            .vertices
            .iter()
            .zip(&mesh.provenance)
            .filter(|(_, tag)| **tag == Provenance::Structure)
            .map(|(v, _)| *v)
            .collect();
        assert!(structure.iter().all(|v| v.z == 0.0 || v.z == band.height));
        assert_relative_eq!(structure[0].truncate().length(), band.inner_radius, epsilon = 1e-9);
    }

    #[test]
    fn test_top_faces_up() {
        let mesh = ring_mesh(PatternKind::Islamic, &GeometryParameters::default());
        // Last segment: inner wall, outer wall, top, bottom (two triangles each).
        let top = mesh.faces[mesh.face_count() - 4];
        let [a, b, c] = mesh.triangle(top);
        assert!((b - a).cross(c - a).z > 0.0);
        let bottom = mesh.faces[mesh.face_count() - 2];
        let [a, b, c] = mesh.triangle(bottom);
        assert!((b - a).cross(c - a).z < 0.0);
    }
}
