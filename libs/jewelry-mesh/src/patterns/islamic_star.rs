//! # Islamic Star
//!
//! A `symmetry`-pointed star: rim vertices alternate between tips on the outer
//! radius and valleys on the inner radius, capped by fans from the center.

use super::add_prism;
use crate::mesh::MeshBuilder;
use crate::point::{fraction_of_turn, polar_to_cartesian, Point2D};
use glam::DVec2;
use jewelry_params::GeometryParameters;

/// Valley radius as a fraction of the tip radius.
const VALLEY_RATIO: f64 = 0.6;

/// Star outline, counter-clockwise, starting on a tip.
pub fn star_outline(points: u32, outer_radius: f64) -> Vec<Point2D> {
    let inner_radius = outer_radius * VALLEY_RATIO;
    let count = points * 2;
    (0..count)
        .map(|i| {
            let radius = if i % 2 == 0 { outer_radius } else { inner_radius };
            polar_to_cartesian(radius, fraction_of_turn(i, count))
        })
        .collect()
}

/// Appends an Islamic star to `builder`.
pub fn build(params: &GeometryParameters, builder: &mut MeshBuilder) {
    let outline = star_outline(params.symmetry, params.size * 0.8);
    add_prism(builder, &outline, Some(DVec2::ZERO), params.thickness);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outline_alternates() {
        let outline = star_outline(5, 1.0);
        assert_eq!(outline.len(), 10);
        assert!((outline[0].length() - 1.0).abs() < 1e-12);
        assert!((outline[1].length() - 0.6).abs() < 1e-12);
    }

    #[test]
    fn test_counts() {
        let params = GeometryParameters {
            symmetry: 3,
            ..GeometryParameters::default()
        };
        let mut builder = MeshBuilder::new();
        build(&params, &mut builder);
        let mesh = builder.finish();
        // 6 rim pairs + centers; per rim vertex: 2 wall + bottom + top
        assert_eq!(mesh.vertex_count(), 14);
        assert_eq!(mesh.face_count(), 24);
        assert!(mesh.validate());
    }
}
