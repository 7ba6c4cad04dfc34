//! # Patterns
//!
//! The five sacred-geometry generators. Each one appends its geometry to a
//! [`MeshBuilder`]; [`generate_pattern`] wraps that in a fresh builder.
//!
//! Generators are total over the validated parameter ranges: every call
//! returns at least one vertex and only valid, distinct face indices.

pub mod celtic_knot;
pub mod fibonacci;
pub mod flower_of_life;
pub mod islamic_star;
pub mod mandala;

use crate::mesh::{MeshBuilder, PatternResult};
use crate::point::{extrude_to_z, Point2D};
use jewelry_params::GeometryParameters;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::warn;

/// Signature shared by all pattern generators.
pub type PatternFn = fn(&GeometryParameters, &mut MeshBuilder);

/// The known pattern families.
///
/// Unknown names resolve to [`PatternKind::Mandala`].
///
/// # Example
///
/// ```rust
/// use jewelry_mesh::patterns::PatternKind;
///
/// assert_eq!(PatternKind::from_name("flower-of-life"), PatternKind::FlowerOfLife);
/// assert_eq!(PatternKind::from_name("paisley"), PatternKind::Mandala);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PatternKind {
    #[default]
    Mandala,
    Fibonacci,
    FlowerOfLife,
    Islamic,
    Celtic,
}

/// Dispatch table from pattern kind to generator.
static GENERATORS: [(PatternKind, &str, PatternFn); 5] = [
    (PatternKind::Mandala, "mandala", mandala::build),
    (PatternKind::Fibonacci, "fibonacci", fibonacci::build),
    (PatternKind::FlowerOfLife, "flower-of-life", flower_of_life::build),
    (PatternKind::Islamic, "islamic", islamic_star::build),
    (PatternKind::Celtic, "celtic", celtic_knot::build),
];

impl PatternKind {
    /// Every pattern kind, in dispatch order.
    pub const ALL: [PatternKind; 5] = [
        PatternKind::Mandala,
        PatternKind::Fibonacci,
        PatternKind::FlowerOfLife,
        PatternKind::Islamic,
        PatternKind::Celtic,
    ];

    /// Resolves a pattern name, falling back to Mandala for unknown names.
    pub fn from_name(name: &str) -> Self {
        GENERATORS
            .iter()
            .find(|(_, known, _)| *known == name)
            .map(|(kind, _, _)| *kind)
            .unwrap_or_else(|| {
                warn!(pattern = name, "unknown pattern type, falling back to mandala");
                PatternKind::Mandala
            })
    }

    /// Wire name of the pattern.
    pub fn name(self) -> &'static str {
        self.entry().1
    }

    /// The generator for this pattern.
    pub fn generator(self) -> PatternFn {
        self.entry().2
    }

    fn entry(self) -> &'static (PatternKind, &'static str, PatternFn) {
        // Every kind has exactly one row; the table is indexed by discriminant.
        &GENERATORS[self as usize]
    }
}

impl From<&str> for PatternKind {
    fn from(name: &str) -> Self {
        Self::from_name(name)
    }
}

impl fmt::Display for PatternKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Generates a pattern into a fresh buffer.
///
/// # Example
///
/// ```rust
/// use jewelry_mesh::patterns::{generate_pattern, PatternKind};
/// use jewelry_params::GeometryParameters;
///
/// let mesh = generate_pattern(PatternKind::Islamic, &GeometryParameters::default());
/// assert!(mesh.vertex_count() > 0);
/// assert!(mesh.validate());
/// ```
pub fn generate_pattern(kind: PatternKind, params: &GeometryParameters) -> PatternResult {
    let mut builder = MeshBuilder::new();
    kind.generator()(params, &mut builder);
    builder.finish()
}

/// Appends a prism over a planar rim from `z = 0` to `z = thickness`.
///
/// The rim must be counter-clockwise and star-shaped about `center`; when no
/// center is given the caps fan from the first rim point, so the rim must be
/// convex. Rim vertices are interleaved bottom/top.
pub(crate) fn add_prism(
    builder: &mut MeshBuilder,
    rim: &[Point2D],
    center: Option<Point2D>,
    thickness: f64,
) {
    let (bottom, top): (Vec<u32>, Vec<u32>) = rim
        .iter()
        .map(|&p| {
            (
                builder.add_vertex(extrude_to_z(p, 0.0)),
                builder.add_vertex(extrude_to_z(p, thickness)),
            )
        })
        .unzip();

    let n = rim.len();
    for i in 0..n {
        let j = (i + 1) % n;
        builder.add_quad(bottom[i], bottom[j], top[j], top[i]);
    }

    match center {
        Some(c) => {
            let center_bottom = builder.add_vertex(extrude_to_z(c, 0.0));
            let center_top = builder.add_vertex(extrude_to_z(c, thickness));
            for i in 0..n {
                let j = (i + 1) % n;
                builder.add_triangle(center_bottom, bottom[j], bottom[i]);
                builder.add_triangle(center_top, top[i], top[j]);
            }
        }
        None => {
            for i in 1..n.saturating_sub(1) {
                builder.add_triangle(bottom[0], bottom[i + 1], bottom[i]);
                builder.add_triangle(top[0], top[i], top[i + 1]);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point::circle_points;
    use glam::DVec2;

    #[test]
    fn test_table_matches_discriminants() {
        for (index, (kind, _, _)) in GENERATORS.iter().enumerate() {
            assert_eq!(*kind as usize, index);
            assert_eq!(PatternKind::ALL[index], *kind);
        }
    }

    #[test]
    fn test_names_round_trip() {
        for kind in PatternKind::ALL {
            assert_eq!(PatternKind::from_name(kind.name()), kind);
            assert_eq!(kind.to_string(), kind.name());
        }
    }

    #[test]
    fn test_unknown_falls_back_to_mandala() {
        assert_eq!(PatternKind::from("spirograph"), PatternKind::Mandala);
        assert_eq!(PatternKind::from(""), PatternKind::Mandala);
    }

    #[test]
    fn test_prism_with_center() {
        let mut builder = MeshBuilder::new();
        add_prism(&mut builder, &circle_points(DVec2::ZERO, 1.0, 6), Some(DVec2::ZERO), 0.2);
        let mesh = builder.finish();
        // 6 rim pairs + 2 centers; 6 wall quads + 6 bottom + 6 top
        assert_eq!(mesh.vertex_count(), 14);
        assert_eq!(mesh.face_count(), 24);
        assert!(mesh.validate());
    }

    #[test]
    fn test_prism_without_center() {
        let mut builder = MeshBuilder::new();
        add_prism(&mut builder, &circle_points(DVec2::ZERO, 1.0, 12), None, 0.2);
        let mesh = builder.finish();
        // 12 wall quads + 10 bottom + 10 top
        assert_eq!(mesh.vertex_count(), 24);
        assert_eq!(mesh.face_count(), 44);
        assert!(mesh.validate());
    }

    #[test]
    fn test_prism_caps_face_outward() {
        let mut builder = MeshBuilder::new();
        add_prism(&mut builder, &circle_points(DVec2::ZERO, 1.0, 4), Some(DVec2::ZERO), 1.0);
        let mesh = builder.finish();
        let [a, b, c] = mesh.triangle(mesh.faces[8]);
        assert!((b - a).cross(c - a).z < 0.0, "bottom cap should face -z");
        let [a, b, c] = mesh.triangle(mesh.faces[9]);
        assert!((b - a).cross(c - a).z > 0.0, "top cap should face +z");
    }
}
