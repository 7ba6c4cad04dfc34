//! STL (Stereolithography) export.
//!
//! ASCII output is the format slicers receive:
//!
//! ```text
//! solid Sacred_Geometry_Jewelry
//! facet normal nx ny nz
//!   outer loop
//!     vertex x y z
//!     vertex x y z
//!     vertex x y z
//!   endloop
//! endfacet
//! endsolid Sacred_Geometry_Jewelry
//! ```
//!
//! Every number is fixed-point with [`ExportConfig::decimals`] digits (six by
//! default). Binary output follows the usual 80-byte header layout.

use crate::error::MeshError;
use crate::mesh::PatternResult;
use crate::point::Point3D;
use config::constants::{ExportConfig, STL_BINARY_HEADER_SIZE};
use glam::DVec3;
use std::fmt;
use std::io::Write;

/// One triangle as stored in an STL file.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StlFacet {
    pub normal: DVec3,
    pub vertices: [Point3D; 3],
}

/// Unit normal of the triangle `(a, b, c)`, or zero if it is degenerate.
///
/// # Example
///
/// ```rust
/// use jewelry_mesh::export::face_normal;
/// use glam::DVec3;
///
/// let n = face_normal(DVec3::ZERO, DVec3::X, DVec3::Y);
/// assert_eq!(n, DVec3::Z);
///
/// let colinear = face_normal(DVec3::ZERO, DVec3::X, DVec3::X * 2.0);
/// assert_eq!(colinear, DVec3::ZERO);
/// ```
pub fn face_normal(a: Point3D, b: Point3D, c: Point3D) -> DVec3 {
    (b - a).cross(c - a).try_normalize().unwrap_or(DVec3::ZERO)
}

/// Facets of `pattern` in face order.
pub fn facets(pattern: &PatternResult) -> impl Iterator<Item = StlFacet> + '_ {
    pattern.faces.iter().map(|&face| {
        let vertices = pattern.triangle(face);
        StlFacet {
            normal: face_normal(vertices[0], vertices[1], vertices[2]),
            vertices,
        }
    })
}

// =============================================================================
// ASCII
// =============================================================================

/// Fixed-point number that never prints as `-0.000000`.
struct Fixed(f64, usize);

impl fmt::Display for Fixed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = if self.0 == 0.0 { 0.0 } else { self.0 };
        write!(f, "{:.*}", self.1, value)
    }
}

/// Display adapter rendering a mesh as ASCII STL.
pub struct AsciiStl<'a> {
    pattern: &'a PatternResult,
    config: &'a ExportConfig,
}

impl<'a> AsciiStl<'a> {
    pub fn new(pattern: &'a PatternResult, config: &'a ExportConfig) -> Self {
        Self { pattern, config }
    }

    fn write_vec(&self, f: &mut fmt::Formatter<'_>, prefix: &str, v: DVec3) -> fmt::Result {
        let d = self.config.decimals;
        writeln!(
            f,
            "{prefix} {} {} {}",
            Fixed(v.x, d),
            Fixed(v.y, d),
            Fixed(v.z, d)
        )
    }
}

impl fmt::Display for AsciiStl<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "solid {}", self.config.solid_name)?;
        for facet in facets(self.pattern) {
            self.write_vec(f, "facet normal", facet.normal)?;
            writeln!(f, "  outer loop")?;
            for v in facet.vertices {
                self.write_vec(f, "    vertex", v)?;
            }
            writeln!(f, "  endloop")?;
            writeln!(f, "endfacet")?;
        }
        writeln!(f, "endsolid {}", self.config.solid_name)
    }
}

/// Renders `pattern` as ASCII STL with the default solid name and precision.
///
/// # Example
///
/// ```rust
/// use jewelry_mesh::export::to_ascii_stl;
/// use jewelry_mesh::patterns::{generate_pattern, PatternKind};
/// use jewelry_params::GeometryParameters;
///
/// let mesh = generate_pattern(PatternKind::Islamic, &GeometryParameters::default());
/// let stl = to_ascii_stl(&mesh);
/// assert!(stl.starts_with("solid Sacred_Geometry_Jewelry\n"));
/// assert_eq!(stl.matches("endfacet").count(), mesh.face_count());
/// ```
pub fn to_ascii_stl(pattern: &PatternResult) -> String {
    to_ascii_stl_with(pattern, &ExportConfig::default())
}

/// Renders `pattern` as ASCII STL using `config`.
pub fn to_ascii_stl_with(pattern: &PatternResult, config: &ExportConfig) -> String {
    AsciiStl::new(pattern, config).to_string()
}

/// Writes `pattern` as ASCII STL.
///
/// # Errors
///
/// Returns [`MeshError::Io`] if the writer fails.
pub fn write_ascii_stl<W: Write>(
    pattern: &PatternResult,
    config: &ExportConfig,
    mut writer: W,
) -> Result<(), MeshError> {
    write!(writer, "{}", AsciiStl::new(pattern, config))?;
    writer.flush()?;
    Ok(())
}

/// Parses ASCII STL text back into facets.
///
/// # Errors
///
/// Returns [`MeshError::InvalidStl`] with the 1-based line number for
/// unparsable numbers, vertices outside a loop, or facets that do not have
/// exactly three vertices.
pub fn parse_ascii_stl(text: &str) -> Result<Vec<StlFacet>, MeshError> {
    let mut facets = Vec::new();
    let mut normal: Option<DVec3> = None;
    let mut in_loop = false;
    let mut vertices: Vec<Point3D> = Vec::with_capacity(3);

    for (index, line) in text.lines().enumerate() {
        let line_number = index + 1;
        let parts: Vec<&str> = line.split_whitespace().collect();
        let Some(keyword) = parts.first() else {
            continue;
        };

        match keyword.to_ascii_lowercase().as_str() {
            "facet" => {
                if parts.get(1).map(|p| p.eq_ignore_ascii_case("normal")) != Some(true) {
                    return Err(MeshError::invalid_stl(line_number, "expected 'facet normal'"));
                }
                normal = Some(parse_vec(&parts[2..], line_number)?);
                vertices.clear();
            }
            "outer" => in_loop = true,
            "vertex" => {
                if !in_loop {
                    return Err(MeshError::invalid_stl(line_number, "vertex outside loop"));
                }
                vertices.push(parse_vec(&parts[1..], line_number)?);
            }
            "endloop" => in_loop = false,
            "endfacet" => {
                let Some(n) = normal.take() else {
                    return Err(MeshError::invalid_stl(line_number, "endfacet without facet"));
                };
                let &[a, b, c] = vertices.as_slice() else {
                    return Err(MeshError::invalid_stl(
                        line_number,
                        format!("facet has {} vertices, expected 3", vertices.len()),
                    ));
                };
                facets.push(StlFacet {
                    normal: n,
                    vertices: [a, b, c],
                });
            }
            "endsolid" => break,
            _ => {}
        }
    }

    Ok(facets)
}

fn parse_vec(fields: &[&str], line: usize) -> Result<DVec3, MeshError> {
    let &[x, y, z] = fields else {
        return Err(MeshError::invalid_stl(line, "expected three coordinates"));
    };
    Ok(DVec3::new(
        parse_coord(x, line)?,
        parse_coord(y, line)?,
        parse_coord(z, line)?,
    ))
}

fn parse_coord(s: &str, line: usize) -> Result<f64, MeshError> {
    s.parse()
        .map_err(|e| MeshError::invalid_stl(line, format!("invalid number {s:?}: {e}")))
}

// =============================================================================
// BINARY
// =============================================================================

/// Writes `pattern` as binary STL. The header carries the solid name.
///
/// # Errors
///
/// Returns [`MeshError::Io`] if the writer fails.
pub fn write_binary_stl<W: Write>(
    pattern: &PatternResult,
    config: &ExportConfig,
    mut writer: W,
) -> Result<(), MeshError> {
    let mut header = [b' '; STL_BINARY_HEADER_SIZE];
    let name = config.solid_name.as_bytes();
    let len = name.len().min(STL_BINARY_HEADER_SIZE);
    header[..len].copy_from_slice(&name[..len]);
    writer.write_all(&header)?;

    #[allow(clippy::cast_possible_truncation)]
    // Face count: meshes beyond u32 faces are not generated
    let face_count = pattern.face_count() as u32;
    writer.write_all(&face_count.to_le_bytes())?;

    for facet in facets(pattern) {
        write_vec_f32(&mut writer, facet.normal)?;
        for v in facet.vertices {
            write_vec_f32(&mut writer, v)?;
        }
        writer.write_all(&0u16.to_le_bytes())?;
    }

    writer.flush()?;
    Ok(())
}

/// Size in bytes of the binary STL for `face_count` triangles.
pub fn binary_stl_size(face_count: usize) -> usize {
    STL_BINARY_HEADER_SIZE + 4 + face_count * 50
}

fn write_vec_f32<W: Write>(writer: &mut W, v: DVec3) -> std::io::Result<()> {
    // f32 is the only precision binary STL stores.
    for component in v.as_vec3().to_array() {
        writer.write_all(&component.to_le_bytes())?;
    }
    Ok(())
}
