//! # Mesh Data Structures
//!
//! [`MeshBuilder`] is the growable buffer every generation stage appends to.
//! [`PatternResult`] is the finished, immutable vertex/face buffer.
//!
//! Faces are always triangles: quads are split when they are added, so the
//! exporter never sees anything but three indices per face.

use crate::bbox::BoundingBox;
use crate::point::Point3D;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Which stage emitted a vertex.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provenance {
    /// Emitted by a pattern generator.
    #[default]
    Pattern,
    /// Emitted by the structure composer (loops, wires, bands).
    Structure,
}

/// Append-only mesh buffer shared by pattern generators and the composer.
///
/// Indices returned by [`add_vertex`](Self::add_vertex) stay valid for the
/// life of the builder; nothing is ever removed or reordered.
///
/// # Example
///
/// ```rust
/// use jewelry_mesh::mesh::MeshBuilder;
/// use glam::DVec3;
///
/// let mut builder = MeshBuilder::new();
/// let a = builder.add_vertex(DVec3::new(0.0, 0.0, 0.0));
/// let b = builder.add_vertex(DVec3::new(1.0, 0.0, 0.0));
/// let c = builder.add_vertex(DVec3::new(1.0, 1.0, 0.0));
/// let d = builder.add_vertex(DVec3::new(0.0, 1.0, 0.0));
/// builder.add_quad(a, b, c, d);
/// let mesh = builder.finish();
/// assert_eq!(mesh.face_count(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MeshBuilder {
    vertices: Vec<Point3D>,
    faces: Vec<[u32; 3]>,
    provenance: Vec<Provenance>,
    current: Provenance,
}

impl MeshBuilder {
    /// Creates an empty builder tagging new vertices as pattern vertices.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the tag applied to vertices added from now on.
    pub fn set_provenance(&mut self, provenance: Provenance) {
        self.current = provenance;
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Returns true if no vertex has been added.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Adds a vertex and returns its index.
    pub fn add_vertex(&mut self, position: Point3D) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(position);
        self.provenance.push(self.current);
        index
    }

    /// Adds a triangle by vertex indices.
    pub fn add_triangle(&mut self, v0: u32, v1: u32, v2: u32) {
        self.faces.push([v0, v1, v2]);
    }

    /// Adds a quad as the two triangles `(a, b, c)` and `(a, c, d)`.
    pub fn add_quad(&mut self, a: u32, b: u32, c: u32, d: u32) {
        self.faces.push([a, b, c]);
        self.faces.push([a, c, d]);
    }

    /// Adds a triangle fan from `center` around the closed `rim`.
    pub fn add_fan(&mut self, center: u32, rim: &[u32]) {
        for (i, &current) in rim.iter().enumerate() {
            let next = rim[(i + 1) % rim.len()];
            self.faces.push([center, current, next]);
        }
    }

    /// Returns the vertex at the given index.
    #[inline]
    pub fn vertex(&self, index: u32) -> Point3D {
        self.vertices[index as usize]
    }

    /// Mutable access to every vertex carrying the given tag.
    pub fn vertices_with_provenance_mut(
        &mut self,
        provenance: Provenance,
    ) -> impl Iterator<Item = &mut Point3D> + '_ {
        self.vertices
            .iter_mut()
            .zip(&self.provenance)
            .filter(move |(_, tag)| **tag == provenance)
            .map(|(vertex, _)| vertex)
    }

    /// Freezes the buffers.
    pub fn finish(self) -> PatternResult {
        PatternResult {
            vertices: self.vertices,
            faces: self.faces,
            edges: None,
            provenance: self.provenance,
        }
    }
}

/// A generated triangle mesh.
///
/// Insertion order of `vertices` defines stable indices; `provenance[i]`
/// tags `vertices[i]`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PatternResult {
    pub vertices: Vec<Point3D>,
    pub faces: Vec<[u32; 3]>,
    /// Optional wireframe segments as vertex index pairs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edges: Option<Vec<[u32; 2]>>,
    pub provenance: Vec<Provenance>,
}

impl PatternResult {
    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Returns true if the mesh has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Number of vertices carrying the given tag.
    pub fn count_with_provenance(&self, provenance: Provenance) -> usize {
        self.provenance.iter().filter(|tag| **tag == provenance).count()
    }

    /// Computes the axis-aligned bounding box.
    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::from_vertices(&self.vertices)
    }

    /// Returns the three corners of a face.
    #[inline]
    pub fn triangle(&self, face: [u32; 3]) -> [Point3D; 3] {
        face.map(|i| self.vertices[i as usize])
    }

    /// Validates the mesh topology.
    ///
    /// Checks:
    /// - All face indices are valid
    /// - Each face references three distinct vertices
    pub fn validate(&self) -> bool {
        let vertex_count = self.vertices.len() as u32;
        self.faces.iter().all(|&[a, b, c]| {
            a < vertex_count && b < vertex_count && c < vertex_count && a != b && b != c && a != c
        })
    }

    /// Fills `edges` with every undirected face edge exactly once.
    pub fn with_wireframe(mut self) -> Self {
        let mut unique = BTreeSet::new();
        for &[a, b, c] in &self.faces {
            for (u, v) in [(a, b), (b, c), (c, a)] {
                unique.insert([u.min(v), u.max(v)]);
            }
        }
        self.edges = Some(unique.into_iter().collect());
        self
    }

    /// Exports vertices as f32 array for GPU.
    ///
    /// Returns flattened [x, y, z, x, y, z, ...] array.
    pub fn vertices_f32(&self) -> Vec<f32> {
        self.vertices
            .iter()
            .flat_map(|v| [v.x as f32, v.y as f32, v.z as f32])
            .collect()
    }

    /// Exports face indices as a flattened u32 array.
    pub fn indices_u32(&self) -> Vec<u32> {
        self.faces.iter().flatten().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec3;

    fn unit_square() -> MeshBuilder {
        let mut builder = MeshBuilder::new();
        let a = builder.add_vertex(DVec3::ZERO);
        let b = builder.add_vertex(DVec3::X);
        let c = builder.add_vertex(DVec3::new(1.0, 1.0, 0.0));
        let d = builder.add_vertex(DVec3::Y);
        builder.add_quad(a, b, c, d);
        builder
    }

    #[test]
    fn test_builder_new() {
        let builder = MeshBuilder::new();
        assert!(builder.is_empty());
        assert_eq!(builder.vertex_count(), 0);
        assert_eq!(builder.face_count(), 0);
    }

    #[test]
    fn test_quad_is_split() {
        let mesh = unit_square().finish();
        assert_eq!(mesh.faces, vec![[0, 1, 2], [0, 2, 3]]);
        assert!(mesh.validate());
    }

    #[test]
    fn test_fan_closes_rim() {
        let mut builder = unit_square();
        let center = builder.add_vertex(DVec3::new(0.5, 0.5, 0.0));
        builder.add_fan(center, &[0, 1, 2, 3]);
        let mesh = builder.finish();
        assert_eq!(mesh.face_count(), 6);
        assert_eq!(mesh.faces[5], [4, 3, 0]);
    }

    #[test]
    fn test_provenance_tags() {
        let mut builder = unit_square();
        builder.set_provenance(Provenance::Structure);
        builder.add_vertex(DVec3::Z);
        for v in builder.vertices_with_provenance_mut(Provenance::Pattern) {
            v.z += 1.0;
        }
        assert_eq!(builder.vertex(4), DVec3::Z);
        let mesh = builder.finish();
        assert_eq!(mesh.count_with_provenance(Provenance::Pattern), 4);
        assert_eq!(mesh.count_with_provenance(Provenance::Structure), 1);
        assert!(mesh.vertices[..4].iter().all(|v| v.z == 1.0));
    }

    #[test]
    fn test_validate_invalid_index() {
        let mut builder = MeshBuilder::new();
        builder.add_vertex(DVec3::ZERO);
        builder.add_triangle(0, 1, 2);
        assert!(!builder.finish().validate());
    }

    #[test]
    fn test_validate_repeated_index() {
        let mut builder = unit_square();
        builder.add_triangle(0, 0, 1);
        assert!(!builder.finish().validate());
    }

    #[test]
    fn test_wireframe_edges_unique() {
        let mesh = unit_square().finish().with_wireframe();
        // 4 border edges + 1 diagonal
        assert_eq!(mesh.edges.as_ref().map(Vec::len), Some(5));
    }

    #[test]
    fn test_flat_buffers() {
        let mesh = unit_square().finish();
        assert_eq!(mesh.vertices_f32().len(), 12);
        assert_eq!(mesh.indices_u32(), vec![0, 1, 2, 0, 2, 3]);
    }
}
