//! # Mesh Handle
//!
//! WASM-friendly wrapper for generated jewelry that can be transferred to
//! JavaScript.

use jewelry_mesh::{JewelryGeometry, JewelryStructure};
use wasm_bindgen::prelude::*;

/// A handle to a generated piece that can be accessed from JavaScript.
///
/// # Example (JavaScript)
///
/// ```javascript
/// const mesh = generate_jewelry("ring", "mandala", JSON.stringify({ size: 1.2 }));
///
/// const geometry = new THREE.BufferGeometry();
/// geometry.setAttribute('position', new THREE.BufferAttribute(mesh.vertices(), 3));
/// geometry.setIndex(new THREE.BufferAttribute(mesh.indices(), 1));
///
/// const [minX, minY, minZ, maxX, maxY, maxZ] = mesh.bounding_box();
/// const structure = JSON.parse(mesh.structure_json());
/// ```
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct MeshHandle {
    /// Vertex positions as [x, y, z, x, y, z, ...]
    vertices: Vec<f32>,
    /// Triangle indices as [i0, i1, i2, i0, i1, i2, ...]
    indices: Vec<u32>,
    /// [min x, min y, min z, max x, max y, max z]
    bounding_box: [f64; 6],
    structure: JewelryStructure,
    vertex_count: u32,
    triangle_count: u32,
}

#[wasm_bindgen]
impl MeshHandle {
    /// Returns the number of vertices.
    #[wasm_bindgen(getter)]
    pub fn vertex_count(&self) -> u32 {
        self.vertex_count
    }

    /// Returns the number of triangles.
    #[wasm_bindgen(getter)]
    pub fn triangle_count(&self) -> u32 {
        self.triangle_count
    }

    /// Returns the vertex positions as a Float32Array.
    ///
    /// Length: vertex_count * 3
    pub fn vertices(&self) -> Vec<f32> {
        self.vertices.clone()
    }

    /// Returns the triangle indices as a Uint32Array.
    ///
    /// Length: triangle_count * 3
    pub fn indices(&self) -> Vec<u32> {
        self.indices.clone()
    }

    /// Returns the bounding box as a Float64Array of six values.
    pub fn bounding_box(&self) -> Vec<f64> {
        self.bounding_box.to_vec()
    }

    /// Returns the jewelry structure (attachments or band) as JSON.
    pub fn structure_json(&self) -> String {
        serde_json::to_string(&self.structure).unwrap_or_default()
    }

    /// Returns true if the mesh is empty.
    pub fn is_empty(&self) -> bool {
        self.vertex_count == 0
    }
}

impl MeshHandle {
    /// Flattens a generated piece into GPU buffers.
    pub fn from_geometry(geometry: &JewelryGeometry) -> Self {
        let pattern = &geometry.pattern;
        let (min, max) = (geometry.bounding_box.min, geometry.bounding_box.max);

        Self {
            vertices: pattern.vertices_f32(),
            indices: pattern.indices_u32(),
            bounding_box: [min.x, min.y, min.z, max.x, max.y, max.z],
            structure: geometry.structure.clone(),
            vertex_count: u32::try_from(pattern.vertex_count()).unwrap_or(u32::MAX),
            triangle_count: u32::try_from(pattern.face_count()).unwrap_or(u32::MAX),
        }
    }

    /// The structure description without a JSON round trip.
    pub fn structure(&self) -> &JewelryStructure {
        &self.structure
    }
}
