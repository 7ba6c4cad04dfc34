//! # Jewelry Mesh
//!
//! Procedural mesh generation for sacred-geometry jewelry.
//! Turns validated [`GeometryParameters`] into printable triangle meshes.
//!
//! ## Architecture
//!
//! ```text
//! GeometryParameters ─┬─ patterns  (mandala, fibonacci, flower of life, islamic, celtic)
//!                     └─ structure (chain loops, ear wires, ring band)
//!                           │
//!                           ▼
//!                     JewelryGeometry ── export::stl → ASCII / binary STL
//! ```
//!
//! ## Algorithms
//!
//! Everything is pure computation over freshly allocated buffers:
//! - **Patterns**: parametric curves and polar layouts extruded to thickness
//! - **Composition**: append-only [`MeshBuilder`] with provenance tags
//! - **Export**: per-facet normals from the triangle winding
//!
//! ## Usage
//!
//! ```rust
//! use jewelry_mesh::{generate_jewelry, to_ascii_stl, ExtraParams, JewelryKind, PatternKind};
//! use jewelry_params::GeometryParameters;
//!
//! let geometry = generate_jewelry(
//!     JewelryKind::Ring,
//!     PatternKind::FlowerOfLife,
//!     &GeometryParameters::default(),
//!     &ExtraParams::default(),
//! )?;
//! let stl = to_ascii_stl(&geometry.pattern);
//! assert!(stl.ends_with("endsolid Sacred_Geometry_Jewelry\n"));
//! # Ok::<(), jewelry_mesh::MeshError>(())
//! ```

pub mod bbox;
pub mod error;
pub mod export;
pub mod generator;
pub mod mesh;
pub mod patterns;
pub mod point;
pub mod structure;

pub use bbox::BoundingBox;
pub use error::MeshError;
pub use export::{parse_ascii_stl, to_ascii_stl, write_ascii_stl, write_binary_stl};
pub use generator::{
    generate_batch, generate_jewelry, generate_jewelry_by_name, JewelryGeometry, JewelryRequest,
    MeshStats,
};
pub use jewelry_params::GeometryParameters;
pub use mesh::{MeshBuilder, PatternResult, Provenance};
pub use patterns::{generate_pattern, PatternKind};
pub use point::{Point2D, Point3D};
pub use structure::ring::ring_diameter;
pub use structure::{ExtraParams, JewelryKind, JewelryStructure, RingBand, WireType};
