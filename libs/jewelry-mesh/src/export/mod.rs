//! # Export
//!
//! Serializers turning a [`PatternResult`](crate::mesh::PatternResult) into
//! bytes for slicers and viewers. Only STL is supported.

pub mod stl;

pub use stl::{
    binary_stl_size, face_normal, facets, parse_ascii_stl, to_ascii_stl, to_ascii_stl_with,
    write_ascii_stl, write_binary_stl, AsciiStl, StlFacet,
};
