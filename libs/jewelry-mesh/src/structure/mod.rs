//! # Structure Composer
//!
//! Fuses jewelry hardware onto a generated pattern.
//!
//! ## Pipeline
//!
//! ```text
//! compose(kind, pattern, params, extra)
//!   ├─ pattern generator  → MeshBuilder (Provenance::Pattern)
//!   ├─ structure stage    → MeshBuilder (Provenance::Structure)
//!   │    necklace: chain loops
//!   │    earrings: hook wire or stud post
//!   │    ring:     band, pattern seated on top
//!   └─ finish + bounding box → JewelryGeometry
//! ```
//!
//! Each stage only appends to the builder. The ring stage is the only one
//! that moves vertices, and it only touches vertices tagged as pattern.

pub mod earrings;
pub mod necklace;
pub mod ring;

use crate::error::MeshError;
use crate::generator::JewelryGeometry;
use crate::mesh::MeshBuilder;
use crate::patterns::{PatternFn, PatternKind};
use crate::point::Point3D;
use config::constants::{DEFAULT_CHAIN_LENGTH, DEFAULT_FINGER_SIZE};
use jewelry_params::{check_finger_size, GeometryParameters, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

// =============================================================================
// JEWELRY KIND
// =============================================================================

/// The supported jewelry types.
///
/// Unlike pattern names, an unknown jewelry type is a hard failure.
///
/// # Example
///
/// ```rust
/// use jewelry_mesh::structure::JewelryKind;
///
/// assert_eq!("ring".parse::<JewelryKind>().unwrap(), JewelryKind::Ring);
/// assert!("bracelet".parse::<JewelryKind>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JewelryKind {
    Necklace,
    Earrings,
    Ring,
}

impl JewelryKind {
    /// Wire name of the jewelry type.
    pub fn name(self) -> &'static str {
        match self {
            JewelryKind::Necklace => "necklace",
            JewelryKind::Earrings => "earrings",
            JewelryKind::Ring => "ring",
        }
    }
}

impl FromStr for JewelryKind {
    type Err = MeshError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "necklace" => Ok(JewelryKind::Necklace),
            "earrings" => Ok(JewelryKind::Earrings),
            "ring" => Ok(JewelryKind::Ring),
            other => Err(MeshError::unsupported(other)),
        }
    }
}

impl fmt::Display for JewelryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// EXTRA PARAMETERS
// =============================================================================

/// Ear wire style for earrings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WireType {
    /// Open hook bent over the top of the piece.
    #[default]
    Hook,
    /// Straight post behind the piece.
    Stud,
}

impl FromStr for WireType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hook" => Ok(WireType::Hook),
            "stud" => Ok(WireType::Stud),
            _ => Err(ValidationError::single(
                "wireType",
                "Expected 'hook' | 'stud'",
            )),
        }
    }
}

/// Type-specific options that ride along with the parameter record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExtraParams {
    /// Necklace chain length in inches. Recorded on the structure only.
    pub chain_length: Option<f64>,
    /// Earring wire style.
    pub wire_type: Option<WireType>,
    /// Ring finger size. Overrides `GeometryParameters::finger_size`.
    pub finger_size: Option<f64>,
}

// =============================================================================
// STRUCTURE DESCRIPTION
// =============================================================================

/// Dimensions of a ring band, in millimeters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RingBand {
    pub inner_radius: f64,
    pub outer_radius: f64,
    pub height: f64,
}

impl RingBand {
    /// Radial width of the band.
    #[inline]
    pub fn width(&self) -> f64 {
        self.outer_radius - self.inner_radius
    }
}

/// The hardware added for a jewelry type. The variant always matches the
/// requested [`JewelryKind`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum JewelryStructure {
    #[serde(rename_all = "camelCase")]
    Necklace {
        chain_attachments: Vec<Point3D>,
        chain_length: f64,
    },
    #[serde(rename_all = "camelCase")]
    Earrings {
        ear_wire_attachment: Point3D,
        wire_type: WireType,
    },
    #[serde(rename_all = "camelCase")]
    Ring { ring_band: RingBand },
}

impl JewelryStructure {
    /// The jewelry type this structure belongs to.
    pub fn kind(&self) -> JewelryKind {
        match self {
            JewelryStructure::Necklace { .. } => JewelryKind::Necklace,
            JewelryStructure::Earrings { .. } => JewelryKind::Earrings,
            JewelryStructure::Ring { .. } => JewelryKind::Ring,
        }
    }
}

// =============================================================================
// COMPOSITION
// =============================================================================

/// Generates `pattern` and fuses the hardware for `kind` onto it.
///
/// # Errors
///
/// - [`MeshError::Validation`] if a ring finger size is out of range
/// - [`MeshError::DegenerateGeometry`] if the pattern produced no vertices
///
/// # Example
///
/// ```rust
/// use jewelry_mesh::patterns::PatternKind;
/// use jewelry_mesh::structure::{compose, ExtraParams, JewelryKind, JewelryStructure};
/// use jewelry_params::GeometryParameters;
///
/// let geometry = compose(
///     JewelryKind::Necklace,
///     PatternKind::Mandala,
///     &GeometryParameters::default(),
///     &ExtraParams::default(),
/// )
/// .unwrap();
/// assert!(matches!(geometry.structure, JewelryStructure::Necklace { .. }));
/// ```
pub fn compose(
    kind: JewelryKind,
    pattern: PatternKind,
    params: &GeometryParameters,
    extra: &ExtraParams,
) -> Result<JewelryGeometry, MeshError> {
    let mut builder = MeshBuilder::new();

    let structure = match kind {
        JewelryKind::Necklace => necklace::compose(
            pattern,
            params,
            extra.chain_length.unwrap_or(DEFAULT_CHAIN_LENGTH),
            &mut builder,
        )?,
        JewelryKind::Earrings => earrings::compose(
            pattern,
            params,
            extra.wire_type.unwrap_or_default(),
            &mut builder,
        )?,
        JewelryKind::Ring => {
            let finger_size = extra
                .finger_size
                .or(params.finger_size)
                .unwrap_or(DEFAULT_FINGER_SIZE);
            ring::compose(pattern, params, check_finger_size(finger_size)?, &mut builder)?
        }
    };

    let pattern = builder.finish();
    let bounding_box = pattern.bounding_box();
    Ok(JewelryGeometry {
        pattern,
        structure,
        bounding_box,
    })
}

/// Runs a pattern generator into `builder`, rejecting empty output.
pub(crate) fn generate_pattern_into(
    kind: PatternKind,
    params: &GeometryParameters,
    builder: &mut MeshBuilder,
) -> Result<(), MeshError> {
    run_generator(kind.name(), kind.generator(), params, builder)
}

fn run_generator(
    name: &str,
    generator: PatternFn,
    params: &GeometryParameters,
    builder: &mut MeshBuilder,
) -> Result<(), MeshError> {
    let start_vertices = builder.vertex_count();
    let start_faces = builder.face_count();
    generator(params, builder);

    let vertices = builder.vertex_count() - start_vertices;
    if vertices == 0 {
        return Err(MeshError::degenerate(format!(
            "{name} pattern produced no vertices"
        )));
    }

    debug!(
        pattern = name,
        vertices,
        faces = builder.face_count() - start_faces,
        "Generated pattern"
    );
    Ok(())
}
