//! # Jewelry Generator
//!
//! Entry points that turn a jewelry type, a pattern and parameters into a
//! finished [`JewelryGeometry`].
//!
//! Every call allocates its own buffers, so [`generate_batch`] can fan
//! requests out across threads with no coordination.

use crate::bbox::BoundingBox;
use crate::error::MeshError;
use crate::mesh::PatternResult;
use crate::patterns::PatternKind;
use crate::structure::{compose, ExtraParams, JewelryKind, JewelryStructure};
use jewelry_params::{validate, GeometryParameters, RawParameters};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::info;

/// A complete piece: pattern mesh with hardware fused on, a description of
/// that hardware, and the box enclosing every vertex.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JewelryGeometry {
    pub pattern: PatternResult,
    pub structure: JewelryStructure,
    pub bounding_box: BoundingBox,
}

/// Summary figures reported to callers after generation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeshStats {
    pub vertex_count: usize,
    pub face_count: usize,
    pub bounding_box: BoundingBox,
}

impl JewelryGeometry {
    /// Vertex count, face count and bounding box.
    pub fn stats(&self) -> MeshStats {
        MeshStats {
            vertex_count: self.pattern.vertex_count(),
            face_count: self.pattern.face_count(),
            bounding_box: self.bounding_box,
        }
    }
}

/// Generates a piece of jewelry from already validated parameters.
///
/// # Errors
///
/// See [`compose`].
///
/// # Example
///
/// ```rust
/// use jewelry_mesh::generator::generate_jewelry;
/// use jewelry_mesh::patterns::PatternKind;
/// use jewelry_mesh::structure::{ExtraParams, JewelryKind};
/// use jewelry_params::GeometryParameters;
///
/// let geometry = generate_jewelry(
///     JewelryKind::Earrings,
///     PatternKind::Fibonacci,
///     &GeometryParameters::default(),
///     &ExtraParams::default(),
/// )
/// .unwrap();
/// assert!(geometry.pattern.validate());
/// ```
pub fn generate_jewelry(
    kind: JewelryKind,
    pattern: PatternKind,
    params: &GeometryParameters,
    extra: &ExtraParams,
) -> Result<JewelryGeometry, MeshError> {
    info!(jewelry = %kind, pattern = %pattern, "Generating jewelry");

    let geometry = compose(kind, pattern, params, extra)?;

    info!(
        jewelry = %kind,
        vertices = geometry.pattern.vertex_count(),
        faces = geometry.pattern.face_count(),
        "Jewelry generated"
    );
    Ok(geometry)
}

/// Generates a piece from wire names.
///
/// Unknown pattern names fall back to the mandala; unknown jewelry types are
/// rejected.
///
/// # Errors
///
/// [`MeshError::UnsupportedType`] for an unknown jewelry type, plus
/// everything [`generate_jewelry`] returns.
pub fn generate_jewelry_by_name(
    jewelry_type: &str,
    pattern_type: &str,
    params: &GeometryParameters,
    extra: &ExtraParams,
) -> Result<JewelryGeometry, MeshError> {
    let kind: JewelryKind = jewelry_type.parse()?;
    generate_jewelry(kind, PatternKind::from_name(pattern_type), params, extra)
}

/// One entry of a batch: names and unvalidated parameters as a collaborator
/// would send them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct JewelryRequest {
    pub jewelry_type: String,
    pub pattern_type: String,
    pub parameters: RawParameters,
    pub extra: ExtraParams,
}

impl JewelryRequest {
    /// Validates the parameters and generates the piece.
    ///
    /// # Errors
    ///
    /// [`MeshError::Validation`] for rejected parameters, plus everything
    /// [`generate_jewelry_by_name`] returns.
    pub fn generate(&self) -> Result<JewelryGeometry, MeshError> {
        let validated = validate(&self.parameters)?;
        generate_jewelry_by_name(
            &self.jewelry_type,
            &self.pattern_type,
            &validated.parameters,
            &self.extra,
        )
    }
}

/// Generates every request in parallel. Results keep the input order.
pub fn generate_batch(requests: &[JewelryRequest]) -> Vec<Result<JewelryGeometry, MeshError>> {
    info!(requests = requests.len(), "Starting batch generation");

    let results: Vec<_> = requests.par_iter().map(JewelryRequest::generate).collect();

    info!(
        succeeded = results.iter().filter(|r| r.is_ok()).count(),
        failed = results.iter().filter(|r| r.is_err()).count(),
        "Batch generation complete"
    );
    results
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;

    fn request(jewelry_type: &str, pattern_type: &str) -> JewelryRequest {
        JewelryRequest {
            jewelry_type: jewelry_type.to_string(),
            pattern_type: pattern_type.to_string(),
            ..JewelryRequest::default()
        }
    }

    #[test]
    fn test_stats_match_pattern() {
        let geometry = generate_jewelry(
            JewelryKind::Necklace,
            PatternKind::Celtic,
            &GeometryParameters::default(),
            &ExtraParams::default(),
        )
        .unwrap();
        let stats = geometry.stats();
        assert_eq!(stats.vertex_count, geometry.pattern.vertices.len());
        assert_eq!(stats.face_count, geometry.pattern.faces.len());
        assert_eq!(stats.bounding_box, geometry.pattern.bounding_box());
    }

    #[test]
    fn test_unknown_jewelry_type_rejected() {
        let result = generate_jewelry_by_name(
            "tiara",
            "mandala",
            &GeometryParameters::default(),
            &ExtraParams::default(),
        );
        assert!(matches!(result, Err(MeshError::UnsupportedType { .. })));
    }

    #[test]
    fn test_unknown_pattern_falls_back() {
        let params = GeometryParameters::default();
        let extra = ExtraParams::default();
        let fallback = generate_jewelry_by_name("ring", "moire", &params, &extra).unwrap();
        let mandala = generate_jewelry_by_name("ring", "mandala", &params, &extra).unwrap();
        assert_eq!(fallback, mandala);
    }

    #[test]
    fn test_request_validates_parameters() {
        let mut bad = request("necklace", "islamic");
        bad.parameters.size = Some(3.0);
        match bad.generate() {
            Err(MeshError::Validation(err)) => assert!(err.has_field("size")),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_batch_keeps_order() {
        let requests = vec![
            request("necklace", "mandala"),
            request("bracelet", "mandala"),
            request("ring", "flower-of-life"),
        ];
        let results = generate_batch(&requests);
        assert_eq!(results.len(), 3);
        assert!(matches!(
            results[0].as_ref().map(|g| g.structure.kind()),
            Ok(JewelryKind::Necklace)
        ));
        assert!(results[1].is_err());
        assert!(matches!(
            results[2].as_ref().map(|g| g.structure.kind()),
            Ok(JewelryKind::Ring)
        ));
    }

    #[test]
    fn test_request_from_json() {
        let json = r#"{
            "jewelryType": "earrings",
            "patternType": "celtic",
            "parameters": {"size": 1.2, "symmetry": 6},
            "extra": {"wireType": "stud"}
        }"#;
        let request: JewelryRequest = serde_json::from_str(json).unwrap();
        let geometry = request.generate().unwrap();
        assert!(matches!(
            geometry.structure,
            JewelryStructure::Earrings { wire_type: crate::structure::WireType::Stud, .. }
        ));
    }
}
