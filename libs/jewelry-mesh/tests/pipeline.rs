//! End-to-end generation properties over the whole parameter range.

#![allow(clippy::unwrap_used)]
#![allow(clippy::float_cmp)]

use approx::assert_abs_diff_eq;
use jewelry_mesh::{
    generate_jewelry, generate_jewelry_by_name, generate_pattern, ring_diameter, BoundingBox,
    ExtraParams, GeometryParameters, JewelryKind, JewelryStructure, MeshError, PatternKind,
    Provenance, WireType,
};
use std::f64::consts::PI;

const KINDS: [JewelryKind; 3] = [JewelryKind::Necklace, JewelryKind::Earrings, JewelryKind::Ring];

/// Every corner of the validated parameter box.
fn corner_parameters() -> Vec<GeometryParameters> {
    let mut corners = Vec::new();
    for size in [0.5, 2.0] {
        for thickness in [0.1, 0.5] {
            for complexity in [0.1, 1.0] {
                for symmetry in [3, 12] {
                    for spiral_turns in [1, 8] {
                        corners.push(GeometryParameters {
                            size,
                            thickness,
                            complexity,
                            symmetry,
                            spiral_turns,
                            finger_size: None,
                        });
                    }
                }
            }
        }
    }
    corners
}

#[test]
fn every_pattern_is_non_empty_and_valid() {
    for params in corner_parameters() {
        for kind in PatternKind::ALL {
            let mesh = generate_pattern(kind, &params);
            assert!(mesh.vertex_count() > 0, "{kind} empty for {params:?}");
            assert!(mesh.validate(), "{kind} has bad faces for {params:?}");
            assert!(
                mesh.vertices.iter().all(|v| v.is_finite()),
                "{kind} has non-finite vertices for {params:?}"
            );
            assert_eq!(mesh.count_with_provenance(Provenance::Pattern), mesh.vertex_count());
        }
    }
}

#[test]
fn every_jewelry_piece_is_valid() {
    for params in corner_parameters().iter().step_by(3) {
        for kind in KINDS {
            for pattern in PatternKind::ALL {
                let geometry =
                    generate_jewelry(kind, pattern, params, &ExtraParams::default()).unwrap();
                assert_eq!(geometry.structure.kind(), kind);
                assert!(geometry.pattern.validate());
                assert!(geometry.pattern.count_with_provenance(Provenance::Structure) > 0);
            }
        }
    }
}

#[test]
fn bounding_box_encloses_geometry() {
    let params = GeometryParameters::default();
    for kind in KINDS {
        for pattern in PatternKind::ALL {
            let geometry =
                generate_jewelry(kind, pattern, &params, &ExtraParams::default()).unwrap();
            let bbox = geometry.bounding_box;
            assert!(bbox.min.cmple(bbox.max).all());
            assert!(geometry.pattern.vertices.iter().all(|v| bbox.contains(*v)));
        }
    }
}

#[test]
fn empty_bounding_box_is_origin() {
    let bbox = BoundingBox::from_vertices(&[]);
    assert_eq!(bbox, BoundingBox::default());
    assert_eq!(bbox.min.to_array(), [0.0; 3]);
    assert_eq!(bbox.max.to_array(), [0.0; 3]);
}

#[test]
fn ring_band_width_tracks_size() {
    let mut finger_size = 4.0;
    while finger_size <= 12.0 {
        for size in [0.5, 1.0, 1.7, 2.0] {
            let params = GeometryParameters {
                size,
                finger_size: Some(finger_size),
                ..GeometryParameters::default()
            };
            let geometry = generate_jewelry(
                JewelryKind::Ring,
                PatternKind::Islamic,
                &params,
                &ExtraParams::default(),
            )
            .unwrap();
            let JewelryStructure::Ring { ring_band } = geometry.structure else {
                unreachable!("ring request produced {:?}", geometry.structure.kind());
            };
            assert!(ring_band.inner_radius > 0.0);
            assert!(ring_band.outer_radius > ring_band.inner_radius);
            assert_abs_diff_eq!(
                ring_band.outer_radius - ring_band.inner_radius,
                size * 8.0,
                epsilon = 1e-9
            );
        }
        finger_size += 0.5;
    }
}

#[test]
fn ring_size_seven_diameter() {
    assert_abs_diff_eq!(ring_diameter(7.0), (44.2 + 7.0 * 2.56) / PI, epsilon = 1e-9);
    assert_abs_diff_eq!(ring_diameter(7.0), 19.7734, epsilon = 1e-4);
}

#[test]
fn mandala_is_deterministic() {
    let params = GeometryParameters {
        size: 1.0,
        thickness: 0.2,
        complexity: 0.7,
        symmetry: 8,
        ..GeometryParameters::default()
    };
    let first = generate_pattern(PatternKind::Mandala, &params);
    let second = generate_pattern(PatternKind::Mandala, &params);

    assert_eq!(first.faces, second.faces);
    let bits = |mesh: &jewelry_mesh::PatternResult| -> Vec<[u64; 3]> {
        mesh.vertices
            .iter()
            .map(|v| v.to_array().map(f64::to_bits))
            .collect()
    };
    assert_eq!(bits(&first), bits(&second));
}

#[test]
fn unsupported_jewelry_type_is_named() {
    let err = generate_jewelry_by_name(
        "bracelet",
        "mandala",
        &GeometryParameters::default(),
        &ExtraParams::default(),
    )
    .unwrap_err();
    assert!(matches!(err, MeshError::UnsupportedType { .. }));
    assert_eq!(err.to_string(), "Unsupported jewelry type: bracelet");
}

#[test]
fn earring_wire_types_differ() {
    let params = GeometryParameters::default();
    let generate = |wire_type| {
        let extra = ExtraParams {
            wire_type: Some(wire_type),
            ..ExtraParams::default()
        };
        generate_jewelry(JewelryKind::Earrings, PatternKind::Mandala, &params, &extra).unwrap()
    };
    let hook = generate(WireType::Hook);
    let stud = generate(WireType::Stud);
    assert_ne!(hook.pattern.vertex_count(), stud.pattern.vertex_count());
    assert_eq!(
        hook.pattern.count_with_provenance(Provenance::Pattern),
        stud.pattern.count_with_provenance(Provenance::Pattern)
    );
}

#[test]
fn necklace_records_chain_length() {
    let extra = ExtraParams {
        chain_length: Some(24.0),
        ..ExtraParams::default()
    };
    let geometry = generate_jewelry(
        JewelryKind::Necklace,
        PatternKind::Fibonacci,
        &GeometryParameters::default(),
        &extra,
    )
    .unwrap();
    match geometry.structure {
        JewelryStructure::Necklace {
            chain_attachments,
            chain_length,
        } => {
            assert_eq!(chain_attachments.len(), 2);
            assert_eq!(chain_length, 24.0);
        }
        other => unreachable!("expected necklace, got {other:?}"),
    }
}

#[test]
fn geometry_serializes_for_callers() {
    let geometry = generate_jewelry(
        JewelryKind::Ring,
        PatternKind::Celtic,
        &GeometryParameters::default(),
        &ExtraParams::default(),
    )
    .unwrap();
    let json = serde_json::to_value(&geometry).unwrap();
    assert_eq!(json["structure"]["type"], "ring");
    assert!(json["boundingBox"]["min"].is_array());
    assert_eq!(
        json["pattern"]["faces"].as_array().map(Vec::len),
        Some(geometry.pattern.face_count())
    );
    assert!(json["pattern"].get("edges").is_none());
}
