//! WASM-facing entry points for the jewelry mesh pipeline.
//!
//! This crate is compiled to a `cdylib` and consumed from JavaScript via
//! `wasm-bindgen`. Parameters cross the boundary as JSON strings. Native
//! tests use the `*_internal` helpers, which return Rust error types instead
//! of `JsValue`.
//!
//! ```
//! let mesh = jewelry_wasm::generate_jewelry_internal("necklace", "islamic", "{}", None).unwrap();
//! assert!(mesh.vertex_count() > 0);
//! ```

mod mesh_handle;

pub use mesh_handle::MeshHandle;

use config::constants::{ConfigError, ExportConfig, STL_DECIMALS};
use jewelry_mesh::export::to_ascii_stl_with;
use jewelry_mesh::{ExtraParams, JewelryGeometry, JewelryRequest, MeshError};
use jewelry_params::{validate, RawParameters, ValidationResponse};
use thiserror::Error;
use wasm_bindgen::prelude::*;

/// Errors surfaced to JavaScript as error strings.
#[derive(Debug, Error)]
pub enum BridgeError {
    /// A JSON argument could not be decoded.
    #[error("Malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Generation failed.
    #[error(transparent)]
    Mesh(#[from] MeshError),

    /// Export settings were rejected.
    #[error("Invalid export settings: {0}")]
    Config(#[from] ConfigError),
}

fn to_js(err: BridgeError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Installs a panic hook that forwards Rust panics to the browser console.
///
/// # Examples
/// ```no_run
/// // In JavaScript: import and call once at startup.
/// // import { init_panic_hook } from "jewelry-wasm";
/// // init_panic_hook();
/// ```
#[wasm_bindgen]
pub fn init_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Converts a US ring size to an inner diameter in millimeters.
///
/// # Examples
/// ```
/// let d = jewelry_wasm::ring_diameter(7.0);
/// assert!((d - 19.7734).abs() < 1e-4);
/// assert!((d - (44.2 + 7.0 * 2.56) / std::f64::consts::PI).abs() < 1e-9);
/// ```
#[wasm_bindgen]
pub fn ring_diameter(size: f64) -> f64 {
    jewelry_mesh::ring_diameter(size)
}

// =============================================================================
// VALIDATION
// =============================================================================

/// Validates a JSON parameter record and returns the JSON response
/// `{valid, parameters?, priceMultiplier?, errors?}`.
///
/// # Errors
/// Returns a JavaScript error only when `params_json` is not valid JSON.
/// Out-of-range values are reported inside the response.
///
/// # Examples
/// ```no_run
/// // In JavaScript:
/// // const res = JSON.parse(validate_parameters(JSON.stringify({ size: 3 })));
/// // res.valid === false; res.errors[0].field === "size"
/// ```
#[wasm_bindgen]
pub fn validate_parameters(params_json: &str) -> Result<String, JsValue> {
    validate_parameters_internal(params_json)
        .and_then(|response| Ok(serde_json::to_string(&response)?))
        .map_err(to_js)
}

/// Host-only helper behind [`validate_parameters`].
///
/// # Examples
/// ```
/// let res = jewelry_wasm::validate_parameters_internal(r#"{"size": 3.0}"#).unwrap();
/// assert!(!res.valid);
/// assert_eq!(res.errors[0].field, "size");
/// ```
pub fn validate_parameters_internal(params_json: &str) -> Result<ValidationResponse, BridgeError> {
    let raw: RawParameters = serde_json::from_str(params_json)?;
    Ok(ValidationResponse::from(validate(&raw)))
}

// =============================================================================
// GENERATION
// =============================================================================

/// Generates a piece of jewelry and returns its GPU buffers.
///
/// `extra_json` may carry `chainLength`, `wireType` and `fingerSize`.
///
/// # Errors
/// Returns a JavaScript error for malformed JSON, invalid parameters, or an
/// unknown jewelry type.
///
/// # Examples
/// ```no_run
/// // In JavaScript:
/// // const mesh = generate_jewelry("earrings", "celtic", "{}", JSON.stringify({ wireType: "stud" }));
/// // console.log(mesh.vertex_count, mesh.triangle_count);
/// ```
#[wasm_bindgen]
pub fn generate_jewelry(
    jewelry_type: &str,
    pattern_type: &str,
    params_json: &str,
    extra_json: Option<String>,
) -> Result<MeshHandle, JsValue> {
    generate_jewelry_internal(jewelry_type, pattern_type, params_json, extra_json.as_deref())
        .map_err(to_js)
}

/// Host-only helper behind [`generate_jewelry`].
pub fn generate_jewelry_internal(
    jewelry_type: &str,
    pattern_type: &str,
    params_json: &str,
    extra_json: Option<&str>,
) -> Result<MeshHandle, BridgeError> {
    let geometry = generate_geometry(jewelry_type, pattern_type, params_json, extra_json)?;
    Ok(MeshHandle::from_geometry(&geometry))
}

/// Generates a piece of jewelry and returns it as ASCII STL.
///
/// `solid_name` replaces the default `Sacred_Geometry_Jewelry`.
///
/// # Errors
/// Same as [`generate_jewelry`], plus an invalid `solid_name`.
#[wasm_bindgen]
pub fn export_stl(
    jewelry_type: &str,
    pattern_type: &str,
    params_json: &str,
    extra_json: Option<String>,
    solid_name: Option<String>,
) -> Result<String, JsValue> {
    export_stl_internal(
        jewelry_type,
        pattern_type,
        params_json,
        extra_json.as_deref(),
        solid_name.as_deref(),
    )
    .map_err(to_js)
}

/// Host-only helper behind [`export_stl`].
///
/// # Examples
/// ```
/// let stl = jewelry_wasm::export_stl_internal("ring", "islamic", "{}", None, None).unwrap();
/// assert!(stl.starts_with("solid Sacred_Geometry_Jewelry\n"));
/// ```
pub fn export_stl_internal(
    jewelry_type: &str,
    pattern_type: &str,
    params_json: &str,
    extra_json: Option<&str>,
    solid_name: Option<&str>,
) -> Result<String, BridgeError> {
    let config = match solid_name {
        Some(name) => ExportConfig::new(name, STL_DECIMALS)?,
        None => ExportConfig::default(),
    };
    let geometry = generate_geometry(jewelry_type, pattern_type, params_json, extra_json)?;
    Ok(to_ascii_stl_with(&geometry.pattern, &config))
}

fn generate_geometry(
    jewelry_type: &str,
    pattern_type: &str,
    params_json: &str,
    extra_json: Option<&str>,
) -> Result<JewelryGeometry, BridgeError> {
    let extra: ExtraParams = match extra_json {
        Some(json) => serde_json::from_str(json)?,
        None => ExtraParams::default(),
    };
    let request = JewelryRequest {
        jewelry_type: jewelry_type.to_string(),
        pattern_type: pattern_type.to_string(),
        parameters: serde_json::from_str(params_json)?,
        extra,
    };
    Ok(request.generate()?)
}
