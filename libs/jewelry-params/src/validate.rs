//! # Parameter Validation
//!
//! Checks a [`RawParameters`] record against the declared ranges, applies
//! defaults to absent fields and computes the price multiplier.
//!
//! Out-of-range values are reported, never clamped. Every violated field
//! produces its own [`FieldError`].

use config::constants::{
    COMPLEXITY_MAX, COMPLEXITY_MIN, DEFAULT_COMPLEXITY, DEFAULT_SIZE, DEFAULT_SPIRAL_TURNS,
    DEFAULT_SYMMETRY, DEFAULT_THICKNESS, FINGER_SIZE_MAX, FINGER_SIZE_MIN, FINGER_SIZE_STEP,
    SIZE_MAX, SIZE_MIN, SPIRAL_TURNS_MAX, SPIRAL_TURNS_MIN, SYMMETRY_MAX, SYMMETRY_MIN,
    THICKNESS_MAX, THICKNESS_MIN,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{FieldError, ValidationError};
use crate::params::{GeometryParameters, RawParameters};
use crate::pricing::price_multiplier;

/// Parameters that passed validation, with the derived price multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidatedParameters {
    pub parameters: GeometryParameters,
    pub price_multiplier: f64,
}

/// Wire shape of a validation result.
///
/// `{"valid": true, "parameters": {...}, "priceMultiplier": 1.0}` on success,
/// `{"valid": false, "errors": [{"field": ..., "message": ...}]}` on failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResponse {
    pub valid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<GeometryParameters>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_multiplier: Option<f64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<FieldError>,
}

impl From<Result<ValidatedParameters, ValidationError>> for ValidationResponse {
    fn from(result: Result<ValidatedParameters, ValidationError>) -> Self {
        match result {
            Ok(validated) => Self {
                valid: true,
                parameters: Some(validated.parameters),
                price_multiplier: Some(validated.price_multiplier),
                errors: Vec::new(),
            },
            Err(err) => Self {
                valid: false,
                parameters: None,
                price_multiplier: None,
                errors: err.errors,
            },
        }
    }
}

/// Validates a raw parameter record.
///
/// # Errors
///
/// Returns a [`ValidationError`] listing one entry per violated constraint.
///
/// # Example
///
/// ```rust
/// use jewelry_params::{validate, RawParameters};
///
/// let raw = RawParameters { size: Some(3.0), ..RawParameters::default() };
/// let err = validate(&raw).unwrap_err();
/// assert!(err.has_field("size"));
/// ```
pub fn validate(raw: &RawParameters) -> Result<ValidatedParameters, ValidationError> {
    let mut errors = Vec::new();

    let size = check_real(&mut errors, "size", raw.size, DEFAULT_SIZE, SIZE_MIN, SIZE_MAX);
    let thickness = check_real(
        &mut errors,
        "thickness",
        raw.thickness,
        DEFAULT_THICKNESS,
        THICKNESS_MIN,
        THICKNESS_MAX,
    );
    let complexity = check_real(
        &mut errors,
        "complexity",
        raw.complexity,
        DEFAULT_COMPLEXITY,
        COMPLEXITY_MIN,
        COMPLEXITY_MAX,
    );
    let symmetry = check_integer(
        &mut errors,
        "symmetry",
        raw.symmetry,
        DEFAULT_SYMMETRY,
        SYMMETRY_MIN,
        SYMMETRY_MAX,
    );
    let spiral_turns = check_integer(
        &mut errors,
        "spiralTurns",
        raw.spiral_turns,
        DEFAULT_SPIRAL_TURNS,
        SPIRAL_TURNS_MIN,
        SPIRAL_TURNS_MAX,
    );
    if let Some(error) = raw.finger_size.and_then(finger_size_errors) {
        errors.push(error);
    }
    let finger_size = raw.finger_size;

    if !errors.is_empty() {
        debug!(count = errors.len(), "parameter validation failed");
        return Err(ValidationError { errors });
    }

    let parameters = GeometryParameters {
        size,
        thickness,
        complexity,
        symmetry,
        spiral_turns,
        finger_size,
    };

    Ok(ValidatedParameters {
        parameters,
        price_multiplier: price_multiplier(&parameters),
    })
}

/// Validates a finger size supplied outside the parameter record.
///
/// # Errors
///
/// Returns a [`ValidationError`] for the `fingerSize` field when the value is
/// outside `[4, 12]` or not a whole or half size.
///
/// # Example
///
/// ```rust
/// use jewelry_params::check_finger_size;
///
/// assert_eq!(check_finger_size(6.5), Ok(6.5));
/// assert!(check_finger_size(6.3).is_err());
/// assert!(check_finger_size(13.0).is_err());
/// ```
pub fn check_finger_size(value: f64) -> Result<f64, ValidationError> {
    match finger_size_errors(value) {
        Some(error) => Err(ValidationError {
            errors: vec![error],
        }),
        None => Ok(value),
    }
}

fn finger_size_errors(value: f64) -> Option<FieldError> {
    let mut errors = Vec::new();
    check_real(
        &mut errors,
        "fingerSize",
        Some(value),
        value,
        FINGER_SIZE_MIN,
        FINGER_SIZE_MAX,
    );
    if errors.is_empty() && (value / FINGER_SIZE_STEP).fract() != 0.0 {
        errors.push(FieldError::new(
            "fingerSize",
            "Finger size must be a whole or half size",
        ));
    }
    errors.into_iter().next()
}

fn check_real(
    errors: &mut Vec<FieldError>,
    field: &str,
    value: Option<f64>,
    default: f64,
    min: f64,
    max: f64,
) -> f64 {
    let Some(value) = value else {
        return default;
    };
    if !value.is_finite() {
        errors.push(FieldError::new(field, "Expected a finite number"));
    } else if value < min {
        errors.push(FieldError::new(
            field,
            format!("Number must be greater than or equal to {min}"),
        ));
    } else if value > max {
        errors.push(FieldError::new(
            field,
            format!("Number must be less than or equal to {max}"),
        ));
    }
    value
}

fn check_integer(
    errors: &mut Vec<FieldError>,
    field: &str,
    value: Option<f64>,
    default: u32,
    min: u32,
    max: u32,
) -> u32 {
    let Some(value) = value else {
        return default;
    };
    if value.is_finite() && value.fract() != 0.0 {
        errors.push(FieldError::new(field, "Expected integer, received float"));
        return default;
    }
    let before = errors.len();
    check_real(errors, field, Some(value), value, f64::from(min), f64::from(max));
    if errors.len() > before {
        return default;
    }
    // In range and integral, so the conversion is exact.
    value as u32
}
