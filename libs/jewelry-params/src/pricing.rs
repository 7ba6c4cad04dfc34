//! # Price Estimation
//!
//! The price multiplier is a caller-visible contract: checkout computes
//! `base_price × price_multiplier`, so the formula below must not drift.
//!
//! ```text
//! size^1.5 · (thickness / 0.2) · (1 + (complexity − 0.5) · 0.3) · (1 + (symmetry − 6) · 0.02)
//! ```
//!
//! rounded to two decimals.

use config::constants::{
    PRICE_COMPLEXITY_WEIGHT, PRICE_REFERENCE_COMPLEXITY, PRICE_REFERENCE_SYMMETRY,
    PRICE_REFERENCE_THICKNESS, PRICE_SIZE_EXPONENT, PRICE_SYMMETRY_WEIGHT,
};

use crate::params::GeometryParameters;

/// Computes the price multiplier for validated parameters.
///
/// # Example
///
/// ```rust
/// use jewelry_params::{price_multiplier, GeometryParameters};
///
/// let params = GeometryParameters {
///     size: 1.0,
///     thickness: 0.2,
///     complexity: 0.5,
///     symmetry: 6,
///     ..GeometryParameters::default()
/// };
/// assert_eq!(price_multiplier(&params), 1.0);
/// ```
pub fn price_multiplier(params: &GeometryParameters) -> f64 {
    let material =
        params.size.powf(PRICE_SIZE_EXPONENT) * (params.thickness / PRICE_REFERENCE_THICKNESS);
    let print_time =
        1.0 + (params.complexity - PRICE_REFERENCE_COMPLEXITY) * PRICE_COMPLEXITY_WEIGHT;
    let detail =
        1.0 + (f64::from(params.symmetry) - PRICE_REFERENCE_SYMMETRY) * PRICE_SYMMETRY_WEIGHT;

    round_cents(material * print_time * detail)
}

/// Rounds half-up to two decimals.
fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
