//! # Configuration Constants
//!
//! Centralized constants for the jewelry mesh pipeline. Parameter ranges,
//! generator proportions, tessellation counts and export settings are
//! defined here.
//!
//! ## Categories
//!
//! - **Proportion**: The golden ratio and numeric tolerances
//! - **Parameters**: Declared ranges and defaults of the parameter record
//! - **Tessellation**: Segment counts for structural hardware
//! - **Ring Sizing**: US ring size to diameter conversion
//! - **Pricing**: Reference values of the price multiplier
//! - **Export**: STL output defaults

use std::fmt;

// =============================================================================
// PROPORTION CONSTANTS
// =============================================================================

/// The golden ratio `(1 + √5) / 2`.
///
/// Used to proportion spiral growth, petal radii and chain attachment spacing.
///
/// # Example
///
/// ```rust
/// use config::constants::PHI;
///
/// assert!((PHI * PHI - PHI - 1.0).abs() < 1e-12);
/// ```
pub const PHI: f64 = 1.618_033_988_749_895;

// =============================================================================
// PARAMETER RANGES AND DEFAULTS
// =============================================================================

/// Smallest accepted scale factor.
pub const SIZE_MIN: f64 = 0.5;
/// Largest accepted scale factor.
pub const SIZE_MAX: f64 = 2.0;
/// Scale factor used when the caller omits `size`.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_SIZE;
///
/// let supplied: Option<f64> = None;
/// assert_eq!(supplied.unwrap_or(DEFAULT_SIZE), 1.0);
/// ```
pub const DEFAULT_SIZE: f64 = 1.0;

/// Smallest accepted thickness in millimeters.
pub const THICKNESS_MIN: f64 = 0.1;
/// Largest accepted thickness in millimeters.
pub const THICKNESS_MAX: f64 = 0.5;
/// Thickness used when the caller omits it.
pub const DEFAULT_THICKNESS: f64 = 0.2;

/// Smallest accepted complexity. Drives layer and generation counts.
pub const COMPLEXITY_MIN: f64 = 0.1;
/// Largest accepted complexity.
pub const COMPLEXITY_MAX: f64 = 1.0;
/// Complexity used when the caller omits it.
pub const DEFAULT_COMPLEXITY: f64 = 0.7;

/// Smallest accepted symmetry (a triangle is the smallest polygon).
pub const SYMMETRY_MIN: u32 = 3;
/// Largest accepted symmetry.
pub const SYMMETRY_MAX: u32 = 12;
/// Symmetry used when the caller omits it.
pub const DEFAULT_SYMMETRY: u32 = 8;

/// Smallest accepted number of spiral turns.
pub const SPIRAL_TURNS_MIN: u32 = 1;
/// Largest accepted number of spiral turns.
pub const SPIRAL_TURNS_MAX: u32 = 8;
/// Spiral turns used when the caller omits them.
pub const DEFAULT_SPIRAL_TURNS: u32 = 3;

/// Smallest accepted US finger size.
pub const FINGER_SIZE_MIN: f64 = 4.0;
/// Largest accepted US finger size.
pub const FINGER_SIZE_MAX: f64 = 12.0;
/// Finger size step. Sizes are whole or half sizes.
///
/// # Example
///
/// ```rust
/// use config::constants::FINGER_SIZE_STEP;
///
/// let size = 6.5_f64;
/// assert_eq!((size / FINGER_SIZE_STEP).fract(), 0.0);
/// ```
pub const FINGER_SIZE_STEP: f64 = 0.5;
/// Finger size used for rings when neither the parameters nor the extra
/// options carry one.
pub const DEFAULT_FINGER_SIZE: f64 = 7.0;

/// Chain length in inches recorded for necklaces when none is supplied.
pub const DEFAULT_CHAIN_LENGTH: f64 = 18.0;

// =============================================================================
// TESSELLATION CONSTANTS
// =============================================================================

/// Points on each Flower of Life circle.
pub const FLOWER_CIRCLE_POINTS: u32 = 12;

/// Spiral steps per turn of the Fibonacci spiral.
pub const SPIRAL_SEGMENTS_PER_TURN: u32 = 20;

/// Knot steps per Celtic loop.
pub const KNOT_SEGMENTS_PER_LOOP: u32 = 32;

/// Sides of the Celtic knot tube cross-section.
pub const KNOT_TUBE_SIDES: u32 = 8;

/// Segments of each necklace chain loop.
pub const CHAIN_LOOP_SEGMENTS: u32 = 8;

/// Steps along the earring hook wire path.
pub const HOOK_SEGMENTS: u32 = 16;

/// Sides of the earring wire and stud cross-sections.
pub const WIRE_SIDES: u32 = 6;

/// Segments around the ring band.
///
/// # Example
///
/// ```rust
/// use config::constants::RING_BAND_SEGMENTS;
///
/// // 8 triangles per band segment
/// assert_eq!(RING_BAND_SEGMENTS * 8, 256);
/// ```
pub const RING_BAND_SEGMENTS: u32 = 32;

/// Smallest planar distance used as a divisor when pattern vertices are
/// pushed out onto the ring band.
pub const MIN_REPROJECTION_DISTANCE: f64 = 0.1;

// =============================================================================
// RING SIZING
// =============================================================================

/// Inner circumference of a US size 0 ring in millimeters.
pub const RING_BASE_CIRCUMFERENCE_MM: f64 = 44.2;

/// Circumference added per US ring size in millimeters.
///
/// # Example
///
/// ```rust
/// use config::constants::{RING_BASE_CIRCUMFERENCE_MM, RING_SIZE_INCREMENT_MM};
///
/// let circumference = RING_BASE_CIRCUMFERENCE_MM + 7.0 * RING_SIZE_INCREMENT_MM;
/// let diameter = circumference / std::f64::consts::PI;
/// assert!((diameter - 19.773).abs() < 1e-3);
/// ```
pub const RING_SIZE_INCREMENT_MM: f64 = 2.56;

// =============================================================================
// PRICING
// =============================================================================

/// Thickness at which the thickness factor of the price multiplier is 1.
pub const PRICE_REFERENCE_THICKNESS: f64 = 0.2;
/// Complexity at which the complexity factor of the price multiplier is 1.
pub const PRICE_REFERENCE_COMPLEXITY: f64 = 0.5;
/// Price change per unit of complexity above the reference.
pub const PRICE_COMPLEXITY_WEIGHT: f64 = 0.3;
/// Symmetry at which the symmetry factor of the price multiplier is 1.
pub const PRICE_REFERENCE_SYMMETRY: f64 = 6.0;
/// Price change per symmetry step above the reference.
pub const PRICE_SYMMETRY_WEIGHT: f64 = 0.02;
/// Exponent applied to `size` in the price multiplier.
pub const PRICE_SIZE_EXPONENT: f64 = 1.5;

// =============================================================================
// EXPORT
// =============================================================================

/// Name written after `solid` and `endsolid` in ASCII STL output.
pub const STL_SOLID_NAME: &str = "Sacred_Geometry_Jewelry";

/// Fixed-point digits used for every number in ASCII STL output.
pub const STL_DECIMALS: usize = 6;

/// Largest accepted number of fixed-point digits.
pub const STL_MAX_DECIMALS: usize = 12;

/// Binary STL header size in bytes.
pub const STL_BINARY_HEADER_SIZE: usize = 80;

/// Export settings shared by the STL writers.
///
/// # Examples
/// ```
/// use config::constants::ExportConfig;
/// let config = ExportConfig::default();
/// assert_eq!(config.decimals, 6);
/// assert_eq!(config.solid_name, "Sacred_Geometry_Jewelry");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportConfig {
    /// Name written after `solid` / `endsolid`.
    pub solid_name: String,
    /// Fixed-point digits for every numeric field.
    pub decimals: usize,
}

impl ExportConfig {
    /// Builds an export configuration, rejecting names that would break the
    /// `solid <name>` line and precisions outside `1..=12`.
    ///
    /// # Examples
    /// ```
    /// use config::constants::ExportConfig;
    /// let cfg = ExportConfig::new("pendant", 4).expect("valid config");
    /// assert_eq!(cfg.decimals, 4);
    /// assert!(ExportConfig::new("two words", 6).is_err());
    /// ```
    pub fn new(solid_name: impl Into<String>, decimals: usize) -> Result<Self, ConfigError> {
        let solid_name = solid_name.into();
        if solid_name.is_empty() || solid_name.chars().any(char::is_whitespace) {
            return Err(ConfigError::InvalidSolidName(solid_name));
        }
        if decimals == 0 || decimals > STL_MAX_DECIMALS {
            return Err(ConfigError::InvalidDecimals(decimals));
        }
        Ok(Self {
            solid_name,
            decimals,
        })
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            solid_name: STL_SOLID_NAME.to_string(),
            decimals: STL_DECIMALS,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when the solid name is empty or contains whitespace.
    InvalidSolidName(String),
    /// Raised when the requested precision is zero or too large.
    InvalidDecimals(usize),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidSolidName(value) => {
                write!(f, "solid name must be non-empty without whitespace: {value:?}")
            }
            ConfigError::InvalidDecimals(value) => {
                write!(f, "decimals must be in 1..={STL_MAX_DECIMALS}: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests;
