//! # Parameter Records
//!
//! [`RawParameters`] is what collaborators send: every field optional, numbers
//! untyped. [`GeometryParameters`] is what generators consume: every field
//! present and inside its declared range.

use config::constants::{
    DEFAULT_COMPLEXITY, DEFAULT_SIZE, DEFAULT_SPIRAL_TURNS, DEFAULT_SYMMETRY, DEFAULT_THICKNESS,
};
use serde::{Deserialize, Serialize};

/// Fully populated design parameters.
///
/// # Example
///
/// ```rust
/// use jewelry_params::GeometryParameters;
///
/// let params = GeometryParameters::default();
/// assert_eq!(params.symmetry, 8);
/// assert_eq!(params.spiral_turns, 3);
/// assert!(params.finger_size.is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeometryParameters {
    /// Scale factor, `[0.5, 2.0]`.
    pub size: f64,
    /// Material thickness in millimeters, `[0.1, 0.5]`.
    pub thickness: f64,
    /// Drives layer, generation and loop counts, `[0.1, 1.0]`.
    pub complexity: f64,
    /// Point or petal count, `[3, 12]`.
    pub symmetry: u32,
    /// Fibonacci spiral turns, `[1, 8]`.
    pub spiral_turns: u32,
    /// US finger size for rings, `[4, 12]` in half sizes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finger_size: Option<f64>,
}

impl Default for GeometryParameters {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            thickness: DEFAULT_THICKNESS,
            complexity: DEFAULT_COMPLEXITY,
            symmetry: DEFAULT_SYMMETRY,
            spiral_turns: DEFAULT_SPIRAL_TURNS,
            finger_size: None,
        }
    }
}

impl GeometryParameters {
    /// Returns a copy with `size` and `thickness` multiplied by the given
    /// factors. The result may fall outside the validated ranges; it is only
    /// meant for feeding generators.
    ///
    /// # Example
    ///
    /// ```rust
    /// use jewelry_params::GeometryParameters;
    ///
    /// let earring = GeometryParameters::default().scaled(0.6, 0.8);
    /// assert!((earring.size - 0.6).abs() < 1e-12);
    /// assert!((earring.thickness - 0.16).abs() < 1e-12);
    /// ```
    pub fn scaled(&self, size_factor: f64, thickness_factor: f64) -> Self {
        Self {
            size: self.size * size_factor,
            thickness: self.thickness * thickness_factor,
            ..*self
        }
    }
}

/// A parameter record as received from a collaborator.
///
/// Integer fields are carried as `f64` so that `8.5` symmetry is reported as
/// a validation error instead of failing to deserialize.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawParameters {
    pub size: Option<f64>,
    pub thickness: Option<f64>,
    pub complexity: Option<f64>,
    pub symmetry: Option<f64>,
    pub spiral_turns: Option<f64>,
    pub finger_size: Option<f64>,
}

impl From<GeometryParameters> for RawParameters {
    fn from(params: GeometryParameters) -> Self {
        Self {
            size: Some(params.size),
            thickness: Some(params.thickness),
            complexity: Some(params.complexity),
            symmetry: Some(f64::from(params.symmetry)),
            spiral_turns: Some(f64::from(params.spiral_turns)),
            finger_size: params.finger_size,
        }
    }
}
