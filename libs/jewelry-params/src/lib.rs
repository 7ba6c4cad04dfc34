//! # Jewelry Params
//!
//! The parameter contract of the jewelry pipeline.
//!
//! ## Architecture
//!
//! ```text
//! RawParameters (caller JSON) → validate → ValidatedParameters
//!                                           ├─ GeometryParameters → jewelry-mesh
//!                                           └─ price multiplier  → checkout
//! ```
//!
//! Defaults are applied once, here. Everything downstream consumes the fully
//! populated [`GeometryParameters`].
//!
//! ## Usage
//!
//! ```rust
//! use jewelry_params::{validate, RawParameters};
//!
//! let raw = RawParameters {
//!     size: Some(1.0),
//!     thickness: Some(0.2),
//!     complexity: Some(0.5),
//!     symmetry: Some(6.0),
//!     ..RawParameters::default()
//! };
//! let validated = validate(&raw).unwrap();
//! assert_eq!(validated.price_multiplier, 1.0);
//! ```

pub mod error;
pub mod params;
pub mod pricing;
pub mod validate;

pub use error::{FieldError, ValidationError};
pub use params::{GeometryParameters, RawParameters};
pub use pricing::price_multiplier;
pub use validate::{check_finger_size, validate, ValidatedParameters, ValidationResponse};
