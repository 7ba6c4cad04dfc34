//! # Config Crate
//!
//! Centralized configuration constants for the jewelry mesh pipeline.
//! Parameter ranges, defaults, tessellation counts and export settings are
//! defined here so the validator, the generators and the exporter agree on
//! the same numbers.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{DEFAULT_SIZE, SIZE_MAX, SIZE_MIN};
//!
//! let size = 3.0;
//! let in_range = (SIZE_MIN..=SIZE_MAX).contains(&size);
//! assert!(!in_range);
//! assert!((SIZE_MIN..=SIZE_MAX).contains(&DEFAULT_SIZE));
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Browser-Safe**: No platform-specific values
//! - **Caller-Visible**: Ranges and pricing constants are a public contract

pub mod constants;
