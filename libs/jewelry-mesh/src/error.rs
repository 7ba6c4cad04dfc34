//! # Mesh Errors
//!
//! Error types for jewelry generation and export.

use jewelry_params::ValidationError;
use thiserror::Error;

/// Errors that can occur during jewelry generation and export.
#[derive(Debug, Error)]
pub enum MeshError {
    /// Unknown jewelry type. Fatal to the request.
    #[error("Unsupported jewelry type: {kind}")]
    UnsupportedType { kind: String },

    /// A generation stage produced no usable geometry.
    #[error("Degenerate geometry: {message}")]
    DegenerateGeometry { message: String },

    /// A parameter supplied alongside the validated record is out of range.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// ASCII STL input could not be read.
    #[error("Invalid STL at line {line}: {message}")]
    InvalidStl { line: usize, message: String },

    /// Writing exported bytes failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl MeshError {
    /// Creates an unsupported jewelry type error.
    pub fn unsupported(kind: impl Into<String>) -> Self {
        Self::UnsupportedType { kind: kind.into() }
    }

    /// Creates a degenerate geometry error.
    pub fn degenerate(message: impl Into<String>) -> Self {
        Self::DegenerateGeometry {
            message: message.into(),
        }
    }

    /// Creates an STL parse error.
    pub fn invalid_stl(line: usize, message: impl Into<String>) -> Self {
        Self::InvalidStl {
            line,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_names_type() {
        let err = MeshError::unsupported("bracelet");
        assert_eq!(err.to_string(), "Unsupported jewelry type: bracelet");
    }

    #[test]
    fn test_validation_is_transparent() {
        let err = MeshError::from(ValidationError::single("fingerSize", "too small"));
        assert!(err.to_string().contains("fingerSize: too small"));
    }
}
