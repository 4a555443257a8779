use crate::variant::VariantType;
use std::fmt;

/// Errors returned by the checked accessors of [`PropertySet`](crate::PropertySet)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyError {
    /// The requested key was not found
    KeyNotFound(String),
    /// The key exists but holds a value of another type
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },
}

impl fmt::Display for PropertyError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PropertyError::KeyNotFound(key) => write!(f, "Key not found: {}", key),
            PropertyError::TypeMismatch { expected, found } => {
                write!(f, "Type mismatch: expected {}, found {}", expected, found)
            }
        }
    }
}

impl std::error::Error for PropertyError {}

/// Errors returned when converting a [`Variant`](crate::Variant) into a concrete type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariantError {
    /// The variant holds no value
    Empty,
    /// The variant holds a different alternative
    TypeMismatch {
        expected: VariantType,
        found: VariantType,
    },
}

impl fmt::Display for VariantError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            VariantError::Empty => write!(f, "Variant is empty"),
            VariantError::TypeMismatch { expected, found } => {
                write!(f, "Variant holds {}, not {}", found, expected)
            }
        }
    }
}

impl std::error::Error for VariantError {}
