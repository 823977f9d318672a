//! Error handling for binary-field operations

use crate::field::FieldElement;
use std::fmt;

/// The error type for binary-field operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Parameter validation error
    Parameter {
        /// Name of the invalid parameter
        name: &'static str,
        /// Reason why the parameter is invalid
        reason: &'static str,
    },

    /// Inversion failure: the element shares a nontrivial factor with the
    /// field modulus, so the extended Euclidean algorithm cannot produce an
    /// inverse for it
    NotInvertible {
        /// The element that has no inverse
        element: FieldElement,
    },
}

impl Error {
    /// Shorthand to create a Parameter error
    pub fn param(name: &'static str, reason: &'static str) -> Self {
        Error::Parameter { name, reason }
    }
}

/// Result type for binary-field operations
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parameter { name, reason } => {
                write!(f, "Invalid parameter '{}': {}", name, reason)
            }
            Error::NotInvertible { element } => {
                write!(f, "{} is not invertible", element)
            }
        }
    }
}

impl std::error::Error for Error {}

// Include the validation submodule
pub mod validate;
