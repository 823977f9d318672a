//! Binary extension field GF(2^m) arithmetic
//!
//! This crate implements element representation, the four field operations
//! (addition, multiplication, squaring, multiplicative inversion), the
//! derived operations (exponentiation, trace), and a fixed-width bit-string
//! encoding for fields of two-power order.
//!
//! The field configuration is an immutable value created once and shared by
//! reference; every operation is a pure function of the configuration and
//! its element arguments, so a single [`GaloisField`] may be used from any
//! number of threads without coordination.
//!
//! ```
//! use gf2m_field::{FieldElement, GaloisField, Uint};
//!
//! let field = GaloisField::new(163, Uint::from_limbs(&[0x1, 0xd_8000_0000]));
//! let a = FieldElement::from_u64(0b1101);
//! let b = FieldElement::from_u64(0b1010);
//! assert_eq!(field.add(&a, &b), FieldElement::from_u64(0b0111));
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Wide unsigned integers backing field elements
pub mod uint;
pub use uint::Uint;

// Field configuration, elements, and operations
pub mod field;
pub use field::{FieldElement, GaloisField};
