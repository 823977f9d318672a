//! Constant field parameters for the gf2m library
//!
//! Wide constants are stored as little-endian `u64` limb arrays, ready to be
//! loaded with `Uint::from_limbs`.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod binary;

pub use binary::{GF163_DEGREE, GF163_MODULUS, REDUCTION_POLY};
