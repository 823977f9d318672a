//! # gf2m
//!
//! Arithmetic over binary extension fields GF(2^m).
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! gf2m = "0.1"
//! ```
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from the member
//! crates:
//!
//! - [`gf2m-field`]: the arithmetic core (field configuration, elements,
//!   operations, bit-string encoding)
//! - [`gf2m-params`]: constant field parameters
//!
//! [`gf2m-field`]: https://crates.io/crates/gf2m-field
//! [`gf2m-params`]: https://crates.io/crates/gf2m-params

pub use gf2m_field as field;
pub use gf2m_params as params;

/// Common imports for gf2m users
pub mod prelude {
    pub use gf2m_field::{Error, FieldElement, GaloisField, Result, Uint};
    pub use gf2m_params::{GF163_DEGREE, GF163_MODULUS, REDUCTION_POLY};
}
