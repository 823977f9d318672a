//! Constants for binary extension fields

/// Fixed reduction polynomial x^97 + 1, as little-endian `u64` limbs.
///
/// `GaloisField::new` installs this polynomial for every configured degree;
/// see `GaloisField::with_irreducible` for supplying a degree-matched
/// polynomial instead.
pub const REDUCTION_POLY: [u64; 2] = [0x1, 0x2_0000_0000];

/// Extension degree m of the GF(2^163) field used by the demo and benches
pub const GF163_DEGREE: usize = 163;

/// Masking modulus of the GF(2^163) field, as little-endian `u64` limbs.
///
/// Every field operation applies a final integer `mod p` step with this
/// value; its bit pattern is x^99 + x^98 + x^96 + x^95 + 1.
pub const GF163_MODULUS: [u64; 2] = [0x1, 0xd_8000_0000];
