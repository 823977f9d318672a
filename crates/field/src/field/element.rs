//! Field element value type

use crate::uint::Uint;
use std::fmt;

/// An element of a binary extension field.
///
/// The element is a nonnegative integer whose bit i is the coefficient of
/// x^i in the corresponding GF(2) polynomial. Wrapping the integer in a
/// dedicated type keeps field elements from being mixed up with plain
/// integers such as exponents or moduli; an element has no identity beyond
/// its bit pattern.
///
/// Elements carry no reference to a field: width is not checked anywhere,
/// and an element wider than the field degree flows through every operation
/// unchanged. Keeping elements inside the field is up to the caller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldElement(Uint);

impl FieldElement {
    /// Wrap an integer value as a field element
    pub fn new(value: Uint) -> Self {
        FieldElement(value)
    }

    /// Create an element from a `u64`
    pub fn from_u64(value: u64) -> Self {
        FieldElement(Uint::from_u64(value))
    }

    /// Check if this element is zero
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Borrow the underlying integer value
    pub fn as_uint(&self) -> &Uint {
        &self.0
    }

    /// Unwrap the underlying integer value
    pub fn into_uint(self) -> Uint {
        self.0
    }
}

impl From<Uint> for FieldElement {
    fn from(value: Uint) -> Self {
        FieldElement::new(value)
    }
}

impl From<u64> for FieldElement {
    fn from(value: u64) -> Self {
        FieldElement::from_u64(value)
    }
}

impl fmt::Display for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0b{}", self.0.to_binary_string())
    }
}
