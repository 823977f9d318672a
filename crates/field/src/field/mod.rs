//! Binary extension field GF(2^m) arithmetic
//!
//! A field is described by an immutable configuration: the extension degree
//! m, the masking modulus p applied as a final integer `mod p` step after
//! every operation, and the reduction polynomial folded in (by XOR) whenever
//! carry-less work pushes a value across bit m.
//!
//! Two construction paths exist and are never mixed:
//!
//! - [`GaloisField::new`] installs the fixed reduction polynomial x^97 + 1
//!   for every degree, without validation.
//! - [`GaloisField::with_irreducible`] takes a caller-supplied polynomial
//!   and requires its degree to equal the field degree.
//!
//! Operations treat elements as plain nonnegative integers of unbounded
//! width; nothing rejects an element wider than the degree.

mod element;
pub use element::FieldElement;


use crate::error::{validate, Error, Result};
use crate::uint::Uint;
use gf2m_params::REDUCTION_POLY;

/// Configuration of a binary extension field GF(2^m).
///
/// The configuration is created once and never mutated; every operation is
/// a pure function of the configuration and its element arguments, so a
/// shared instance is safe to use from concurrent callers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GaloisField {
    /// Extension degree m
    degree: usize,
    /// Masking modulus p
    modulus: Uint,
    /// Polynomial XORed in when a shift crosses bit `degree`
    reduction_poly: Uint,
}

impl GaloisField {
    /// Create a field of degree `m` with masking modulus `p`.
    ///
    /// The reduction polynomial is always the fixed constant x^97 + 1
    /// ([`REDUCTION_POLY`]), whatever `m` is. Degrees other than 97 are
    /// accepted unchecked and yield a field whose reduction step never
    /// clears bit m; use [`GaloisField::with_irreducible`] to supply a
    /// degree-matched polynomial instead.
    pub fn new(degree: usize, modulus: Uint) -> Self {
        GaloisField {
            degree,
            modulus,
            reduction_poly: Uint::from_limbs(&REDUCTION_POLY),
        }
    }

    /// Create a field of degree `m` with a caller-supplied reduction
    /// polynomial.
    ///
    /// The polynomial must have degree exactly `m` (bit length m + 1) and
    /// the modulus must be nonzero; no fallback to the fixed constant
    /// happens on this path.
    pub fn with_irreducible(degree: usize, modulus: Uint, reduction_poly: Uint) -> Result<Self> {
        validate::parameter(!modulus.is_zero(), "modulus", "must be nonzero")?;
        validate::parameter(
            reduction_poly.bit_len() == degree + 1,
            "reduction polynomial",
            "degree must equal the field degree",
        )?;
        Ok(GaloisField {
            degree,
            modulus,
            reduction_poly,
        })
    }

    /// The extension degree m
    pub fn degree(&self) -> usize {
        self.degree
    }

    /// The masking modulus p
    pub fn modulus(&self) -> &Uint {
        &self.modulus
    }

    /// The reduction polynomial
    pub fn reduction_poly(&self) -> &Uint {
        &self.reduction_poly
    }

    /// The additive identity, 0
    pub fn zero(&self) -> FieldElement {
        FieldElement::from_u64(0)
    }

    /// The multiplicative identity, 1
    pub fn one(&self) -> FieldElement {
        FieldElement::from_u64(1)
    }

    /// Add two elements: XOR, then the final masking step.
    ///
    /// The mask is a no-op whenever `a ^ b < p`, which holds for all
    /// in-range elements; it only bites on oversized inputs.
    pub fn add(&self, a: &FieldElement, b: &FieldElement) -> FieldElement {
        let sum = a.as_uint() ^ b.as_uint();
        self.mask(sum)
    }

    /// Multiply two elements by carry-less double-and-accumulate.
    ///
    /// Each round accumulates `a` when the low bit of `b` is set, doubles
    /// `a`, folds the reduction polynomial in once if the doubling crossed
    /// bit m, and halves `b`. The loop stops as soon as either operand is
    /// exhausted, so a zero `a` drops any bits remaining in `b`.
    pub fn multiply(&self, a: &FieldElement, b: &FieldElement) -> FieldElement {
        let mut a = a.as_uint().clone();
        let mut b = b.as_uint().clone();
        let mut product = Uint::zero();
        while !a.is_zero() && !b.is_zero() {
            if b.bit(0) {
                product ^= &a;
            }
            a <<= 1;
            if a.bit(self.degree) {
                a ^= &self.reduction_poly;
            }
            b >>= 1;
        }
        self.mask(product)
    }

    /// Multiply two elements, then fold the product with 2·(m−1)
    /// shift-reduce rounds before the final masking step.
    pub fn multiply_with_reduction(&self, a: &FieldElement, b: &FieldElement) -> FieldElement {
        let product = self.multiply(a, b);
        let rounds = 2 * self.degree.saturating_sub(1);
        let folded = self.shift_reduce(product.into_uint(), rounds);
        self.mask(folded)
    }

    /// Square an element.
    ///
    /// Spreads bits 0..m of the input to even positions, XORs the original
    /// value into the spread, runs (m−1) shift-reduce rounds, and masks.
    pub fn square(&self, a: &FieldElement) -> FieldElement {
        let value = a.as_uint();
        let mut spread = Uint::zero();
        for i in 0..self.degree {
            if value.bit(i) {
                spread.set_bit(2 * i);
            }
        }
        spread ^= value;
        let folded = self.shift_reduce(spread, self.degree.saturating_sub(1));
        self.mask(folded)
    }

    /// Invert an element with the extended Euclidean algorithm over plain
    /// integers.
    ///
    /// The remainder pair starts at (p, a) and the algorithm runs on
    /// ordinary integer division, not on GF(2) polynomials; the Bézout
    /// coefficient is tracked modulo p, which matches normalizing a signed
    /// coefficient into 0..p at the end. The result t satisfies
    /// `(t * a) mod p == 1` (integer multiplication) whenever
    /// gcd(a, p) = 1.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotInvertible`] carrying the element when the
    /// terminal remainder exceeds 1, including for the zero element.
    pub fn inverse(&self, a: &FieldElement) -> Result<FieldElement> {
        let p = &self.modulus;
        let mut t = Uint::zero();
        let mut new_t = Uint::one();
        let mut r = p.clone();
        let mut new_r = a.as_uint().clone();

        while !new_r.is_zero() {
            let (quotient, next_r) = r.div_rem(&new_r);
            let next_t = t.add(p).sub(&quotient.mul(&new_t).rem(p)).rem(p);
            t = new_t;
            new_t = next_t;
            r = new_r;
            new_r = next_r;
        }

        if r > Uint::one() {
            return Err(Error::NotInvertible { element: a.clone() });
        }
        Ok(self.mask(t))
    }

    /// Raise an element to the power `n` by square-and-multiply, walking
    /// `n` from its least significant bit upward.
    ///
    /// Set bits multiply the accumulator with [`GaloisField::multiply`];
    /// the base advances with [`GaloisField::square`] every round.
    pub fn power(&self, a: &FieldElement, n: &Uint) -> FieldElement {
        let mut result = self.one();
        let mut base = a.clone();
        let mut n = n.clone();
        while !n.is_zero() {
            if n.bit(0) {
                result = self.multiply(&result, &base);
            }
            base = self.square(&base);
            n >>= 1;
        }
        self.mask(result.into_uint())
    }

    /// Trace of an element: the XOR-accumulated sum of (m−1) repeated
    /// self-multiplications a, a·a, (a·a)·(a·a), …
    ///
    /// Each step goes through [`GaloisField::multiply`] with the element as
    /// both operands, never through [`GaloisField::square`]; the two
    /// routines reduce differently and are not interchangeable here.
    pub fn trace(&self, a: &FieldElement) -> FieldElement {
        let mut acc = a.as_uint().clone();
        let mut a = a.clone();
        for _ in 1..self.degree {
            a = self.multiply(&a, &a);
            acc ^= a.as_uint();
        }
        self.mask(acc)
    }

    /// Encode an element as a bit string of length m, most significant bit
    /// first, zero-padded on the left.
    ///
    /// An element wider than m bits yields a string longer than m; nothing
    /// is truncated.
    pub fn encode(&self, a: &FieldElement) -> String {
        format!("{:0>width$}", a.as_uint().to_binary_string(), width = self.degree)
    }

    /// Decode a bit string into an element.
    ///
    /// The string is read as a base-2 integer of any length; no length
    /// check against m is performed.
    ///
    /// # Errors
    ///
    /// Returns a parameter error for an empty string or for characters
    /// other than binary digits.
    pub fn decode(&self, digits: &str) -> Result<FieldElement> {
        Uint::from_binary_str(digits)
            .map(FieldElement::new)
            .ok_or_else(|| Error::param("bit string", "expected a non-empty string of binary digits"))
    }

    /// Run `rounds` shift-reduce rounds: fold the reduction polynomial in
    /// when bit m is set, then shift left by one.
    fn shift_reduce(&self, mut value: Uint, rounds: usize) -> Uint {
        for _ in 0..rounds {
            if value.bit(self.degree) {
                value ^= &self.reduction_poly;
            }
            value <<= 1;
        }
        value
    }

    /// The final masking step: reduce an integer value `mod p` and wrap it
    /// as an element
    fn mask(&self, value: Uint) -> FieldElement {
        FieldElement::new(value.rem(&self.modulus))
    }
}
