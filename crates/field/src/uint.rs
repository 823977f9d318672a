//! Wide unsigned integers backing field elements
//!
//! Field operations shift intermediate values far past any fixed machine
//! width, and inversion divides integers of arbitrary width, so elements are
//! backed by a growable little-endian vector of 64-bit limbs rather than a
//! primitive integer.

use std::cmp::Ordering;
use std::ops::{BitXor, BitXorAssign, ShlAssign, ShrAssign};

const LIMB_BITS: usize = 64;

/// An arbitrary-width unsigned integer stored as little-endian 64-bit limbs.
///
/// Values are kept normalized: the limb vector never carries high zero
/// limbs, except that zero itself is a single zero limb. All constructors
/// and operations maintain this invariant, so derived equality and the
/// ordering below compare values, not representations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Uint {
    limbs: Vec<u64>,
}

impl Uint {
    /// The value 0
    pub fn zero() -> Self {
        Uint { limbs: vec![0] }
    }

    /// The value 1
    pub fn one() -> Self {
        Uint { limbs: vec![1] }
    }

    /// Create from a `u64`
    pub fn from_u64(value: u64) -> Self {
        Uint { limbs: vec![value] }
    }

    /// Create from little-endian 64-bit limbs
    pub fn from_limbs(limbs: &[u64]) -> Self {
        if limbs.is_empty() {
            return Uint::zero();
        }
        let mut out = Uint {
            limbs: limbs.to_vec(),
        };
        out.normalize();
        out
    }

    /// Check if this value is zero
    pub fn is_zero(&self) -> bool {
        self.limbs.iter().all(|&limb| limb == 0)
    }

    /// Get bit `index` (bit 0 is the least significant)
    pub fn bit(&self, index: usize) -> bool {
        let limb = index / LIMB_BITS;
        if limb >= self.limbs.len() {
            return false;
        }
        (self.limbs[limb] >> (index % LIMB_BITS)) & 1 == 1
    }

    /// Set bit `index` to one, growing the value as needed
    pub fn set_bit(&mut self, index: usize) {
        let limb = index / LIMB_BITS;
        if limb >= self.limbs.len() {
            self.limbs.resize(limb + 1, 0);
        }
        self.limbs[limb] |= 1 << (index % LIMB_BITS);
    }

    /// Number of significant bits; zero has bit length 0
    pub fn bit_len(&self) -> usize {
        if self.is_zero() {
            return 0;
        }
        let top = self.limbs[self.limbs.len() - 1];
        (self.limbs.len() - 1) * LIMB_BITS + (LIMB_BITS - top.leading_zeros() as usize)
    }

    /// Add two values
    pub fn add(&self, other: &Uint) -> Uint {
        let len = self.limbs.len().max(other.limbs.len());
        let mut limbs = Vec::with_capacity(len + 1);
        let mut carry = 0u128;
        for i in 0..len {
            let a = *self.limbs.get(i).unwrap_or(&0) as u128;
            let b = *other.limbs.get(i).unwrap_or(&0) as u128;
            let sum = a + b + carry;
            limbs.push(sum as u64);
            carry = sum >> LIMB_BITS;
        }
        if carry != 0 {
            limbs.push(carry as u64);
        }
        let mut out = Uint { limbs };
        out.normalize();
        out
    }

    /// Subtract `other` from `self`.
    ///
    /// Callers must ensure `self >= other`; the difference of a smaller
    /// value wraps and is meaningless.
    pub fn sub(&self, other: &Uint) -> Uint {
        debug_assert!(self >= other, "subtraction underflow");
        let mut limbs = Vec::with_capacity(self.limbs.len());
        let mut borrow = 0u64;
        for i in 0..self.limbs.len() {
            let b = *other.limbs.get(i).unwrap_or(&0);
            let (diff, underflow) = self.limbs[i].overflowing_sub(b);
            let (diff, underflow2) = diff.overflowing_sub(borrow);
            borrow = (underflow || underflow2) as u64;
            limbs.push(diff);
        }
        let mut out = Uint { limbs };
        out.normalize();
        out
    }

    /// Multiply two values (schoolbook)
    pub fn mul(&self, other: &Uint) -> Uint {
        if self.is_zero() || other.is_zero() {
            return Uint::zero();
        }
        let mut limbs = vec![0u64; self.limbs.len() + other.limbs.len()];
        for (i, &a) in self.limbs.iter().enumerate() {
            let mut carry = 0u128;
            for (j, &b) in other.limbs.iter().enumerate() {
                let t = limbs[i + j] as u128 + (a as u128) * (b as u128) + carry;
                limbs[i + j] = t as u64;
                carry = t >> LIMB_BITS;
            }
            limbs[i + other.limbs.len()] = carry as u64;
        }
        let mut out = Uint { limbs };
        out.normalize();
        out
    }

    /// Divide by `divisor`, returning `(quotient, remainder)`.
    ///
    /// Shift-subtract long division over the dividend's bits.
    ///
    /// # Panics
    ///
    /// Panics if `divisor` is zero.
    pub fn div_rem(&self, divisor: &Uint) -> (Uint, Uint) {
        assert!(!divisor.is_zero(), "division by zero");
        if self < divisor {
            return (Uint::zero(), self.clone());
        }
        let mut quotient = Uint::zero();
        let mut remainder = Uint::zero();
        for index in (0..self.bit_len()).rev() {
            remainder <<= 1;
            if self.bit(index) {
                remainder.set_bit(0);
            }
            if remainder >= *divisor {
                remainder = remainder.sub(divisor);
                quotient.set_bit(index);
            }
        }
        (quotient, remainder)
    }

    /// Reduce modulo `modulus`.
    ///
    /// # Panics
    ///
    /// Panics if `modulus` is zero.
    pub fn rem(&self, modulus: &Uint) -> Uint {
        if self < modulus {
            return self.clone();
        }
        self.div_rem(modulus).1
    }

    /// Render as a minimal string of binary digits; zero renders as `"0"`
    pub fn to_binary_string(&self) -> String {
        if self.is_zero() {
            return "0".to_string();
        }
        let mut out = String::with_capacity(self.bit_len());
        for index in (0..self.bit_len()).rev() {
            out.push(if self.bit(index) { '1' } else { '0' });
        }
        out
    }

    /// Parse a string of binary digits.
    ///
    /// Returns `None` for an empty string or any character other than
    /// `'0'`/`'1'`. The digit count is not bounded.
    pub fn from_binary_str(digits: &str) -> Option<Uint> {
        if digits.is_empty() {
            return None;
        }
        let mut value = Uint::zero();
        for ch in digits.chars() {
            value <<= 1;
            match ch {
                '0' => {}
                '1' => value.set_bit(0),
                _ => return None,
            }
        }
        Some(value)
    }

    /// Remove high zero limbs, keeping at least one limb
    fn normalize(&mut self) {
        while self.limbs.len() > 1 && self.limbs.last() == Some(&0) {
            self.limbs.pop();
        }
    }
}

impl Ord for Uint {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.limbs.len().cmp(&other.limbs.len()) {
            Ordering::Equal => {
                for (a, b) in self.limbs.iter().rev().zip(other.limbs.iter().rev()) {
                    match a.cmp(b) {
                        Ordering::Equal => continue,
                        ord => return ord,
                    }
                }
                Ordering::Equal
            }
            ord => ord,
        }
    }
}

impl PartialOrd for Uint {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl BitXorAssign<&Uint> for Uint {
    fn bitxor_assign(&mut self, rhs: &Uint) {
        if self.limbs.len() < rhs.limbs.len() {
            self.limbs.resize(rhs.limbs.len(), 0);
        }
        for (limb, &other) in self.limbs.iter_mut().zip(rhs.limbs.iter()) {
            *limb ^= other;
        }
        self.normalize();
    }
}

impl BitXor for &Uint {
    type Output = Uint;

    fn bitxor(self, rhs: &Uint) -> Uint {
        let mut out = self.clone();
        out ^= rhs;
        out
    }
}

impl ShlAssign<usize> for Uint {
    fn shl_assign(&mut self, shift: usize) {
        if shift == 0 || self.is_zero() {
            return;
        }
        let limb_shift = shift / LIMB_BITS;
        let bit_shift = shift % LIMB_BITS;
        let old = std::mem::take(&mut self.limbs);
        let mut limbs = vec![0u64; old.len() + limb_shift + 1];
        if bit_shift == 0 {
            limbs[limb_shift..limb_shift + old.len()].copy_from_slice(&old);
        } else {
            let mut carry = 0u64;
            for (i, &limb) in old.iter().enumerate() {
                limbs[i + limb_shift] = (limb << bit_shift) | carry;
                carry = limb >> (LIMB_BITS - bit_shift);
            }
            limbs[old.len() + limb_shift] = carry;
        }
        self.limbs = limbs;
        self.normalize();
    }
}

impl ShrAssign<usize> for Uint {
    fn shr_assign(&mut self, shift: usize) {
        if shift == 0 || self.is_zero() {
            return;
        }
        let limb_shift = shift / LIMB_BITS;
        let bit_shift = shift % LIMB_BITS;
        if limb_shift >= self.limbs.len() {
            self.limbs = vec![0];
            return;
        }
        let mut limbs: Vec<u64> = self.limbs[limb_shift..].to_vec();
        if bit_shift > 0 {
            let mut carry = 0u64;
            for limb in limbs.iter_mut().rev() {
                let next_carry = *limb << (LIMB_BITS - bit_shift);
                *limb = (*limb >> bit_shift) | carry;
                carry = next_carry;
            }
        }
        self.limbs = limbs;
        self.normalize();
    }
}
