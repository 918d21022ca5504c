//! Cipher keys and the modular-arithmetic rules that make them valid.

use crate::alphabet::MODULUS;
use crate::error::CipherError;

/// A validated (multiplier, adder) pair for the affine map mod 62.
///
/// Constructed from caller-supplied integers immediately before a
/// transformation and discarded afterwards; never persisted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Key {
    multiplier: i64,
    adder: i64,
}

impl Key {
    /// Builds a key, enforcing the validity rules of both components.
    pub fn new(multiplier: i64, adder: i64) -> Result<Self, CipherError> {
        validate_multiplier(multiplier)?;
        validate_adder(adder)?;
        Ok(Self { multiplier, adder })
    }

    /// The multiplicative component.
    #[inline]
    pub fn multiplier(&self) -> i64 {
        self.multiplier
    }

    /// The additive component.
    #[inline]
    pub fn adder(&self) -> i64 {
        self.adder
    }

    /// Applies the affine map `(a*x + b) mod 62` to a residue.
    ///
    /// Both components are at least 1 and `x` is non-negative, so the result
    /// is always in `0..=61`.
    #[inline]
    pub fn transform(&self, x: u8) -> u8 {
        ((self.multiplier * i64::from(x) + self.adder) % MODULUS) as u8
    }
}

/// Checks that `a` is in `1..=61` and coprime with 62.
///
/// Coprimality guarantees the affine map is a bijection on residues.
pub fn validate_multiplier(a: i64) -> Result<(), CipherError> {
    if (1..MODULUS).contains(&a) && gcd(a as u64, MODULUS as u64) == 1 {
        Ok(())
    } else {
        Err(CipherError::InvalidMultiplier)
    }
}

/// Checks that `b` is in `1..=61`.
///
/// Unlike the multiplier, the adder needs no coprimality: `a*x + b` is a
/// bijection in `x` for any `b` once `a` is invertible mod 62.
pub fn validate_adder(b: i64) -> Result<(), CipherError> {
    if (1..MODULUS).contains(&b) {
        Ok(())
    } else {
        Err(CipherError::InvalidAdder)
    }
}

/// Iterative Euclidean algorithm on non-negative operands.
fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}
