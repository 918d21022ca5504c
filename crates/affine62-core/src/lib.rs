//! Affine cipher engine over the 62-symbol alphanumeric alphabet.
//!
//! The engine substitutes each alphanumeric character of its input through the
//! affine map `y = (a*x + b) mod 62`, where `x` is the character's residue in
//! a fixed interleaved-case alphabet, and passes every other character through
//! unchanged. It provides:
//! - A bijective codec between the 62 symbols `{A-Z, a-z, 0-9}` and residues 0-61.
//! - Key validation derived from modular arithmetic (the multiplier must be
//!   coprime with 62 for the map to be a bijection).
//! - The forward character-by-character transformation.
//!
//! The engine is stateless and pure: it performs no I/O, holds no shared
//! mutable data, and identical inputs always produce identical output. No
//! decode operation is exposed, although the mapping is invertible for every
//! valid key.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod alphabet;
mod cipher;
mod error;
mod key;

pub use crate::alphabet::{char_of, is_supported, residue_of, MODULUS};
pub use crate::cipher::{encode, validate, validate_plaintext};
pub use crate::error::{AlphabetError, CipherError};
pub use crate::key::{validate_adder, validate_multiplier, Key};
