//! Error types for the affine cipher engine.

use thiserror::Error;

/// Validation failures for a transformation request, one per input field.
///
/// The three conditions are independent of each other; [`crate::validate`]
/// reports every failing field rather than stopping at the first.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CipherError {
    /// The plaintext sequence has zero length.
    #[error("plain text must not be empty")]
    EmptyPlainText,
    /// The multiplier is outside `1..=61` or shares a factor with 62.
    #[error("multiplier must be in 1..=61 and coprime with 62")]
    InvalidMultiplier,
    /// The adder is outside `1..=61`.
    #[error("adder must be in 1..=61")]
    InvalidAdder,
}

/// Domain violations of the alphabet codec.
///
/// These exist as a safety contract on direct codec callers; code that filters
/// input with [`crate::is_supported`] first never observes them.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AlphabetError {
    /// The character is not one of the 62 alphanumeric symbols.
    #[error("character {0:?} is not in the alphanumeric alphabet")]
    UnsupportedSymbol(char),
    /// The residue is outside `0..=61`.
    #[error("residue {0} is outside 0..=61")]
    ResidueOutOfRange(u8),
}
