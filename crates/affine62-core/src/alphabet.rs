//! Bijective codec between the 62 alphanumeric symbols and residues 0-61.
//!
//! The alphabet interleaves case: even residues are uppercase letters
//! (0 -> 'A', 2 -> 'B', ..., 50 -> 'Z'), odd residues are lowercase letters
//! (1 -> 'a', 3 -> 'b', ..., 51 -> 'z'), and 52..=61 are the digits '0'..='9'.

use crate::error::AlphabetError;

/// Size of the alphabet, and the modulus of the affine map.
pub const MODULUS: i64 = 62;

/// Returns whether `c` is one of the 62 symbols the codec covers.
#[inline]
pub fn is_supported(c: char) -> bool {
    c.is_ascii_alphanumeric()
}

/// Returns the residue 0..=61 of an alphanumeric symbol.
///
/// Fails with [`AlphabetError::UnsupportedSymbol`] for any other character.
#[inline]
pub fn residue_of(c: char) -> Result<u8, AlphabetError> {
    match c {
        'A'..='Z' => Ok((c as u8 - b'A') * 2),
        'a'..='z' => Ok((c as u8 - b'a') * 2 + 1),
        '0'..='9' => Ok(c as u8 - b'0' + 52),
        _ => Err(AlphabetError::UnsupportedSymbol(c)),
    }
}

/// Returns the symbol for a residue 0..=61; exact inverse of [`residue_of`].
///
/// Fails with [`AlphabetError::ResidueOutOfRange`] outside that range. The
/// affine map reduces its output mod 62, so its callers never hit this case.
#[inline]
pub fn char_of(v: u8) -> Result<char, AlphabetError> {
    match v {
        0..=50 if v % 2 == 0 => Ok((b'A' + v / 2) as char),
        1..=51 => Ok((b'a' + (v - 1) / 2) as char),
        52..=61 => Ok((b'0' + (v - 52)) as char),
        _ => Err(AlphabetError::ResidueOutOfRange(v)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interleaved_case_layout() {
        assert_eq!(residue_of('A'), Ok(0));
        assert_eq!(residue_of('a'), Ok(1));
        assert_eq!(residue_of('B'), Ok(2));
        assert_eq!(residue_of('b'), Ok(3));
        assert_eq!(residue_of('Z'), Ok(50));
        assert_eq!(residue_of('z'), Ok(51));
        assert_eq!(residue_of('0'), Ok(52));
        assert_eq!(residue_of('9'), Ok(61));
    }

    #[test]
    fn round_trip_over_full_domain() {
        for c in ('A'..='Z').chain('a'..='z').chain('0'..='9') {
            let v = residue_of(c).unwrap();
            assert!(v <= 61);
            assert_eq!(char_of(v), Ok(c));
        }
        for v in 0..62u8 {
            let c = char_of(v).unwrap();
            assert_eq!(residue_of(c), Ok(v));
        }
    }

    #[test]
    fn residues_are_distinct() {
        let mut seen = [false; 62];
        for c in ('A'..='Z').chain('a'..='z').chain('0'..='9') {
            let v = residue_of(c).unwrap() as usize;
            assert!(!seen[v], "residue {v} assigned twice");
            seen[v] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn rejects_non_alphanumeric() {
        for c in [' ', '&', '_', '!', '\n', 'é', '£'] {
            assert!(!is_supported(c));
            assert_eq!(residue_of(c), Err(AlphabetError::UnsupportedSymbol(c)));
        }
    }

    #[test]
    fn rejects_out_of_range_residues() {
        for v in [62u8, 63, 100, u8::MAX] {
            assert_eq!(char_of(v), Err(AlphabetError::ResidueOutOfRange(v)));
        }
    }
}
