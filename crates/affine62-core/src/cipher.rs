//! Character-by-character affine transformation of plaintext.

use crate::alphabet;
use crate::error::CipherError;
use crate::key::{validate_adder, validate_multiplier, Key};

/// Checks that the plaintext is non-empty.
pub fn validate_plaintext(plaintext: &str) -> Result<(), CipherError> {
    if plaintext.is_empty() {
        Err(CipherError::EmptyPlainText)
    } else {
        Ok(())
    }
}

/// Reports every failing field of a transformation request.
///
/// Violations are listed in a fixed order: plaintext, multiplier, adder. An
/// empty vector means the request is valid. The three checks are independent,
/// so a front end can surface all of them at once instead of stopping at the
/// first (`(0, 0, "")` yields all three).
pub fn validate(plaintext: &str, multiplier: i64, adder: i64) -> Vec<CipherError> {
    let mut violations = Vec::new();
    if let Err(e) = validate_plaintext(plaintext) {
        violations.push(e);
    }
    if let Err(e) = validate_multiplier(multiplier) {
        violations.push(e);
    }
    if let Err(e) = validate_adder(adder) {
        violations.push(e);
    }
    violations
}

/// Encodes `plaintext` with the affine map `(multiplier * x + adder) mod 62`.
///
/// All validations run before any transformation work; the first violation
/// (in plaintext, multiplier, adder order) is returned as the error. Each
/// alphanumeric character is substituted through the codec and the affine
/// map; every other character passes through unchanged, so the output always
/// has exactly the input's length. Pure and deterministic.
pub fn encode(plaintext: &str, multiplier: i64, adder: i64) -> Result<String, CipherError> {
    if let Some(&first) = validate(plaintext, multiplier, adder).first() {
        return Err(first);
    }
    let key = Key::new(multiplier, adder)?;
    Ok(plaintext.chars().map(|c| substitute(c, &key)).collect())
}

fn substitute(c: char, key: &Key) -> char {
    match alphabet::residue_of(c) {
        Ok(x) => {
            let y = key.transform(x);
            alphabet::char_of(y).expect("affine output is reduced mod 62")
        }
        Err(_) => c,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::{char_of, is_supported, residue_of, MODULUS};
    use rand::seq::SliceRandom;
    use rand::Rng;

    #[test]
    fn encodes_reference_vectors() {
        assert_eq!(encode("Cat & Dog", 5, 8).unwrap(), "Ogi & Tof");
        assert_eq!(
            encode("Up with the White And Gold!", 1, 1).unwrap(),
            "uQ XJUI UIF wIJUF aOE gPME!"
        );
        assert_eq!(encode("abcdefg", 5, 1).unwrap(), "DINSX4C");
        assert_eq!(encode("__trigger__", 5, 1).unwrap(), "__F0MCCX0__");
        assert_eq!(encode("Panda Cat", 23, 1).unwrap(), "eMBTM pMP");
    }

    #[test]
    fn rejects_each_invalid_field() {
        assert_eq!(encode("", 5, 8), Err(CipherError::EmptyPlainText));
        assert_eq!(encode("Cat", 4, 8), Err(CipherError::InvalidMultiplier));
        assert_eq!(encode("Cat", 31, 8), Err(CipherError::InvalidMultiplier));
        assert_eq!(encode("Cat", 5, 0), Err(CipherError::InvalidAdder));
        assert_eq!(encode("Cat", 5, 62), Err(CipherError::InvalidAdder));
    }

    #[test]
    fn validate_reports_all_failing_fields() {
        assert_eq!(
            validate("", 0, 0),
            vec![
                CipherError::EmptyPlainText,
                CipherError::InvalidMultiplier,
                CipherError::InvalidAdder,
            ]
        );
        assert_eq!(
            validate("Cat", 2, 99),
            vec![CipherError::InvalidMultiplier, CipherError::InvalidAdder]
        );
        assert!(validate("Cat & Dog", 5, 8).is_empty());
    }

    #[test]
    fn no_transformation_on_invalid_key() {
        // Validation gates the transformer entirely.
        assert!(encode("would be transformed", 0, 8).is_err());
        assert!(encode("would be transformed", 5, -1).is_err());
    }

    #[test]
    fn preserves_length_and_passthrough_positions() {
        let input = "Hello, World! 123 ~ €";
        let output = encode(input, 15, 7).unwrap();
        assert_eq!(output.chars().count(), input.chars().count());
        for (p, c) in input.chars().zip(output.chars()) {
            if is_supported(p) {
                assert!(is_supported(c));
            } else {
                assert_eq!(p, c);
            }
        }
    }

    #[test]
    fn is_deterministic() {
        let first = encode("Cat & Dog", 5, 8).unwrap();
        let second = encode("Cat & Dog", 5, 8).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn identity_multiplier_shifts_by_adder() {
        // a = 1 degenerates to a pure shift; 'A' (0) + 1 -> 'a' (1).
        assert_eq!(encode("A", 1, 1).unwrap(), "a");
        assert_eq!(encode("9", 1, 1).unwrap(), "A");
    }

    fn modular_inverse(a: i64) -> i64 {
        (1..MODULUS)
            .find(|candidate| (a * candidate) % MODULUS == 1)
            .expect("valid multipliers are invertible mod 62")
    }

    #[test]
    fn random_keys_are_invertible() {
        let valid_multipliers: Vec<i64> =
            (1..62).filter(|a| validate_multiplier(*a).is_ok()).collect();
        let mut rng = rand::thread_rng();

        for _ in 0..100 {
            let a = *valid_multipliers.choose(&mut rng).unwrap();
            let b = rng.gen_range(1..62i64);
            let len = rng.gen_range(1..=64usize);
            let plaintext: String = (0..len)
                .map(|_| rng.gen_range(b' '..=b'~') as char)
                .collect();

            let ciphertext = encode(&plaintext, a, b).unwrap();
            assert_eq!(ciphertext.len(), plaintext.len());

            let a_inv = modular_inverse(a);
            let recovered: String = ciphertext
                .chars()
                .map(|c| match residue_of(c) {
                    Ok(y) => {
                        let x = (a_inv * (i64::from(y) - b)).rem_euclid(MODULUS);
                        char_of(x as u8).unwrap()
                    }
                    Err(_) => c,
                })
                .collect();
            assert_eq!(recovered, plaintext);
        }
    }
}
