//! Demonstrates encoding a phrase and inspecting validation failures.

use affine62_core::{encode, validate};

fn main() {
    // Key (5, 8): 5 is odd and not 31, so it is coprime with 62.
    let ciphertext = encode("Cat & Dog", 5, 8).expect("key is valid");
    assert_eq!(ciphertext, "Ogi & Tof");
    println!("\"Cat & Dog\" with key (5, 8) -> {ciphertext:?}");

    // An all-invalid request reports every failing field.
    let violations = validate("", 0, 0);
    for violation in &violations {
        println!("violation: {violation}");
    }
    assert_eq!(violations.len(), 3);
}
