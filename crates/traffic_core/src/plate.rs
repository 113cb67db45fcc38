//! Synthetic license-plate strings for simulated vehicles.

use rand::Rng;

const LETTERS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &[u8] = b"0123456789";

/// Generates a plate in the fixed `AAA-111` format.
pub fn random_plate(rng: &mut impl Rng) -> String {
    let mut plate = String::with_capacity(7);
    for _ in 0..3 {
        plate.push(LETTERS[rng.gen_range(0..LETTERS.len())] as char);
    }
    plate.push('-');
    for _ in 0..3 {
        plate.push(DIGITS[rng.gen_range(0..DIGITS.len())] as char);
    }
    plate
}

/// True when `plate` matches `[A-Z]{3}-[0-9]{3}` exactly.
pub fn is_valid_plate(plate: &str) -> bool {
    let bytes = plate.as_bytes();
    bytes.len() == 7
        && bytes[..3].iter().all(|b| b.is_ascii_uppercase())
        && bytes[3] == b'-'
        && bytes[4..].iter().all(|b| b.is_ascii_digit())
}
