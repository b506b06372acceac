//! Weighted modulo-11 check digits.
//!
//! Both CPF and CNPJ use the same scheme: multiply each character's value by
//! a positional weight, take the sum modulo 11, and map remainders `0` and `1`
//! to `0` and anything else to `11 - r`. Characters are read as base-36
//! numerals so the alphanumeric CNPJ root shares the arithmetic with the
//! legacy all-decimal one.

/// CPF weights for the first check digit.
pub const INDIVIDUAL_FIRST_WEIGHTS: [u32; 9] = [10, 9, 8, 7, 6, 5, 4, 3, 2];

/// CPF weights for the second check digit.
pub const INDIVIDUAL_SECOND_WEIGHTS: [u32; 10] = [11, 10, 9, 8, 7, 6, 5, 4, 3, 2];

/// CNPJ weights for the first check digit.
pub const ENTITY_FIRST_WEIGHTS: [u32; 12] = [5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

/// CNPJ weights for the second check digit.
pub const ENTITY_SECOND_WEIGHTS: [u32; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

/// Numeric value of a base-36 character: `0-9` map to 0-9, `A-Z` to 10-35.
pub fn char_value(c: u8) -> Option<u32> {
    match c {
        b'0'..=b'9' => Some(u32::from(c - b'0')),
        b'A'..=b'Z' => Some(u32::from(c - b'A') + 10),
        _ => None,
    }
}

/// Compute the check digit of `chars` under `weights`.
///
/// # Panics
///
/// Panics if `chars` and `weights` differ in length or if `chars` contains a
/// byte outside `0-9A-Z`. Callers normalize their input first.
pub fn check_digit(chars: &[u8], weights: &[u32]) -> u8 {
    assert_eq!(
        chars.len(),
        weights.len(),
        "check digit input and weight table differ in length"
    );

    let sum: u32 = chars
        .iter()
        .zip(weights)
        .map(|(&c, &w)| {
            let value = char_value(c)
                .unwrap_or_else(|| panic!("character {:?} is not base-36", c as char));
            value * w
        })
        .sum();

    match sum % 11 {
        r if r < 2 => 0,
        r => (11 - r) as u8,
    }
}

/// Same as [`check_digit`], rendered as an ASCII digit.
pub(crate) fn check_char(chars: &[u8], weights: &[u32]) -> char {
    char::from(b'0' + check_digit(chars, weights))
}
