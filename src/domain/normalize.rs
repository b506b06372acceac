//! Extraction of fixed-length candidate strings from free-form input.

use crate::error::NormalizeError;
use std::fmt;

/// A fixed-length string of characters drawn from `0-9` or `0-9A-Z`.
///
/// Only produced by [`extract_digits`] and [`extract_alnum`], so its length
/// always equals the length that was requested.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NormalizedString(String);

impl NormalizedString {
    /// Get the characters as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Get the characters as ASCII bytes.
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for NormalizedString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Keep the ASCII decimal digits of `raw`, requiring exactly `expected_len`.
///
/// Scanning stops as soon as one digit more than `expected_len` is seen.
pub fn extract_digits(raw: &str, expected_len: usize) -> Result<NormalizedString, NormalizeError> {
    extract(raw, expected_len, |c| c.is_ascii_digit().then_some(c))
}

/// Keep `0-9A-Z` from `raw` (ASCII lowercase letters are folded to
/// uppercase), requiring exactly `expected_len`.
pub fn extract_alnum(raw: &str, expected_len: usize) -> Result<NormalizedString, NormalizeError> {
    extract(raw, expected_len, |c| {
        c.is_ascii_alphanumeric().then(|| c.to_ascii_uppercase())
    })
}

fn extract<F>(raw: &str, expected_len: usize, keep: F) -> Result<NormalizedString, NormalizeError>
where
    F: Fn(char) -> Option<char>,
{
    let mut out = String::with_capacity(expected_len);
    for c in raw.chars().filter_map(keep) {
        if out.len() == expected_len {
            return Err(NormalizeError::TooMany {
                expected: expected_len,
            });
        }
        out.push(c);
    }

    if out.len() < expected_len {
        return Err(NormalizeError::TooFew {
            expected: expected_len,
            found: out.len(),
        });
    }

    Ok(NormalizedString(out))
}

/// True iff every character equals the first one.
///
/// Used to reject degenerate identifiers such as `111.111.111-11`, which
/// satisfy the checksum but are never issued.
pub fn is_repeated(chars: &str) -> bool {
    let mut iter = chars.chars();
    match iter.next() {
        Some(first) => iter.all(|c| c == first),
        None => true,
    }
}
