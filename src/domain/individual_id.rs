//! IndividualId (CPF) value object.

use super::checksum::{check_char, INDIVIDUAL_FIRST_WEIGHTS, INDIVIDUAL_SECOND_WEIGHTS};
use super::format::{apply_mask, redact, FormatStyle};
use super::normalize::{extract_digits, is_repeated};
use crate::error::{IdentifierKind, ValidationError, ValidationResult};
use rand::Rng;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

const LEN: usize = 11;
const BASE_LEN: usize = 9;
const MASK: &str = "###.###.###-##";
const KIND: IdentifierKind = IdentifierKind::IndividualId;

/// A validated Brazilian individual taxpayer ID (CPF).
///
/// Holds exactly 11 decimal digits whose last two are the check digits of the
/// first nine. A value of this type is always valid.
///
/// # Example
///
/// ```
/// use br_identifiers::domain::{FormatStyle, IndividualId};
///
/// let cpf = IndividualId::parse("529.982.247-25").unwrap();
/// assert_eq!(cpf.as_str(), "52998224725");
/// assert_eq!(cpf.format(FormatStyle::Masked), "529.982.247-25");
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IndividualId(String);

impl IndividualId {
    /// Parse a CPF from free-form input.
    ///
    /// Non-digit characters are ignored, so both `52998224725` and
    /// `529.982.247-25` are accepted.
    ///
    /// # Errors
    ///
    /// - `ValidationError::Malformed` if there are not exactly 11 digits or
    ///   they are all identical.
    /// - `ValidationError::ChecksumMismatch` if a check digit is wrong.
    pub fn parse(raw: &str) -> ValidationResult<Self> {
        let digits = extract_digits(raw, LEN)
            .map_err(|e| ValidationError::malformed(KIND, e.to_string()))?
            .into_inner();

        if is_repeated(&digits) {
            return Err(ValidationError::malformed(KIND, "all digits are identical"));
        }

        let bytes = digits.as_bytes();
        let first = check_char(&bytes[..BASE_LEN], &INDIVIDUAL_FIRST_WEIGHTS);
        let second = check_char(&bytes[..BASE_LEN + 1], &INDIVIDUAL_SECOND_WEIGHTS);
        if char::from(bytes[9]) != first || char::from(bytes[10]) != second {
            return Err(ValidationError::ChecksumMismatch { kind: KIND });
        }

        Ok(Self(digits))
    }

    /// Parse a CPF, returning `None` instead of an error.
    pub fn try_parse(raw: &str) -> Option<Self> {
        Self::parse(raw).ok()
    }

    /// Whether `raw` holds a valid CPF.
    pub fn is_valid(raw: &str) -> bool {
        Self::parse(raw).is_ok()
    }

    /// Build a CPF from its 9-digit base by appending both check digits.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::Malformed` unless `base` is exactly nine
    /// ASCII digits that are not all identical.
    pub fn from_base(base: &str) -> ValidationResult<Self> {
        if base.len() != BASE_LEN || !base.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ValidationError::malformed(
                KIND,
                format!("base must be exactly {} digits", BASE_LEN),
            ));
        }
        if is_repeated(base) {
            return Err(ValidationError::malformed(KIND, "all digits are identical"));
        }

        let mut digits = String::with_capacity(LEN);
        digits.push_str(base);
        digits.push(check_char(digits.as_bytes(), &INDIVIDUAL_FIRST_WEIGHTS));
        digits.push(check_char(digits.as_bytes(), &INDIVIDUAL_SECOND_WEIGHTS));
        Ok(Self(digits))
    }

    /// Generate a random valid CPF from the given source of randomness.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        loop {
            let draft: String = (0..BASE_LEN)
                .map(|_| char::from(b'0' + rng.gen_range(0..10u8)))
                .collect();
            // Repeated drafts are rejected by from_base; draw again.
            if let Ok(id) = Self::from_base(&draft) {
                return id;
            }
        }
    }

    /// Render the CPF in the given style.
    pub fn format(&self, style: FormatStyle) -> String {
        match style {
            FormatStyle::Plain => self.0.clone(),
            FormatStyle::Masked => apply_mask(&self.0, MASK),
            FormatStyle::Safe => apply_mask(&redact(&self.0, 0..3), MASK),
        }
    }

    /// Get the 11 digits as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// The 9-digit base, without check digits.
    pub fn base(&self) -> &str {
        &self.0[..BASE_LEN]
    }

    /// The two check digits.
    pub fn check_digits(&self) -> &str {
        &self.0[BASE_LEN..]
    }
}

impl FromStr for IndividualId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

// Serde support - serialize as plain digits
impl Serialize for IndividualId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for IndividualId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        IndividualId::parse(&s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for IndividualId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// Debug output ends up in logs; keep it redacted.
impl fmt::Debug for IndividualId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IndividualId")
            .field(&self.format(FormatStyle::Safe))
            .finish()
    }
}
