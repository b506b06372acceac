//! PhoneNumber value object.

use super::area_codes::is_valid_area_code;
use crate::error::{IdentifierKind, ValidationError, ValidationResult};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sha2::{Digest, Sha256};
use std::fmt;
use std::str::FromStr;

/// Brazil's international dialing code.
pub const COUNTRY_CODE: &str = "55";

const KIND: IdentifierKind = IdentifierKind::Phone;
const MOBILE_LOCAL_LEN: usize = 9;
const LANDLINE_LOCAL_LEN: usize = 8;
const VISIBLE_SUFFIX: usize = 4;

/// A Brazilian phone number in canonical international form.
///
/// The canonical form is `+55` followed by a two-digit area code and either
/// a 9-digit mobile number starting with `9` or an 8-digit landline number.
///
/// # Example
///
/// ```
/// use br_identifiers::domain::PhoneNumber;
///
/// let phone = PhoneNumber::parse("(11) 98765-4321").unwrap();
/// assert_eq!(phone.as_str(), "+5511987654321");
/// assert!(phone.is_mobile());
/// assert_eq!(phone.formatted(), "(11) 98765-4321");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Canonicalize free-form national or international input.
    ///
    /// # Accepted shapes
    ///
    /// After dropping every non-digit character:
    /// - `55` followed by area code and local number (12 or 13 digits)
    /// - national trunk form: `0` followed by area code and local number
    /// - bare national number: area code and local number (10 or 11 digits)
    ///
    /// # Errors
    ///
    /// - `ValidationError::Malformed` for any other digit count or an invalid
    ///   local number.
    /// - `ValidationError::UnknownAreaCode` if the area code is not assigned.
    pub fn canonicalize(raw: &str) -> ValidationResult<Self> {
        let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
        let national = national_part(&digits)?;
        Self::from_national(national)
    }

    /// Canonicalize free-form input, returning `None` if it is not a valid
    /// phone number.
    pub fn parse(raw: &str) -> Option<Self> {
        Self::canonicalize(raw).ok()
    }

    /// Whether `raw` holds a valid phone number.
    pub fn is_valid(raw: &str) -> bool {
        Self::canonicalize(raw).is_ok()
    }

    /// Rebuild a phone number from its canonical `+55...` form.
    ///
    /// Unlike [`PhoneNumber::canonicalize`], no other shape is accepted.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::Malformed` if `canonical` is not `+55`
    /// followed by ASCII digits, and the same errors as `canonicalize`
    /// otherwise.
    pub fn from_canonical(canonical: &str) -> ValidationResult<Self> {
        let national = canonical
            .strip_prefix('+')
            .and_then(|rest| rest.strip_prefix(COUNTRY_CODE))
            .filter(|rest| !rest.is_empty() && rest.bytes().all(|b| b.is_ascii_digit()))
            .ok_or_else(|| {
                ValidationError::malformed(KIND, "canonical form must be +55 followed by digits")
            })?;
        Self::from_national(national)
    }

    fn from_national(national: &str) -> ValidationResult<Self> {
        if !(10..=11).contains(&national.len()) {
            return Err(ValidationError::malformed(
                KIND,
                format!("expected 12 or 13 digits, found {}", national.len() + 2),
            ));
        }

        let (area_code, local) = national.split_at(2);
        if !is_valid_area_code(area_code) {
            return Err(ValidationError::UnknownAreaCode {
                area_code: area_code.to_string(),
            });
        }

        let is_mobile = local.len() == MOBILE_LOCAL_LEN && local.starts_with('9');
        if !is_mobile && local.len() != LANDLINE_LOCAL_LEN {
            return Err(ValidationError::malformed(
                KIND,
                "9-digit numbers must start with 9",
            ));
        }

        Ok(Self(format!("+{}{}", COUNTRY_CODE, national)))
    }

    /// The canonical form, e.g. `+5511987654321`.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// All digits of the canonical form, without the leading `+`.
    pub fn digits(&self) -> &str {
        &self.0[1..]
    }

    /// The country code, always `55`.
    pub fn country_code(&self) -> &str {
        &self.0[1..3]
    }

    /// The two-digit area code.
    pub fn area_code(&self) -> &str {
        &self.0[3..5]
    }

    /// The 8- or 9-digit local number.
    pub fn local_number(&self) -> &str {
        &self.0[5..]
    }

    pub fn is_mobile(&self) -> bool {
        self.local_number().len() == MOBILE_LOCAL_LEN
    }

    pub fn is_landline(&self) -> bool {
        self.local_number().len() == LANDLINE_LOCAL_LEN
    }

    /// Canonical form with every digit but the last four hidden.
    pub fn masked(&self) -> String {
        let digits = self.digits();
        let hidden = digits.len() - VISIBLE_SUFFIX;
        format!("+{}{}", "*".repeat(hidden), &digits[hidden..])
    }

    /// National display form: `(11) 98765-4321` or `(11) 3333-4444`.
    pub fn formatted(&self) -> String {
        let local = self.local_number();
        let (head, tail) = local.split_at(local.len() - 4);
        format!("({}) {}-{}", self.area_code(), head, tail)
    }

    /// Lowercase hex SHA-256 of the canonical form.
    ///
    /// Deterministic, so it can serve as a lookup key for a number without
    /// storing the number itself.
    pub fn fingerprint(&self) -> String {
        Sha256::digest(self.0.as_bytes())
            .iter()
            .map(|b| format!("{b:02x}"))
            .collect()
    }
}

/// Strip the country or trunk prefix, leaving area code and local number.
fn national_part(digits: &str) -> ValidationResult<&str> {
    let len = digits.len();
    if len >= 12 && digits.starts_with(COUNTRY_CODE) {
        Ok(&digits[COUNTRY_CODE.len()..])
    } else if (11..=12).contains(&len) && digits.starts_with('0') {
        Ok(&digits[1..])
    } else if (10..=11).contains(&len) {
        Ok(digits)
    } else {
        Err(ValidationError::malformed(
            KIND,
            format!("unexpected number of digits: {}", len),
        ))
    }
}

impl FromStr for PhoneNumber {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::canonicalize(s)
    }
}

// Serde support - serialize as canonical string
impl Serialize for PhoneNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for PhoneNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PhoneNumber::canonicalize(&s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
