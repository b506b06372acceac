//! EntityId (CNPJ) value object.
//!
//! A CNPJ is a 12-character root followed by two decimal check digits. The
//! root is an 8-character company base plus a 4-character branch number.
//! Legacy CNPJs use decimal roots only; the newer scheme allows `0-9A-Z` in
//! the root. Both share the same checksum, with letters read as base-36
//! values, and both are accepted here.

use super::checksum::{check_char, ENTITY_FIRST_WEIGHTS, ENTITY_SECOND_WEIGHTS};
use super::format::{apply_mask, redact, FormatStyle};
use super::normalize::{extract_alnum, is_repeated};
use crate::error::{IdentifierKind, ValidationError, ValidationResult};
use rand::Rng;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

const LEN: usize = 14;
const ROOT_LEN: usize = 12;
const BASE_LEN: usize = 8;
const MASK: &str = "##.###.###/####-##";
const KIND: IdentifierKind = IdentifierKind::EntityId;
const HEADQUARTERS_BRANCH: &str = "0001";

const DECIMAL_ALPHABET: &[u8] = b"0123456789";
const ALPHANUMERIC_ALPHABET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Which character set a CNPJ root uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityIdScheme {
    /// All-decimal root (legacy)
    Numeric,

    /// Root with at least one letter
    Alphanumeric,
}

/// A validated Brazilian company taxpayer ID (CNPJ).
///
/// # Example
///
/// ```
/// use br_identifiers::domain::{EntityId, FormatStyle};
///
/// let cnpj = EntityId::parse("11.444.777/0001-61").unwrap();
/// assert_eq!(cnpj.as_str(), "11444777000161");
/// assert_eq!(cnpj.branch(), "0001");
/// assert_eq!(cnpj.format(FormatStyle::Safe), "11.***.***/0001-61");
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(String);

impl EntityId {
    /// Parse a CNPJ from free-form input.
    ///
    /// Punctuation is ignored and lowercase letters are folded to uppercase.
    ///
    /// # Errors
    ///
    /// - `ValidationError::Malformed` if there are not exactly 14 alphanumeric
    ///   characters, the check positions are not digits, or the root is made
    ///   of one repeated character.
    /// - `ValidationError::ChecksumMismatch` if a check digit is wrong.
    pub fn parse(raw: &str) -> ValidationResult<Self> {
        let chars = extract_alnum(raw, LEN)
            .map_err(|e| ValidationError::malformed(KIND, e.to_string()))?
            .into_inner();

        let (root, check) = chars.split_at(ROOT_LEN);
        if !check.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ValidationError::malformed(KIND, "check digits must be decimal"));
        }
        if is_repeated(root) {
            return Err(ValidationError::malformed(KIND, "all root characters are identical"));
        }

        let bytes = chars.as_bytes();
        let first = check_char(&bytes[..ROOT_LEN], &ENTITY_FIRST_WEIGHTS);
        let second = check_char(&bytes[..ROOT_LEN + 1], &ENTITY_SECOND_WEIGHTS);
        if char::from(bytes[12]) != first || char::from(bytes[13]) != second {
            return Err(ValidationError::ChecksumMismatch { kind: KIND });
        }

        Ok(Self(chars))
    }

    /// Parse a CNPJ, returning `None` instead of an error.
    pub fn try_parse(raw: &str) -> Option<Self> {
        Self::parse(raw).ok()
    }

    /// Whether `raw` holds a valid CNPJ.
    pub fn is_valid(raw: &str) -> bool {
        Self::parse(raw).is_ok()
    }

    /// Build a CNPJ from its 12-character root by appending both check digits.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::Malformed` unless `root` is exactly twelve
    /// characters from `0-9A-Z` that are not all identical.
    pub fn from_base(root: &str) -> ValidationResult<Self> {
        if root.len() != ROOT_LEN
            || !root
                .bytes()
                .all(|b| b.is_ascii_digit() || b.is_ascii_uppercase())
        {
            return Err(ValidationError::malformed(
                KIND,
                format!("root must be exactly {} characters from 0-9A-Z", ROOT_LEN),
            ));
        }
        if is_repeated(root) {
            return Err(ValidationError::malformed(KIND, "all root characters are identical"));
        }

        let mut chars = String::with_capacity(LEN);
        chars.push_str(root);
        chars.push(check_char(chars.as_bytes(), &ENTITY_FIRST_WEIGHTS));
        chars.push(check_char(chars.as_bytes(), &ENTITY_SECOND_WEIGHTS));
        Ok(Self(chars))
    }

    /// Generate a random valid CNPJ.
    ///
    /// With `alphanumeric` the root is drawn from `0-9A-Z`, otherwise from
    /// decimal digits only.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, alphanumeric: bool) -> Self {
        let alphabet = if alphanumeric {
            ALPHANUMERIC_ALPHABET
        } else {
            DECIMAL_ALPHABET
        };

        loop {
            let draft: String = (0..ROOT_LEN)
                .map(|_| char::from(alphabet[rng.gen_range(0..alphabet.len())]))
                .collect();
            if let Ok(id) = Self::from_base(&draft) {
                return id;
            }
        }
    }

    /// Render the CNPJ in the given style.
    ///
    /// The safe style hides the company base except its first two
    /// characters, leaving the branch and check digits visible.
    pub fn format(&self, style: FormatStyle) -> String {
        match style {
            FormatStyle::Plain => self.0.clone(),
            FormatStyle::Masked => apply_mask(&self.0, MASK),
            FormatStyle::Safe => apply_mask(&redact(&self.0, 2..BASE_LEN), MASK),
        }
    }

    /// Get the 14 characters as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// The 12-character root (base and branch).
    pub fn root(&self) -> &str {
        &self.0[..ROOT_LEN]
    }

    /// The 8-character company base.
    pub fn base(&self) -> &str {
        &self.0[..BASE_LEN]
    }

    /// The 4-character branch number.
    pub fn branch(&self) -> &str {
        &self.0[BASE_LEN..ROOT_LEN]
    }

    /// The two check digits.
    pub fn check_digits(&self) -> &str {
        &self.0[ROOT_LEN..]
    }

    /// Whether this is the head office registration (branch `0001`).
    pub fn is_headquarters(&self) -> bool {
        self.branch() == HEADQUARTERS_BRANCH
    }

    /// Which character set the root uses.
    pub fn scheme(&self) -> EntityIdScheme {
        if self.root().bytes().all(|b| b.is_ascii_digit()) {
            EntityIdScheme::Numeric
        } else {
            EntityIdScheme::Alphanumeric
        }
    }
}

impl FromStr for EntityId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for EntityId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for EntityId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        EntityId::parse(&s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("EntityId")
            .field(&self.format(FormatStyle::Safe))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_parse_valid_numeric() {
        let id = EntityId::parse("11444777000161").unwrap();
        assert_eq!(id.root(), "114447770001");
        assert_eq!(id.base(), "11444777");
        assert_eq!(id.branch(), "0001");
        assert_eq!(id.check_digits(), "61");
        assert_eq!(id.scheme(), EntityIdScheme::Numeric);
        assert!(id.is_headquarters());
    }

    #[test]
    fn test_parse_masked() {
        let id = EntityId::parse("11.444.777/0001-61").unwrap();
        assert_eq!(id.as_str(), "11444777000161");
    }

    #[test]
    fn test_parse_valid_alphanumeric() {
        let id = EntityId::parse("12.abc.345/01de-45").unwrap();
        assert_eq!(id.as_str(), "12ABC34501DE45");
        assert_eq!(id.scheme(), EntityIdScheme::Alphanumeric);
        assert_eq!(id.branch(), "01DE");
        assert!(!id.is_headquarters());
    }

    #[test]
    fn test_parse_rejects_bad_check_digit() {
        assert_eq!(
            EntityId::parse("11222333000182"),
            Err(ValidationError::ChecksumMismatch { kind: KIND })
        );
        assert_eq!(
            EntityId::parse("11444777000171"),
            Err(ValidationError::ChecksumMismatch { kind: KIND })
        );
    }

    #[test]
    fn test_parse_rejects_letter_in_check_digits() {
        let err = EntityId::parse("1144477700016A").unwrap_err();
        assert!(matches!(err, ValidationError::Malformed { .. }));
    }

    #[test]
    fn test_parse_rejects_repeated_root() {
        assert!(matches!(
            EntityId::parse("00000000000000"),
            Err(ValidationError::Malformed { .. })
        ));
        assert!(matches!(
            EntityId::parse("AAAAAAAAAAAA00"),
            Err(ValidationError::Malformed { .. })
        ));
    }

    #[test]
    fn test_parse_rejects_wrong_length() {
        assert!(!EntityId::is_valid("1144477700016"));
        assert!(!EntityId::is_valid("114447770001610"));
        assert!(EntityId::try_parse("").is_none());
    }

    #[test]
    fn test_from_base() {
        let id = EntityId::from_base("114447770001").unwrap();
        assert_eq!(id.as_str(), "11444777000161");

        let id = EntityId::from_base("12ABC34501DE").unwrap();
        assert_eq!(id.as_str(), "12ABC34501DE45");
    }

    #[test]
    fn test_from_base_rejects_bad_input() {
        assert!(EntityId::from_base("11444777000").is_err());
        assert!(EntityId::from_base("12abc34501de").is_err());
        assert!(EntityId::from_base("11.444.777/0").is_err());
        assert!(EntityId::from_base("ZZZZZZZZZZZZ").is_err());
    }

    #[test]
    fn test_random_numeric() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let id = EntityId::random(&mut rng, false);
            assert_eq!(id.scheme(), EntityIdScheme::Numeric);
            assert!(EntityId::is_valid(id.as_str()));
        }
    }

    #[test]
    fn test_random_alphanumeric() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let id = EntityId::random(&mut rng, true);
            assert!(EntityId::is_valid(&id.format(FormatStyle::Masked)));
        }
    }

    #[test]
    fn test_format_styles() {
        let id = EntityId::parse("11444777000161").unwrap();
        assert_eq!(id.format(FormatStyle::Plain), "11444777000161");
        assert_eq!(id.format(FormatStyle::Masked), "11.444.777/0001-61");
        assert_eq!(id.format(FormatStyle::Safe), "11.***.***/0001-61");
    }

    #[test]
    fn test_debug_is_redacted() {
        let id = EntityId::parse("11444777000161").unwrap();
        assert_eq!(format!("{:?}", id), "EntityId(\"11.***.***/0001-61\")");
        assert_eq!(format!("{}", id), "11444777000161");
    }

    #[test]
    fn test_serde() {
        let id = EntityId::parse("11.444.777/0001-61").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"11444777000161\"");

        let back: EntityId = serde_json::from_str("\"11.444.777/0001-61\"").unwrap();
        assert_eq!(back, id);

        let result: Result<EntityId, _> = serde_json::from_str("\"11444777000162\"");
        assert!(result.is_err());
    }
}
