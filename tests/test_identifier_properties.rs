//! Property tests for CPF and CNPJ validation.
//!
//! These tests check that the constructive side (`from_base`, `random`)
//! always agrees with the validating side (`parse`, `is_valid`), and that
//! every display form parses back to the same value.

use br_identifiers::domain::normalize::is_repeated;
use br_identifiers::{EntityId, EntityIdScheme, FormatStyle, IndividualId, ValidationError};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Known fixtures.
///
/// This test validates:
/// - Published valid CPF and CNPJ numbers are accepted
/// - Repeated-digit and wrong-check-digit inputs are rejected
#[test]
fn test_fixtures() {
    assert!(IndividualId::is_valid("52998224725"));
    assert!(!IndividualId::is_valid("11111111111"));
    assert!(EntityId::is_valid("11444777000161"));
    assert!(EntityId::is_valid("11222333000181"));
    assert!(!EntityId::is_valid("11222333000182"));
}

/// Failure categories are distinguishable on the assert APIs.
#[test]
fn test_failure_categories() {
    assert!(matches!(
        IndividualId::parse("123"),
        Err(ValidationError::Malformed { .. })
    ));
    assert!(matches!(
        IndividualId::parse("52998224726"),
        Err(ValidationError::ChecksumMismatch { .. })
    ));
    assert!(matches!(
        EntityId::parse("11444777000162"),
        Err(ValidationError::ChecksumMismatch { .. })
    ));
}

/// Legacy numeric and alphanumeric CNPJs are valid side by side.
#[test]
fn test_both_entity_schemes_accepted() {
    let legacy = EntityId::parse("11.444.777/0001-61").unwrap();
    let alnum = EntityId::parse("12.ABC.345/01DE-45").unwrap();
    assert_eq!(legacy.scheme(), EntityIdScheme::Numeric);
    assert_eq!(alnum.scheme(), EntityIdScheme::Alphanumeric);
}

proptest! {
    /// Every non-repeated 9-digit base yields a valid CPF.
    #[test]
    fn individual_from_base_validates(base in "[0-9]{9}") {
        prop_assume!(!is_repeated(&base));
        let id = IndividualId::from_base(&base).unwrap();
        prop_assert!(IndividualId::is_valid(&id.format(FormatStyle::Masked)));
        prop_assert!(IndividualId::is_valid(id.as_str()));
        prop_assert_eq!(id.base(), base.as_str());
    }

    /// Eleven identical digits are never a valid CPF.
    #[test]
    fn individual_repeated_digits_invalid(d in 0u8..10) {
        let raw = char::from(b'0' + d).to_string().repeat(11);
        prop_assert!(!IndividualId::is_valid(&raw));
    }

    /// Changing one check digit always invalidates a CPF.
    #[test]
    fn individual_single_check_digit_change_invalid(base in "[0-9]{9}", bump in 1u8..10) {
        prop_assume!(!is_repeated(&base));
        let id = IndividualId::from_base(&base).unwrap();
        let mut bytes = id.as_str().as_bytes().to_vec();
        bytes[10] = b'0' + (bytes[10] - b'0' + bump) % 10;
        let tampered = String::from_utf8(bytes).unwrap();
        prop_assert!(!IndividualId::is_valid(&tampered));
    }

    /// Every non-repeated 12-character root yields a valid CNPJ.
    #[test]
    fn entity_from_base_validates(root in "[0-9A-Z]{12}") {
        prop_assume!(!is_repeated(&root));
        let id = EntityId::from_base(&root).unwrap();
        prop_assert!(EntityId::is_valid(id.as_str()));
        prop_assert_eq!(id.root(), root.as_str());
    }

    /// All-decimal roots behave the same under the legacy scheme.
    #[test]
    fn entity_numeric_root_validates(root in "[0-9]{12}") {
        prop_assume!(!is_repeated(&root));
        let id = EntityId::from_base(&root).unwrap();
        prop_assert_eq!(id.scheme(), EntityIdScheme::Numeric);
        prop_assert!(EntityId::is_valid(&id.format(FormatStyle::Masked)));
    }

    /// Plain and masked forms parse back to the same CPF.
    #[test]
    fn individual_round_trip(seed in any::<u64>()) {
        let id = IndividualId::random(&mut StdRng::seed_from_u64(seed));
        prop_assert_eq!(IndividualId::try_parse(&id.format(FormatStyle::Plain)), Some(id.clone()));
        prop_assert_eq!(IndividualId::try_parse(&id.format(FormatStyle::Masked)), Some(id));
    }

    /// Plain and masked forms parse back to the same CNPJ.
    #[test]
    fn entity_round_trip(seed in any::<u64>(), alphanumeric in any::<bool>()) {
        let id = EntityId::random(&mut StdRng::seed_from_u64(seed), alphanumeric);
        prop_assert_eq!(EntityId::try_parse(&id.format(FormatStyle::Plain)), Some(id.clone()));
        prop_assert_eq!(EntityId::try_parse(&id.format(FormatStyle::Masked)), Some(id));
    }

    /// Lowercase input is accepted for alphanumeric CNPJs.
    #[test]
    fn entity_lowercase_accepted(seed in any::<u64>()) {
        let id = EntityId::random(&mut StdRng::seed_from_u64(seed), true);
        let lower = id.format(FormatStyle::Masked).to_ascii_lowercase();
        prop_assert_eq!(EntityId::try_parse(&lower), Some(id));
    }

    /// Probes never panic on arbitrary input.
    #[test]
    fn probes_never_panic(raw in ".{0,40}") {
        let _ = IndividualId::is_valid(&raw);
        let _ = EntityId::is_valid(&raw);
        let _ = br_identifiers::PhoneNumber::is_valid(&raw);
    }
}
