//! Table of valid Brazilian area codes (DDD).

use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Every two-digit area code currently assigned by Anatel.
pub const AREA_CODES: [&str; 67] = [
    "11", "12", "13", "14", "15", "16", "17", "18", "19", // SP
    "21", "22", "24", // RJ
    "27", "28", // ES
    "31", "32", "33", "34", "35", "37", "38", // MG
    "41", "42", "43", "44", "45", "46", // PR
    "47", "48", "49", // SC
    "51", "53", "54", "55", // RS
    "61", // DF
    "62", "64", // GO
    "63", // TO
    "65", "66", // MT
    "67", // MS
    "68", // AC
    "69", // RO
    "71", "73", "74", "75", "77", // BA
    "79", // SE
    "81", "87", // PE
    "82", // AL
    "83", // PB
    "84", // RN
    "85", "88", // CE
    "86", "89", // PI
    "91", "93", "94", // PA
    "92", "97", // AM
    "95", // RR
    "96", // AP
    "98", "99", // MA
];

static AREA_CODE_SET: Lazy<HashSet<&'static str>> = Lazy::new(|| AREA_CODES.into_iter().collect());

/// Whether `code` is a valid two-digit area code.
pub fn is_valid_area_code(code: &str) -> bool {
    AREA_CODE_SET.contains(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_has_no_duplicates() {
        assert_eq!(AREA_CODE_SET.len(), AREA_CODES.len());
    }

    #[test]
    fn test_known_codes() {
        assert!(is_valid_area_code("11"));
        assert!(is_valid_area_code("21"));
        assert!(is_valid_area_code("61"));
        assert!(is_valid_area_code("99"));
    }

    #[test]
    fn test_unassigned_codes() {
        for code in ["00", "10", "20", "23", "25", "26", "29", "30", "36", "39", "50", "52", "90"] {
            assert!(!is_valid_area_code(code), "{}", code);
        }
        assert!(!is_valid_area_code("1"));
        assert!(!is_valid_area_code("111"));
    }
}
