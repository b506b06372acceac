//! Error types for the identifier engine.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// The kind of value a validation error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IdentifierKind {
    /// Individual taxpayer ID (CPF)
    IndividualId,

    /// Company taxpayer ID (CNPJ)
    EntityId,

    /// Phone number
    Phone,
}

impl IdentifierKind {
    /// Short human-readable name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::IndividualId => "CPF",
            Self::EntityId => "CNPJ",
            Self::Phone => "phone number",
        }
    }
}

impl fmt::Display for IdentifierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coarse failure category, used for diagnostics and metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureCategory {
    /// Wrong character set or length after normalization
    Malformed,

    /// Well-formed but the check digits do not match
    Checksum,

    /// Well-formed but the area code is not recognized
    AreaCode,
}

/// Errors produced by the assert-style constructors (`parse`, `from_base`,
/// `canonicalize`, `from_canonical`).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Input has the wrong shape
    #[error("Malformed {kind}: {reason}")]
    Malformed { kind: IdentifierKind, reason: String },

    /// Check digits do not match the computed ones
    #[error("Check digit mismatch for {kind}")]
    ChecksumMismatch { kind: IdentifierKind },

    /// Area code is not in the table of valid codes
    #[error("Unknown area code: {area_code}")]
    UnknownAreaCode { area_code: String },
}

impl ValidationError {
    pub(crate) fn malformed(kind: IdentifierKind, reason: impl Into<String>) -> Self {
        Self::Malformed {
            kind,
            reason: reason.into(),
        }
    }

    /// Which of the three failure categories applied.
    pub fn category(&self) -> FailureCategory {
        match self {
            Self::Malformed { .. } => FailureCategory::Malformed,
            Self::ChecksumMismatch { .. } => FailureCategory::Checksum,
            Self::UnknownAreaCode { .. } => FailureCategory::AreaCode,
        }
    }

    /// The kind of value that failed.
    pub fn kind(&self) -> IdentifierKind {
        match self {
            Self::Malformed { kind, .. } | Self::ChecksumMismatch { kind } => *kind,
            Self::UnknownAreaCode { .. } => IdentifierKind::Phone,
        }
    }
}

/// Errors that can occur while extracting a fixed-length candidate string.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum NormalizeError {
    /// Fewer significant characters than required
    #[error("expected {expected} characters, found {found}")]
    TooFew { expected: usize, found: usize },

    /// More significant characters than required
    #[error("expected {expected} characters, found more")]
    TooMany { expected: usize },
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with ValidationError
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ValidationError::ChecksumMismatch {
            kind: IdentifierKind::IndividualId,
        };
        assert_eq!(err.to_string(), "Check digit mismatch for CPF");

        let err = ValidationError::UnknownAreaCode {
            area_code: "00".to_string(),
        };
        assert_eq!(err.to_string(), "Unknown area code: 00");

        let err = NormalizeError::TooFew {
            expected: 11,
            found: 3,
        };
        assert_eq!(err.to_string(), "expected 11 characters, found 3");

        let err = ConfigError::InvalidValue {
            var: "LOG_LEVEL".to_string(),
            reason: "bad".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid value for LOG_LEVEL: bad");
    }

    #[test]
    fn test_error_category() {
        let err = ValidationError::malformed(IdentifierKind::EntityId, "too short");
        assert_eq!(err.category(), FailureCategory::Malformed);
        assert_eq!(err.kind(), IdentifierKind::EntityId);
        assert!(err.to_string().contains("CNPJ"));

        let err = ValidationError::UnknownAreaCode {
            area_code: "20".to_string(),
        };
        assert_eq!(err.category(), FailureCategory::AreaCode);
        assert_eq!(err.kind(), IdentifierKind::Phone);
    }
}
