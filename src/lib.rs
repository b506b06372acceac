//! br-identifiers - Validation and canonicalization of Brazilian identifiers.
//!
//! This library validates, formats and generates CPF (individual) and CNPJ
//! (company) taxpayer IDs, including the alphanumeric CNPJ scheme, and
//! canonicalizes Brazilian phone numbers to `+55<area><local>`.
//!
//! # Architecture
//!
//! - **domain**: Value objects plus the normalization and checksum engine
//! - **error**: Custom error types for precise error handling
//! - **validation**: Boolean constraint adapter for request validation
//! - **observability**: Counters for validation outcomes
//! - **config**: Configuration management from environment variables
//! - **checker**: Line-oriented checking used by the `br-ids` binary
//!
//! Every domain operation is pure. Random generation takes the caller's
//! `rand::Rng`, so seeded generators give reproducible output.

pub mod checker;
pub mod config;
pub mod domain;
pub mod error;
pub mod observability;
pub mod validation;

pub use config::Config;
pub use domain::{EntityId, EntityIdScheme, FormatStyle, IndividualId, PhoneNumber};
pub use error::{
    ConfigError, FailureCategory, IdentifierKind, NormalizeError, ValidationError,
    ValidationResult,
};
pub use observability::ValidationMetrics;
pub use validation::{Constraint, ConstraintViolation};
