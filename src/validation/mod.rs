//! Boolean constraint adapter for form and request validation.
//!
//! This is the boundary used by request handlers and serializers that only
//! need a yes/no answer per field. It calls the `is_valid` probes of the
//! value objects and never depends on their internal representation.

use crate::domain::{EntityId, IndividualId, PhoneNumber};
use crate::error::IdentifierKind;
use serde::Serialize;

/// A field-level constraint over string input.
///
/// Implementations must be pure; they may be shared across threads.
pub trait Constraint: Send + Sync {
    /// Constraint name reported in violations.
    fn name(&self) -> &'static str;

    /// Whether `value` satisfies the constraint.
    fn is_valid(&self, value: &str) -> bool;

    /// Message reported when the constraint is violated.
    fn message(&self) -> String {
        format!("must be a valid {}", self.name())
    }
}

/// Constraint accepting valid CPF input (plain or masked).
#[derive(Debug, Clone, Copy, Default)]
pub struct IndividualIdConstraint;

impl Constraint for IndividualIdConstraint {
    fn name(&self) -> &'static str {
        IdentifierKind::IndividualId.as_str()
    }

    fn is_valid(&self, value: &str) -> bool {
        IndividualId::is_valid(value)
    }
}

/// Constraint accepting valid CNPJ input of either scheme.
#[derive(Debug, Clone, Copy, Default)]
pub struct EntityIdConstraint;

impl Constraint for EntityIdConstraint {
    fn name(&self) -> &'static str {
        IdentifierKind::EntityId.as_str()
    }

    fn is_valid(&self, value: &str) -> bool {
        EntityId::is_valid(value)
    }
}

/// Constraint accepting any input that canonicalizes to a phone number.
#[derive(Debug, Clone, Copy, Default)]
pub struct PhoneConstraint;

impl Constraint for PhoneConstraint {
    fn name(&self) -> &'static str {
        IdentifierKind::Phone.as_str()
    }

    fn is_valid(&self, value: &str) -> bool {
        PhoneNumber::is_valid(value)
    }
}

/// A failed field check, shaped for JSON error responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConstraintViolation {
    /// Name of the offending field
    pub field: String,

    /// Name of the violated constraint
    pub constraint: &'static str,

    /// Human-readable message
    pub message: String,
}

/// Check an optional field against a constraint.
///
/// An absent value passes: requiring presence is a separate concern.
/// The value itself is never logged.
pub fn check(
    field: &str,
    value: Option<&str>,
    constraint: &dyn Constraint,
) -> Result<(), ConstraintViolation> {
    let Some(value) = value else {
        return Ok(());
    };

    if constraint.is_valid(value) {
        tracing::trace!(field = %field, constraint = constraint.name(), "Constraint satisfied");
        return Ok(());
    }

    tracing::debug!(field = %field, constraint = constraint.name(), "Constraint violated");
    Err(ConstraintViolation {
        field: field.to_string(),
        constraint: constraint.name(),
        message: constraint.message(),
    })
}

/// Check several fields, collecting every violation.
pub fn check_all<'a, I>(fields: I) -> Vec<ConstraintViolation>
where
    I: IntoIterator<Item = (&'a str, Option<&'a str>, &'a dyn Constraint)>,
{
    fields
        .into_iter()
        .filter_map(|(field, value, constraint)| check(field, value, constraint).err())
        .collect()
}
