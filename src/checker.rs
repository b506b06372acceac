//! Line-oriented checking used by the `br-ids` binary.
//!
//! Each input line is `<kind> <value>`, where kind is `cpf`, `cnpj` or
//! `phone`. Every line yields one [`CheckReport`], serialized as JSON.

use crate::config::Config;
use crate::domain::{EntityId, FormatStyle, IndividualId, PhoneNumber};
use crate::error::{FailureCategory, IdentifierKind, ValidationError};
use crate::observability::ValidationMetrics;
use serde::Serialize;

/// Result of checking one input line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckReport {
    /// What the line claimed to contain, if recognized
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<IdentifierKind>,

    pub valid: bool,

    /// The value rendered in the configured style, when valid
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    /// Phone fingerprint, when valid
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fingerprint: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<FailureCategory>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CheckReport {
    fn accepted(kind: IdentifierKind, value: String) -> Self {
        Self {
            kind: Some(kind),
            valid: true,
            value: Some(value),
            fingerprint: None,
            category: None,
            error: None,
        }
    }

    fn rejected(kind: Option<IdentifierKind>, err: &ValidationError) -> Self {
        Self {
            kind,
            valid: false,
            value: None,
            fingerprint: None,
            category: Some(err.category()),
            error: Some(err.to_string()),
        }
    }

    fn unusable(kind: Option<IdentifierKind>, reason: impl Into<String>) -> Self {
        Self {
            kind,
            valid: false,
            value: None,
            fingerprint: None,
            category: None,
            error: Some(reason.into()),
        }
    }
}

/// Parse the kind prefix of a line.
pub fn parse_kind(token: &str) -> Option<IdentifierKind> {
    match token.to_ascii_lowercase().as_str() {
        "cpf" => Some(IdentifierKind::IndividualId),
        "cnpj" => Some(IdentifierKind::EntityId),
        "phone" | "tel" => Some(IdentifierKind::Phone),
        _ => None,
    }
}

/// Check a single input line.
pub fn check_line(line: &str, config: &Config, metrics: &ValidationMetrics) -> CheckReport {
    if line.len() > config.max_input_length {
        return CheckReport::unusable(
            None,
            format!("line exceeds {} bytes", config.max_input_length),
        );
    }

    let line = line.trim();
    let (token, value) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let Some(kind) = parse_kind(token) else {
        return CheckReport::unusable(None, format!("unknown kind: {}", token));
    };

    let value = value.trim();
    let style = config.format_style;
    let report = match kind {
        IdentifierKind::IndividualId => metrics
            .record(kind, IndividualId::parse(value))
            .map(|id| CheckReport::accepted(kind, id.format(style))),
        IdentifierKind::EntityId => metrics
            .record(kind, EntityId::parse(value))
            .map(|id| CheckReport::accepted(kind, id.format(style))),
        IdentifierKind::Phone => metrics
            .record(kind, PhoneNumber::canonicalize(value))
            .map(|phone| {
                let rendered = match style {
                    FormatStyle::Plain => phone.as_str().to_string(),
                    FormatStyle::Masked => phone.formatted(),
                    FormatStyle::Safe => phone.masked(),
                };
                CheckReport {
                    fingerprint: Some(phone.fingerprint()),
                    ..CheckReport::accepted(kind, rendered)
                }
            }),
    };

    report.unwrap_or_else(|err| CheckReport::rejected(Some(kind), &err))
}
