use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

/// What kind of rule a finding comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FindingCode {
    /// A count or length check failed.
    LimitExceeded,
    /// A count or length is close to its limit.
    ApproachingLimit,
    /// A required attribute is missing or empty.
    MissingRequiredField,
    /// A screen id is duplicated or a navigation target does not exist.
    InvalidReference,
}

/// One validation result, rendered inline by the editor next to the offending
/// component, screen or document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationFinding {
    pub kind: Severity,
    pub code: FindingCode,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current: Option<usize>,
}

impl ValidationFinding {
    pub fn new(kind: Severity, code: FindingCode, message: impl Into<String>) -> Self {
        Self {
            kind,
            code,
            message: message.into(),
            field: None,
            limit: None,
            current: None,
        }
    }

    pub fn missing(field: &str, message: impl Into<String>) -> Self {
        Self::new(Severity::Error, FindingCode::MissingRequiredField, message).on_field(field)
    }

    pub fn exceeded(field: &str, message: impl Into<String>, limit: usize, current: usize) -> Self {
        Self::new(Severity::Error, FindingCode::LimitExceeded, message)
            .on_field(field)
            .measured(limit, current)
    }

    pub fn approaching(
        field: &str,
        message: impl Into<String>,
        limit: usize,
        current: usize,
    ) -> Self {
        Self::new(Severity::Warning, FindingCode::ApproachingLimit, message)
            .on_field(field)
            .measured(limit, current)
    }

    pub fn invalid_reference(field: &str, message: impl Into<String>) -> Self {
        Self::new(Severity::Error, FindingCode::InvalidReference, message).on_field(field)
    }

    pub fn on_field(mut self, field: &str) -> Self {
        self.field = Some(field.to_string());
        self
    }

    pub fn measured(mut self, limit: usize, current: usize) -> Self {
        self.limit = Some(limit);
        self.current = Some(current);
        self
    }

    /// Prefixes the message with positional context such as `Component 3: `.
    pub fn in_context(mut self, context: &str) -> Self {
        self.message.insert_str(0, context);
        self
    }

    pub fn is_error(&self) -> bool {
        self.kind == Severity::Error
    }
}

impl fmt::Display for ValidationFinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let severity = match self.kind {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };
        write!(f, "{}: {}", severity, self.message)
    }
}

/// Errors and warnings produced by one validation call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub errors: Vec<ValidationFinding>,
    pub warnings: Vec<ValidationFinding>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Files a finding under errors or warnings according to its severity.
    pub fn push(&mut self, finding: ValidationFinding) {
        match finding.kind {
            Severity::Error => self.errors.push(finding),
            Severity::Warning => self.warnings.push(finding),
        }
    }

    /// Absorbs a lower-level report, prefixing each of its messages with `context`.
    pub fn merge(&mut self, other: ValidationReport, context: &str) {
        for finding in other.errors.into_iter().chain(other.warnings) {
            self.push(finding.in_context(context));
        }
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }

    /// Errors first, then warnings.
    pub fn findings(&self) -> impl Iterator<Item = &ValidationFinding> {
        self.errors.iter().chain(self.warnings.iter())
    }
}
