//! Underwriting domain errors
//!
//! Every error raised by this crate is a caller-input error. None of them
//! are transient, so nothing here is retryable.

use core_kernel::MoneyError;
use thiserror::Error;

use crate::form_type::FormType;

/// Errors that can occur in the underwriting domain
#[derive(Debug, Error)]
pub enum UnderwritingError {
    /// Required fields are absent or carry the wrong JSON type
    #[error("Validation failed for {form_type}: {}", summarize(.missing, .invalid))]
    Validation {
        form_type: FormType,
        missing: Vec<String>,
        invalid: Vec<String>,
    },

    /// No rule set is registered for the requested form
    #[error("Unknown form type: {0}")]
    UnknownFormType(String),

    /// Operation not allowed in the current case state
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// A nested field holds a value of the wrong type
    #[error("Invalid field {field}: expected {expected}")]
    InvalidField {
        field: String,
        expected: &'static str,
    },

    /// Record is not a JSON object
    #[error("Malformed record: {0}")]
    MalformedRecord(String),

    /// Tool-call arguments could not be decoded
    #[error("Malformed tool arguments: {0}")]
    MalformedArguments(String),

    /// Premium could not be computed
    #[error("Premium error: {0}")]
    Premium(#[from] MoneyError),
}

impl UnderwritingError {
    /// Creates an unknown form type error
    pub fn unknown_form(identifier: impl std::fmt::Display) -> Self {
        UnderwritingError::UnknownFormType(identifier.to_string())
    }

    /// Creates an invalid state error
    pub fn invalid_state(message: impl Into<String>) -> Self {
        UnderwritingError::InvalidState(message.into())
    }

    /// Creates an invalid field error
    pub fn invalid_field(field: impl Into<String>, expected: &'static str) -> Self {
        UnderwritingError::InvalidField {
            field: field.into(),
            expected,
        }
    }

    /// Returns the missing fields of a validation error
    pub fn missing_fields(&self) -> &[String] {
        match self {
            UnderwritingError::Validation { missing, .. } => missing,
            _ => &[],
        }
    }

    /// Returns the mistyped fields of a validation error
    pub fn invalid_fields(&self) -> &[String] {
        match self {
            UnderwritingError::Validation { invalid, .. } => invalid,
            _ => &[],
        }
    }
}

fn summarize(missing: &[String], invalid: &[String]) -> String {
    let mut parts = Vec::new();
    if !missing.is_empty() {
        parts.push(format!("missing required field(s): {}", missing.join(", ")));
    }
    if !invalid.is_empty() {
        parts.push(format!("invalid field(s): {}", invalid.join(", ")));
    }
    parts.join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message_names_every_missing_field() {
        let err = UnderwritingError::Validation {
            form_type: FormType::WorkersComp,
            missing: vec!["naics_code".to_string(), "total_payroll".to_string()],
            invalid: vec![],
        };
        let message = err.to_string();
        assert!(message.contains("naics_code"));
        assert!(message.contains("total_payroll"));
        assert!(!message.contains("invalid field"));
    }

    #[test]
    fn test_validation_message_includes_invalid_fields() {
        let err = UnderwritingError::Validation {
            form_type: FormType::GeneralLiability,
            missing: vec![],
            invalid: vec!["prior_claims (expected integer)".to_string()],
        };
        assert!(err.to_string().contains("invalid field(s): prior_claims (expected integer)"));
        assert!(err.missing_fields().is_empty());
        assert_eq!(err.invalid_fields().len(), 1);
    }
}
