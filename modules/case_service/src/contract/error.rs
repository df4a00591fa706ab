//! Contract error types for the case service
//!
//! These errors are transport-agnostic; the REST layer maps them to HTTP.

use std::collections::BTreeMap;

/// Case service domain errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CaseError {
    /// Case, hearing or document not found
    #[error("{resource} not found: {id}")]
    NotFound { resource: &'static str, id: String },

    /// Unique value already taken
    #[error("Conflict: {reason}")]
    Conflict { reason: String },

    /// Missing or malformed input, with per-field messages
    #[error("Validation failed: {message}")]
    Validation {
        message: String,
        fields: BTreeMap<String, String>,
    },

    #[error("Internal error")]
    Internal,
}

impl CaseError {
    pub fn case_not_found(id: i64) -> Self {
        Self::NotFound {
            resource: "Case",
            id: id.to_string(),
        }
    }

    pub fn case_number_not_found(case_number: &str) -> Self {
        Self::NotFound {
            resource: "Case",
            id: case_number.to_string(),
        }
    }

    pub fn hearing_not_found(id: i64) -> Self {
        Self::NotFound {
            resource: "Hearing",
            id: id.to_string(),
        }
    }

    pub fn document_not_found(id: i64) -> Self {
        Self::NotFound {
            resource: "Document",
            id: id.to_string(),
        }
    }

    pub fn conflict(reason: impl Into<String>) -> Self {
        Self::Conflict {
            reason: reason.into(),
        }
    }

    /// Single-field validation failure
    pub fn invalid_field(field: &str, message: impl Into<String>) -> Self {
        let message = message.into();
        let mut fields = BTreeMap::new();
        fields.insert(field.to_string(), message.clone());
        Self::Validation {
            message: format!("{field}: {message}"),
            fields,
        }
    }
}
