//! Contract error types for the client service

use std::collections::BTreeMap;

/// Client service domain errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClientError {
    #[error("{resource} not found: {id}")]
    NotFound { resource: &'static str, id: String },

    /// Unique value already used by another client
    #[error("Conflict: {reason}")]
    Conflict {
        reason: String,
        fields: BTreeMap<String, String>,
    },

    #[error("Validation failed: {message}")]
    Validation {
        message: String,
        fields: BTreeMap<String, String>,
    },

    /// A dependent service could not be reached or answered with an error
    #[error("{service} unavailable: {reason}")]
    UpstreamUnavailable {
        service: &'static str,
        reason: String,
    },

    #[error("Internal error")]
    Internal,
}

impl ClientError {
    pub fn client_not_found(id: impl ToString) -> Self {
        Self::NotFound {
            resource: "Client",
            id: id.to_string(),
        }
    }

    pub fn case_not_found(id: i64) -> Self {
        Self::NotFound {
            resource: "Case",
            id: id.to_string(),
        }
    }

    /// Conflict on a single field
    pub fn duplicate(field: &str, value: &str) -> Self {
        let mut fields = BTreeMap::new();
        fields.insert(field.to_string(), "is already in use".to_string());
        Self::Conflict {
            reason: format!("A client with {field} '{value}' already exists"),
            fields,
        }
    }

    pub fn invalid_field(field: &str, message: impl Into<String>) -> Self {
        let message = message.into();
        let mut fields = BTreeMap::new();
        fields.insert(field.to_string(), message.clone());
        Self::Validation {
            message: format!("{field}: {message}"),
            fields,
        }
    }

    pub fn case_service_unavailable(reason: impl Into<String>) -> Self {
        Self::UpstreamUnavailable {
            service: "Case service",
            reason: reason.into(),
        }
    }
}
