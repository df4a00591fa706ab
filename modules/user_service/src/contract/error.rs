//! Contract error types for the user service

use std::collections::BTreeMap;

/// User service domain errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserError {
    #[error("{resource} not found: {id}")]
    NotFound { resource: &'static str, id: String },

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

    #[error("Internal error")]
    Internal,
}

impl UserError {
    pub fn user_not_found(id: impl ToString) -> Self {
        Self::NotFound {
            resource: "User",
            id: id.to_string(),
        }
    }

    pub fn role_not_found(user_id: i64, role: &str) -> Self {
        Self::NotFound {
            resource: "Role",
            id: format!("{role} for user {user_id}"),
        }
    }

    pub fn duplicate(field: &str, value: &str) -> Self {
        let mut fields = BTreeMap::new();
        fields.insert(field.to_string(), "is already in use".to_string());
        Self::Conflict {
            reason: format!("A user with {field} '{value}' already exists"),
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
}
