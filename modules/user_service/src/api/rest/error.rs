//! HTTP error mapping into the shared response envelope

use crate::contract::UserError;
use svckit::ApiError;

/// Map domain errors to HTTP errors
pub fn map_domain_error(error: UserError) -> ApiError {
    match error {
        UserError::NotFound { resource, id } => {
            ApiError::not_found(format!("{resource} not found with id: {id}"))
        }
        UserError::Conflict { reason, fields } => ApiError::conflict(reason).with_errors(fields),
        UserError::Validation { message, fields } => {
            ApiError::bad_request(message).with_errors(fields)
        }
        UserError::Internal => ApiError::internal(),
    }
}

impl From<UserError> for ApiError {
    fn from(error: UserError) -> Self {
        map_domain_error(error)
    }
}
