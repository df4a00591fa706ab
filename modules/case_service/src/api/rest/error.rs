//! HTTP error mapping into the shared response envelope

use crate::contract::CaseError;
use svckit::ApiError;

/// Map domain errors to HTTP errors
pub fn map_domain_error(error: CaseError) -> ApiError {
    match error {
        CaseError::NotFound { resource, id } => {
            ApiError::not_found(format!("{resource} not found with id: {id}"))
        }
        CaseError::Conflict { reason } => ApiError::conflict(reason),
        CaseError::Validation { message, fields } => {
            ApiError::bad_request(message).with_errors(fields)
        }
        CaseError::Internal => ApiError::internal(),
    }
}

impl From<CaseError> for ApiError {
    fn from(error: CaseError) -> Self {
        map_domain_error(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn taxonomy_maps_to_status_codes() {
        assert_eq!(
            map_domain_error(CaseError::case_not_found(9)).status,
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            map_domain_error(CaseError::conflict("taken")).status,
            StatusCode::CONFLICT
        );
        assert_eq!(
            map_domain_error(CaseError::invalid_field("title", "must not be blank")).status,
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            map_domain_error(CaseError::Internal).status,
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn validation_keeps_field_map() {
        let err = map_domain_error(CaseError::invalid_field("title", "must not be blank"));
        assert_eq!(
            err.errors.and_then(|e| e.get("title").cloned()).as_deref(),
            Some("must not be blank")
        );
    }
}
