//! HTTP error mapping into the shared response envelope

use crate::contract::ClientError;
use svckit::ApiError;

/// Map domain errors to HTTP errors
pub fn map_domain_error(error: ClientError) -> ApiError {
    match error {
        ClientError::NotFound { resource, id } => {
            ApiError::not_found(format!("{resource} not found with id: {id}"))
        }
        ClientError::Conflict { reason, fields } => ApiError::conflict(reason).with_errors(fields),
        ClientError::Validation { message, fields } => {
            ApiError::bad_request(message).with_errors(fields)
        }
        ClientError::UpstreamUnavailable { service, reason } => {
            tracing::warn!(service, %reason, "dependent service unavailable");
            ApiError::upstream_unavailable(format!("{service} is currently unavailable"))
        }
        ClientError::Internal => ApiError::internal(),
    }
}

impl From<ClientError> for ApiError {
    fn from(error: ClientError) -> Self {
        map_domain_error(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn duplicate_maps_to_conflict_with_field() {
        let err = map_domain_error(ClientError::duplicate("email", "a@b.io"));
        assert_eq!(err.status, StatusCode::CONFLICT);
        assert!(err.errors.is_some_and(|e| e.contains_key("email")));
    }

    #[test]
    fn upstream_failure_is_service_unavailable() {
        let err = map_domain_error(ClientError::case_service_unavailable("connection refused"));
        assert_eq!(err.status, StatusCode::SERVICE_UNAVAILABLE);
        assert!(!err.message.contains("connection refused"));
    }

    #[test]
    fn not_found_names_resource() {
        let err = map_domain_error(ClientError::client_not_found(12));
        assert_eq!(err.status, StatusCode::NOT_FOUND);
        assert_eq!(err.message, "Client not found with id: 12");
    }
}
