//! Route registration

use super::handlers::{cases, documents, hearings};
use crate::domain::Service;
use axum::{
    routing::{get, patch, post},
    Extension, Router,
};
use std::sync::Arc;

/// Register all case, hearing and document routes. Paths are relative to
/// the API prefix the host nests them under.
pub fn register_routes(router: Router, service: Arc<Service>) -> Router {
    router
        // Cases
        .route("/cases", get(cases::list_cases).post(cases::create_case))
        .route("/cases/search", get(cases::search_cases))
        .route("/cases/number/{case_number}", get(cases::get_case_by_number))
        .route("/cases/client/{client_id}", get(cases::list_cases_by_client))
        .route("/cases/status/{status}", get(cases::list_cases_by_status))
        .route(
            "/cases/assigned/{user_id}",
            get(cases::list_cases_by_assigned_user),
        )
        .route(
            "/cases/{id}",
            get(cases::get_case)
                .put(cases::update_case)
                .delete(cases::delete_case),
        )
        .route("/cases/{id}/status", patch(cases::update_case_status))
        .route(
            "/cases/{id}/clients/{client_id}",
            post(cases::link_client).delete(cases::unlink_client),
        )
        .route("/cases/{id}/hearings", get(cases::list_case_hearings))
        .route("/cases/{id}/documents", get(cases::list_case_documents))
        // Hearings
        .route(
            "/hearings",
            get(hearings::list_hearings).post(hearings::create_hearing),
        )
        .route("/hearings/upcoming", get(hearings::list_upcoming_hearings))
        .route("/hearings/case/{case_id}", get(hearings::list_hearings_by_case))
        .route(
            "/hearings/status/{status}",
            get(hearings::list_hearings_by_status),
        )
        .route(
            "/hearings/{id}",
            get(hearings::get_hearing)
                .put(hearings::update_hearing)
                .delete(hearings::delete_hearing),
        )
        .route(
            "/hearings/{id}/status",
            patch(hearings::update_hearing_status),
        )
        .route(
            "/hearings/{id}/reschedule",
            patch(hearings::reschedule_hearing),
        )
        // Documents
        .route(
            "/documents",
            get(documents::list_documents).post(documents::create_document),
        )
        .route(
            "/documents/case/{case_id}",
            get(documents::list_documents_by_case),
        )
        .route(
            "/documents/type/{document_type}",
            get(documents::list_documents_by_type),
        )
        .route(
            "/documents/{id}",
            get(documents::get_document)
                .put(documents::update_document)
                .delete(documents::delete_document),
        )
        .layer(Extension(service))
}
