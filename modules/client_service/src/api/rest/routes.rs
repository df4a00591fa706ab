//! Route registration

use super::handlers;
use crate::domain::Service;
use axum::{routing::get, Extension, Router};
use std::sync::Arc;

/// Register client routes, relative to the API prefix
pub fn register_routes(router: Router, service: Arc<Service>) -> Router {
    router
        .route(
            "/clients",
            get(handlers::list_clients).post(handlers::create_client),
        )
        .route("/clients/search", get(handlers::search_clients))
        .route("/clients/active", get(handlers::list_active_clients))
        .route("/clients/email/{email}", get(handlers::get_client_by_email))
        .route(
            "/clients/{id}",
            get(handlers::get_client)
                .put(handlers::update_client)
                .delete(handlers::delete_client),
        )
        .route("/clients/{id}/cases", get(handlers::list_client_cases))
        .route(
            "/clients/{id}/cases/{case_id}",
            get(handlers::get_client_case),
        )
        .layer(Extension(service))
}
