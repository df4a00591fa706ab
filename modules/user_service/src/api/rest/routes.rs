//! Route registration

use super::handlers;
use crate::domain::Service;
use axum::{
    routing::{get, post, put},
    Extension, Router,
};
use std::sync::Arc;

/// Register user routes, relative to the API prefix
pub fn register_routes(router: Router, service: Arc<Service>) -> Router {
    router
        .route("/users", get(handlers::list_users).post(handlers::create_user))
        .route(
            "/users/username/{username}",
            get(handlers::get_user_by_username),
        )
        .route(
            "/users/{id}",
            get(handlers::get_user)
                .put(handlers::update_user)
                .delete(handlers::delete_user),
        )
        .route("/users/{id}/roles", put(handlers::replace_roles))
        .route(
            "/users/{id}/roles/{role}",
            post(handlers::add_role).delete(handlers::remove_role),
        )
        .layer(Extension(service))
}
