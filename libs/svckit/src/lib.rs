//! Shared plumbing for the legal case management services.
//!
//! Every service module mounts its REST routes through the same response
//! envelope ([`api::ApiResponse`]), error type ([`api::ApiError`]) and
//! authorization middleware ([`auth::authorize`]).

pub mod api;
pub mod auth;
pub mod db;
pub mod logging;
pub mod module;
pub mod search;
pub mod store;
pub mod upstream;
pub mod validate;

pub use api::{ApiError, ApiJson, ApiPath, ApiQuery, ApiResponse, ApiResult, FieldErrors};
pub use auth::{AuthConfig, AuthState, BearerToken, PolicyRule, PolicyTable, Principal, Verb};
pub use db::DbConfig;
pub use logging::LoggingConfig;
pub use module::ServiceModule;
pub use store::StoreError;
pub use upstream::UpstreamConfig;
pub use validate::Violations;
