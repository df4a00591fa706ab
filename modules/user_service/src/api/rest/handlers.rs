//! HTTP request handlers - thin layer that delegates to the domain service

use super::dto::*;
use crate::domain::Service;
use axum::{http::StatusCode, Extension};
use std::sync::Arc;
use svckit::api::{created, ok};
use svckit::{ApiError, ApiJson, ApiPath, ApiResult};

pub async fn list_users(Extension(service): Extension<Arc<Service>>) -> ApiResult<Vec<UserDto>> {
    let users = service.list_users().await?;
    ok(
        "Users retrieved successfully",
        users.into_iter().map(UserDto::from).collect(),
    )
}

pub async fn get_user(
    Extension(service): Extension<Arc<Service>>,
    ApiPath(id): ApiPath<i64>,
) -> ApiResult<UserDto> {
    let user = service.get_user(id).await?;
    ok("User retrieved successfully", user.into())
}

pub async fn get_user_by_username(
    Extension(service): Extension<Arc<Service>>,
    ApiPath(username): ApiPath<String>,
) -> ApiResult<UserDto> {
    let user = service.get_user_by_username(&username).await?;
    ok("User retrieved successfully", user.into())
}

pub async fn create_user(
    Extension(service): Extension<Arc<Service>>,
    ApiJson(req): ApiJson<CreateUserRequest>,
) -> ApiResult<UserDto> {
    let user = service.create_user(req.into()).await?;
    created("User created successfully", user.into())
}

pub async fn update_user(
    Extension(service): Extension<Arc<Service>>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(req): ApiJson<UpdateUserRequest>,
) -> ApiResult<UserDto> {
    let user = service.update_user(id, req.into()).await?;
    ok("User updated successfully", user.into())
}

pub async fn delete_user(
    Extension(service): Extension<Arc<Service>>,
    ApiPath(id): ApiPath<i64>,
) -> Result<StatusCode, ApiError> {
    service.delete_user(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn replace_roles(
    Extension(service): Extension<Arc<Service>>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(req): ApiJson<ReplaceRolesRequest>,
) -> ApiResult<UserDto> {
    let user = service.replace_roles(id, req.roles).await?;
    ok("User roles updated successfully", user.into())
}

pub async fn add_role(
    Extension(service): Extension<Arc<Service>>,
    ApiPath((id, role)): ApiPath<(i64, String)>,
) -> ApiResult<UserDto> {
    let user = service.add_role(id, &role).await?;
    ok("Role added successfully", user.into())
}

pub async fn remove_role(
    Extension(service): Extension<Arc<Service>>,
    ApiPath((id, role)): ApiPath<(i64, String)>,
) -> ApiResult<UserDto> {
    let user = service.remove_role(id, &role).await?;
    ok("Role removed successfully", user.into())
}
