//! OpenAPI component schemas for the user service

use super::dto::*;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    components(schemas(UserDto, CreateUserRequest, UpdateUserRequest, ReplaceRolesRequest)),
    tags((name = "users", description = "Application users and roles"))
)]
pub struct UserApiDoc;
