//! Mapper implementations for converting between DTOs and contract models

use super::dto::*;
use crate::contract::{NewUser, User, UserPatch};

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            enabled: user.enabled,
            roles: user.roles.into_iter().collect(),
            keycloak_id: user.keycloak_id,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

impl From<CreateUserRequest> for NewUser {
    fn from(req: CreateUserRequest) -> Self {
        Self {
            username: req.username.unwrap_or_default(),
            email: req.email.unwrap_or_default(),
            first_name: req.first_name,
            last_name: req.last_name,
            enabled: req.enabled,
            roles: req.roles,
            keycloak_id: req.keycloak_id,
        }
    }
}

impl From<UpdateUserRequest> for UserPatch {
    fn from(req: UpdateUserRequest) -> Self {
        Self {
            username: req.username,
            email: req.email,
            first_name: req.first_name,
            last_name: req.last_name,
            enabled: req.enabled,
            roles: req.roles,
            keycloak_id: req.keycloak_id,
        }
    }
}
