//! Entity to model mappers

use super::entity::{user, user_role};
use crate::contract::User;
use sea_orm::ActiveValue::{NotSet, Set};

/// A user row together with its role names
pub struct UserRow(pub user::Model, pub Vec<String>);

impl From<UserRow> for User {
    fn from(UserRow(row, roles): UserRow) -> Self {
        Self {
            id: row.id,
            username: row.username,
            email: row.email,
            first_name: row.first_name,
            last_name: row.last_name,
            enabled: row.enabled,
            roles: roles.into_iter().collect(),
            keycloak_id: row.keycloak_id,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

impl From<&User> for user::ActiveModel {
    /// The id is left unset for zero so the store assigns one on insert
    fn from(model: &User) -> Self {
        Self {
            id: if model.id == 0 { NotSet } else { Set(model.id) },
            username: Set(model.username.clone()),
            email: Set(model.email.clone()),
            first_name: Set(model.first_name.clone()),
            last_name: Set(model.last_name.clone()),
            enabled: Set(model.enabled),
            keycloak_id: Set(model.keycloak_id.clone()),
            created_at: Set(model.created_at),
            updated_at: Set(model.updated_at),
        }
    }
}

pub fn role_rows(user_id: i64, user: &User) -> Vec<user_role::ActiveModel> {
    user.roles
        .iter()
        .map(|role| user_role::ActiveModel {
            user_id: Set(user_id),
            role: Set(role.clone()),
        })
        .collect()
}
