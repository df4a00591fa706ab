//! Domain service - business logic orchestration

use super::repository::UserRepository;
use super::{rules, validation};
use crate::config::Config;
use crate::contract::{NewUser, User, UserError, UserPatch};
use chrono::Utc;
use std::collections::BTreeMap;
use std::sync::Arc;
use svckit::StoreError;
use tracing::{debug, info};

/// Domain service for users
pub struct Service {
    users: Arc<dyn UserRepository>,
    config: Config,
}

impl Service {
    pub fn new(users: Arc<dyn UserRepository>, config: Config) -> Self {
        Self { users, config }
    }

    pub async fn create_user(&self, input: NewUser) -> Result<User, UserError> {
        validation::validate_new_user(&input, &self.config)?;

        let now = Utc::now();
        let user = User {
            id: 0,
            username: input.username.trim().to_string(),
            email: input.email.trim().to_lowercase(),
            first_name: rules::normalize(input.first_name),
            last_name: rules::normalize(input.last_name),
            enabled: input.enabled.unwrap_or(true),
            roles: rules::normalize_roles(&input.roles),
            keycloak_id: rules::normalize(input.keycloak_id),
            created_at: now,
            updated_at: now,
        };
        self.ensure_unique(&user, None).await?;

        let created = self
            .users
            .insert(&user)
            .await
            .map_err(|e| store_error("insert user", e))?;
        info!(user_id = created.id, username = %created.username, "Created user");
        Ok(created)
    }

    pub async fn get_user(&self, id: i64) -> Result<User, UserError> {
        debug!(user_id = id, "Getting user");
        self.users
            .find_by_id(id)
            .await
            .map_err(|e| store_error("find user", e))?
            .ok_or_else(|| UserError::user_not_found(id))
    }

    pub async fn get_user_by_username(&self, username: &str) -> Result<User, UserError> {
        let username = username.trim();
        self.users
            .find_by_username(username)
            .await
            .map_err(|e| store_error("find user by username", e))?
            .ok_or_else(|| UserError::user_not_found(username))
    }

    pub async fn list_users(&self) -> Result<Vec<User>, UserError> {
        self.users
            .list_all()
            .await
            .map_err(|e| store_error("list users", e))
    }

    pub async fn update_user(&self, id: i64, patch: UserPatch) -> Result<User, UserError> {
        validation::validate_user_patch(&patch, &self.config)?;
        let mut user = self.get_user(id).await?;
        rules::apply_user_patch(&mut user, patch);
        self.ensure_unique(&user, Some(id)).await?;
        self.save(user).await
    }

    pub async fn delete_user(&self, id: i64) -> Result<(), UserError> {
        let removed = self
            .users
            .delete(id)
            .await
            .map_err(|e| store_error("delete user", e))?;
        if !removed {
            return Err(UserError::user_not_found(id));
        }
        info!(user_id = id, "Deleted user");
        Ok(())
    }

    /// Replace the whole role set
    pub async fn replace_roles(&self, id: i64, roles: Vec<String>) -> Result<User, UserError> {
        let mut v = svckit::Violations::new();
        validation::check_roles(&mut v, &roles, &self.config);
        v.finish()
            .map_err(|(message, fields)| UserError::Validation { message, fields })?;

        let mut user = self.get_user(id).await?;
        user.roles = rules::normalize_roles(&roles);
        self.save(user).await
    }

    /// Grant one role; granting a held role changes nothing
    pub async fn add_role(&self, id: i64, role: &str) -> Result<User, UserError> {
        let role = validation::validate_role(role, &self.config)?;
        let mut user = self.get_user(id).await?;
        if !user.roles.insert(role) {
            return Ok(user);
        }
        self.save(user).await
    }

    /// Revoke one role; revoking a role the user lacks is NotFound
    pub async fn remove_role(&self, id: i64, role: &str) -> Result<User, UserError> {
        let role = svckit::auth::normalize_role(role);
        let mut user = self.get_user(id).await?;
        if !user.roles.remove(&role) {
            return Err(UserError::role_not_found(id, &role));
        }
        self.save(user).await
    }

    async fn save(&self, mut user: User) -> Result<User, UserError> {
        user.updated_at = Utc::now();
        let updated = self
            .users
            .update(&user)
            .await
            .map_err(|e| match e {
                StoreError::NotFound => UserError::user_not_found(user.id),
                other => store_error("update user", other),
            })?;
        info!(user_id = updated.id, "Updated user");
        Ok(updated)
    }

    /// Early duplicate detection; the unique indexes remain authoritative
    async fn ensure_unique(&self, user: &User, exclude_id: Option<i64>) -> Result<(), UserError> {
        if self
            .users
            .exists_by_username(&user.username, exclude_id)
            .await
            .map_err(|e| store_error("check username", e))?
        {
            return Err(UserError::duplicate("username", &user.username));
        }
        if self
            .users
            .exists_by_email(&user.email, exclude_id)
            .await
            .map_err(|e| store_error("check email", e))?
        {
            return Err(UserError::duplicate("email", &user.email));
        }
        Ok(())
    }
}

fn store_error(operation: &str, err: StoreError) -> UserError {
    match err {
        StoreError::UniqueViolation(constraint) => {
            debug!(operation, %constraint, "unique constraint violated");
            let field = if constraint.contains("email") {
                "email"
            } else {
                "username"
            };
            let mut fields = BTreeMap::new();
            fields.insert(field.to_string(), "is already in use".to_string());
            UserError::Conflict {
                reason: format!("A user with this {field} already exists"),
                fields,
            }
        }
        other => {
            tracing::error!(operation, error = ?other, "storage failure");
            UserError::Internal
        }
    }
}
