//! Contract models for the user service

use chrono::{DateTime, Utc};
use std::collections::BTreeSet;

/// An application user. Credentials live in the identity provider;
/// `keycloak_id` points at the account there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    /// Unique
    pub username: String,
    /// Unique, stored lower-case
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub enabled: bool,
    /// Upper-case role names
    pub roles: BTreeSet<String>,
    pub keycloak_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for user creation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    /// Defaults to true
    pub enabled: Option<bool>,
    pub roles: Vec<String>,
    pub keycloak_id: Option<String>,
}

/// Partial update; `None` leaves the stored value untouched. Roles are
/// replaced wholesale when present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserPatch {
    pub username: Option<String>,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub enabled: Option<bool>,
    pub roles: Option<Vec<String>>,
    pub keycloak_id: Option<String>,
}
