//! Role normalization and partial-update overlay for users

use crate::contract::{User, UserPatch};
use std::collections::BTreeSet;
use svckit::auth::normalize_role;

/// Normalize role names into a set, dropping blanks
pub fn normalize_roles<'a>(roles: impl IntoIterator<Item = &'a String>) -> BTreeSet<String> {
    roles
        .into_iter()
        .map(|role| normalize_role(role))
        .filter(|role| !role.is_empty())
        .collect()
}

/// Trim a free-text value; blank becomes `None`
pub fn normalize(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn overlay(target: &mut Option<String>, value: Option<String>) {
    if let Some(value) = normalize(value) {
        *target = Some(value);
    }
}

/// Overlay present, non-blank fields of `patch` onto `user`. A present
/// role list replaces the role set, even when empty.
pub fn apply_user_patch(user: &mut User, patch: UserPatch) {
    if let Some(username) = normalize(patch.username) {
        user.username = username;
    }
    if let Some(email) = normalize(patch.email) {
        user.email = email.to_lowercase();
    }
    overlay(&mut user.first_name, patch.first_name);
    overlay(&mut user.last_name, patch.last_name);
    overlay(&mut user.keycloak_id, patch.keycloak_id);
    if let Some(enabled) = patch.enabled {
        user.enabled = enabled;
    }
    if let Some(roles) = patch.roles {
        user.roles = normalize_roles(&roles);
    }
}
