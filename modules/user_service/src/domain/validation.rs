//! Input validation for users

use crate::config::Config;
use crate::contract::{NewUser, UserError, UserPatch};
use svckit::auth::normalize_role;
use svckit::validate::looks_like_email;
use svckit::Violations;

const MAX_EMAIL_LENGTH: usize = 254;
const MAX_NAME_LENGTH: usize = 100;
const MAX_EXTERNAL_ID_LENGTH: usize = 100;

fn into_result(violations: Violations) -> Result<(), UserError> {
    violations
        .finish()
        .map_err(|(message, fields)| UserError::Validation { message, fields })
}

fn check_username(v: &mut Violations, username: &str, config: &Config) {
    if username.trim().chars().any(char::is_whitespace) {
        v.add("username", "must not contain whitespace");
    }
    v.max_len("username", Some(username.trim()), config.max_username_length);
}

fn check_email(v: &mut Violations, email: &str) {
    let email = email.trim();
    if !looks_like_email(email) {
        v.add("email", "must be a valid e-mail address");
    }
    v.max_len("email", Some(email), MAX_EMAIL_LENGTH);
}

pub fn check_roles(v: &mut Violations, roles: &[String], config: &Config) {
    let unknown: Vec<String> = roles
        .iter()
        .map(|r| normalize_role(r))
        .filter(|r| !r.is_empty() && !config.allows_role(r))
        .collect();
    if !unknown.is_empty() {
        v.add("roles", format!("unknown role(s): {}", unknown.join(", ")));
    }
}

pub fn validate_new_user(input: &NewUser, config: &Config) -> Result<(), UserError> {
    let mut v = Violations::new();
    v.require_text("username", &input.username, config.max_username_length);
    check_username(&mut v, &input.username, config);
    if input.email.trim().is_empty() {
        v.add("email", "must not be blank");
    } else {
        check_email(&mut v, &input.email);
    }
    v.max_len("firstName", input.first_name.as_deref(), MAX_NAME_LENGTH);
    v.max_len("lastName", input.last_name.as_deref(), MAX_NAME_LENGTH);
    v.max_len("keycloakId", input.keycloak_id.as_deref(), MAX_EXTERNAL_ID_LENGTH);
    check_roles(&mut v, &input.roles, config);
    into_result(v)
}

pub fn validate_user_patch(patch: &UserPatch, config: &Config) -> Result<(), UserError> {
    let mut v = Violations::new();
    if let Some(username) = patch.username.as_deref().filter(|u| !u.trim().is_empty()) {
        check_username(&mut v, username, config);
    }
    if let Some(email) = patch.email.as_deref().filter(|e| !e.trim().is_empty()) {
        check_email(&mut v, email);
    }
    v.max_len("firstName", patch.first_name.as_deref(), MAX_NAME_LENGTH);
    v.max_len("lastName", patch.last_name.as_deref(), MAX_NAME_LENGTH);
    v.max_len("keycloakId", patch.keycloak_id.as_deref(), MAX_EXTERNAL_ID_LENGTH);
    if let Some(roles) = &patch.roles {
        check_roles(&mut v, roles, config);
    }
    into_result(v)
}

/// A single role name for add/remove
pub fn validate_role(role: &str, config: &Config) -> Result<String, UserError> {
    let role = normalize_role(role);
    if role.is_empty() {
        return Err(UserError::invalid_field("role", "must not be blank"));
    }
    if !config.allows_role(&role) {
        return Err(UserError::invalid_field(
            "role",
            format!("unknown role: {role}"),
        ));
    }
    Ok(role)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(err: UserError) -> Vec<String> {
        match err {
            UserError::Validation { fields, .. } => fields.into_keys().collect(),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn new_user_requires_username_and_email() {
        let err = validate_new_user(&NewUser::default(), &Config::default()).unwrap_err();
        assert_eq!(fields(err), vec!["email", "username"]);
    }

    #[test]
    fn unknown_roles_are_listed() {
        let input = NewUser {
            username: "jdoe".to_string(),
            email: "jdoe@firm.example".to_string(),
            roles: vec!["lawyer".to_string(), "judge".to_string()],
            ..NewUser::default()
        };
        let err = validate_new_user(&input, &Config::default()).unwrap_err();
        match err {
            UserError::Validation { fields, .. } => {
                assert_eq!(fields["roles"], "unknown role(s): JUDGE");
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn username_length_follows_config() {
        let config = Config {
            max_username_length: 4,
            ..Config::default()
        };
        let input = NewUser {
            username: "toolong".to_string(),
            email: "a@b.io".to_string(),
            ..NewUser::default()
        };
        assert_eq!(fields(validate_new_user(&input, &config).unwrap_err()), vec!["username"]);
    }

    #[test]
    fn usernames_cannot_contain_spaces() {
        let patch = UserPatch {
            username: Some("j doe".to_string()),
            ..UserPatch::default()
        };
        assert_eq!(
            fields(validate_user_patch(&patch, &Config::default()).unwrap_err()),
            vec!["username"]
        );
    }

    #[test]
    fn single_role_is_normalized() {
        let config = Config::default();
        assert_eq!(validate_role("role_admin", &config).unwrap(), "ADMIN");
        assert!(validate_role(" ", &config).is_err());
        assert!(validate_role("JUDGE", &config).is_err());
    }
}
