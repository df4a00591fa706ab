//! Input validation for clients

use crate::config::Config;
use crate::contract::{ClientError, ClientPatch, NewClient};
use svckit::validate::looks_like_email;
use svckit::Violations;

const MAX_EMAIL_LENGTH: usize = 254;
const MAX_SHORT_FIELD_LENGTH: usize = 50;
const MAX_ADDRESS_LENGTH: usize = 500;
const MAX_NOTES_LENGTH: usize = 5000;

fn into_result(violations: Violations) -> Result<(), ClientError> {
    violations
        .finish()
        .map_err(|(message, fields)| ClientError::Validation { message, fields })
}

fn check_optional(v: &mut Violations, email: Option<&str>, other: [(&str, Option<&str>, usize); 5]) {
    if let Some(email) = email.map(str::trim).filter(|e| !e.is_empty()) {
        if !looks_like_email(email) {
            v.add("email", "must be a valid e-mail address");
        }
        v.max_len("email", Some(email), MAX_EMAIL_LENGTH);
    }
    for (field, value, max) in other {
        v.max_len(field, value, max);
    }
}

pub fn validate_new_client(input: &NewClient, config: &Config) -> Result<(), ClientError> {
    let mut v = Violations::new();
    v.require_text("name", &input.name, config.max_name_length);
    v.require_text("surname", &input.surname, config.max_name_length);
    check_optional(
        &mut v,
        input.email.as_deref(),
        [
            ("phone", input.phone.as_deref(), MAX_SHORT_FIELD_LENGTH),
            ("address", input.address.as_deref(), MAX_ADDRESS_LENGTH),
            ("taxId", input.tax_id.as_deref(), MAX_SHORT_FIELD_LENGTH),
            (
                "identityNumber",
                input.identity_number.as_deref(),
                MAX_SHORT_FIELD_LENGTH,
            ),
            ("notes", input.notes.as_deref(), MAX_NOTES_LENGTH),
        ],
    );
    into_result(v)
}

pub fn validate_client_patch(patch: &ClientPatch, config: &Config) -> Result<(), ClientError> {
    let mut v = Violations::new();
    v.max_len("name", patch.name.as_deref(), config.max_name_length);
    v.max_len("surname", patch.surname.as_deref(), config.max_name_length);
    check_optional(
        &mut v,
        patch.email.as_deref(),
        [
            ("phone", patch.phone.as_deref(), MAX_SHORT_FIELD_LENGTH),
            ("address", patch.address.as_deref(), MAX_ADDRESS_LENGTH),
            ("taxId", patch.tax_id.as_deref(), MAX_SHORT_FIELD_LENGTH),
            (
                "identityNumber",
                patch.identity_number.as_deref(),
                MAX_SHORT_FIELD_LENGTH,
            ),
            ("notes", patch.notes.as_deref(), MAX_NOTES_LENGTH),
        ],
    );
    into_result(v)
}

pub fn validate_search_term(term: &str) -> Result<(), ClientError> {
    if term.trim().is_empty() {
        return Err(ClientError::invalid_field("term", "must not be blank"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_and_surname_are_required() {
        match validate_new_client(&NewClient::default(), &Config::default()) {
            Err(ClientError::Validation { fields, .. }) => {
                assert!(fields.contains_key("name"));
                assert!(fields.contains_key("surname"));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn malformed_email_is_rejected_but_blank_is_fine() {
        let mut input = NewClient {
            name: "Jane".to_string(),
            surname: "Smith".to_string(),
            email: Some("not-an-email".to_string()),
            ..NewClient::default()
        };
        assert!(validate_new_client(&input, &Config::default()).is_err());

        input.email = Some("  ".to_string());
        assert!(validate_new_client(&input, &Config::default()).is_ok());
    }
}
