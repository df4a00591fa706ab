//! Normalization and partial-update overlay for clients

use crate::contract::{Client, ClientPatch};

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

/// Overlay present, non-blank fields of `patch` onto `client`. Nothing can
/// be cleared through a patch.
pub fn apply_client_patch(client: &mut Client, patch: ClientPatch) {
    if let Some(name) = normalize(patch.name) {
        client.name = name;
    }
    if let Some(surname) = normalize(patch.surname) {
        client.surname = surname;
    }
    overlay(&mut client.email, patch.email);
    overlay(&mut client.phone, patch.phone);
    overlay(&mut client.address, patch.address);
    overlay(&mut client.tax_id, patch.tax_id);
    overlay(&mut client.identity_number, patch.identity_number);
    overlay(&mut client.notes, patch.notes);
    if let Some(active) = patch.active {
        client.active = active;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn client() -> Client {
        let now = Utc::now();
        Client {
            id: 1,
            name: "Jane".to_string(),
            surname: "Smith".to_string(),
            email: Some("jane@example.com".to_string()),
            phone: None,
            address: None,
            tax_id: Some("TX-1".to_string()),
            identity_number: None,
            notes: None,
            active: true,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn blank_values_normalize_to_none() {
        assert_eq!(normalize(Some("   ".to_string())), None);
        assert_eq!(normalize(Some(" a ".to_string())), Some("a".to_string()));
        assert_eq!(normalize(None), None);
    }

    #[test]
    fn empty_patch_changes_nothing() {
        let mut c = client();
        let before = c.clone();
        apply_client_patch(&mut c, ClientPatch::default());
        assert_eq!(c, before);
    }

    #[test]
    fn blank_patch_value_does_not_clear() {
        let mut c = client();
        apply_client_patch(
            &mut c,
            ClientPatch {
                email: Some(String::new()),
                phone: Some("555-0100".to_string()),
                active: Some(false),
                ..ClientPatch::default()
            },
        );
        assert_eq!(c.email.as_deref(), Some("jane@example.com"));
        assert_eq!(c.phone.as_deref(), Some("555-0100"));
        assert!(!c.active);
    }
}
