//! Field-level input checks that collect every problem before failing

use crate::api::FieldErrors;

/// Accumulates per-field validation messages. The first message recorded
/// for a field wins.
#[derive(Debug, Default, Clone)]
pub struct Violations {
    fields: FieldErrors,
}

impl Violations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.fields
            .entry(field.to_string())
            .or_insert_with(|| message.into());
    }

    /// Required, non-blank text no longer than `max` characters
    pub fn require_text(&mut self, field: &str, value: &str, max: usize) {
        if value.trim().is_empty() {
            self.add(field, "must not be blank");
        } else {
            self.max_len(field, Some(value), max);
        }
    }

    /// Optional text; when present, blank or longer than `max` is rejected
    pub fn optional_text(&mut self, field: &str, value: Option<&str>, max: usize) {
        if let Some(value) = value {
            self.require_text(field, value, max);
        }
    }

    pub fn max_len(&mut self, field: &str, value: Option<&str>, max: usize) {
        if let Some(value) = value {
            if value.chars().count() > max {
                self.add(field, format!("must be at most {max} characters"));
            }
        }
    }

    pub fn require<T>(&mut self, field: &str, value: Option<&T>) {
        if value.is_none() {
            self.add(field, "is required");
        }
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// `Ok(())` when nothing was recorded, otherwise the summary message and
    /// the field map
    pub fn finish(self) -> Result<(), (String, FieldErrors)> {
        if self.fields.is_empty() {
            return Ok(());
        }
        let summary = self
            .fields
            .iter()
            .map(|(field, message)| format!("{field} {message}"))
            .collect::<Vec<_>>()
            .join("; ");
        Err((format!("Validation failed: {summary}"), self.fields))
    }
}

/// Minimal e-mail shape check: one `@` with text on both sides and a dot in
/// the domain part
pub fn looks_like_email(value: &str) -> bool {
    let mut parts = value.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => {
            !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !value.chars().any(char::is_whitespace)
        }
        _ => false,
    }
}
