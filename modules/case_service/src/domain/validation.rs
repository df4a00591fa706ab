//! Input validation for cases, hearings and documents
//!
//! Field names in the reported map use the wire (camelCase) spelling.

use crate::config::Config;
use crate::contract::{
    CaseError, CasePatch, CaseStatus, DocumentPatch, HearingPatch, NewCase, NewDocument,
    NewHearing,
};
use chrono::{DateTime, Utc};
use svckit::Violations;

const MAX_LOCATION_LENGTH: usize = 255;
const MAX_JUDGE_NAME_LENGTH: usize = 100;
const MAX_NOTES_LENGTH: usize = 5000;

fn into_result(violations: Violations) -> Result<(), CaseError> {
    violations
        .finish()
        .map_err(|(message, fields)| CaseError::Validation { message, fields })
}

pub fn validate_new_case(input: &NewCase, config: &Config) -> Result<(), CaseError> {
    let mut v = Violations::new();
    v.require_text("title", &input.title, config.max_title_length);
    v.max_len(
        "description",
        input.description.as_deref(),
        config.max_description_length,
    );
    into_result(v)
}

pub fn validate_case_patch(patch: &CasePatch, config: &Config) -> Result<(), CaseError> {
    let mut v = Violations::new();
    v.optional_text("title", patch.title.as_deref(), config.max_title_length);
    v.max_len(
        "description",
        patch.description.as_deref(),
        config.max_description_length,
    );
    if patch.close_date.is_some() && patch.status != Some(CaseStatus::Closed) {
        v.add("closeDate", "may only be supplied together with status CLOSED");
    }
    into_result(v)
}

pub fn validate_new_hearing(
    input: &NewHearing,
    config: &Config,
    now: DateTime<Utc>,
) -> Result<(), CaseError> {
    let mut v = Violations::new();
    v.require("caseId", input.case_id.as_ref());
    match input.scheduled_date {
        None => v.add("scheduledDate", "is required"),
        Some(date) if date <= now => v.add("scheduledDate", "must be in the future"),
        Some(_) => {}
    }
    v.require_text("location", &input.location, MAX_LOCATION_LENGTH);
    v.optional_text("title", input.title.as_deref(), config.max_title_length);
    v.max_len("judgeName", input.judge_name.as_deref(), MAX_JUDGE_NAME_LENGTH);
    v.max_len("notes", input.notes.as_deref(), MAX_NOTES_LENGTH);
    into_result(v)
}

pub fn validate_hearing_patch(
    patch: &HearingPatch,
    config: &Config,
    now: DateTime<Utc>,
) -> Result<(), CaseError> {
    let mut v = Violations::new();
    if let Some(date) = patch.scheduled_date {
        if date <= now {
            v.add("scheduledDate", "must be in the future");
        }
    }
    v.optional_text("location", patch.location.as_deref(), MAX_LOCATION_LENGTH);
    v.optional_text("title", patch.title.as_deref(), config.max_title_length);
    v.max_len("judgeName", patch.judge_name.as_deref(), MAX_JUDGE_NAME_LENGTH);
    v.max_len("notes", patch.notes.as_deref(), MAX_NOTES_LENGTH);
    into_result(v)
}

pub fn validate_reschedule(
    scheduled_date: DateTime<Utc>,
    now: DateTime<Utc>,
) -> Result<(), CaseError> {
    if scheduled_date <= now {
        return Err(CaseError::invalid_field(
            "scheduledDate",
            "must be in the future",
        ));
    }
    Ok(())
}

pub fn validate_new_document(input: &NewDocument, config: &Config) -> Result<(), CaseError> {
    let mut v = Violations::new();
    v.require("caseId", input.case_id.as_ref());
    v.require_text("title", &input.title, config.max_title_length);
    into_result(v)
}

pub fn validate_document_patch(patch: &DocumentPatch, config: &Config) -> Result<(), CaseError> {
    let mut v = Violations::new();
    v.optional_text("title", patch.title.as_deref(), config.max_title_length);
    into_result(v)
}

/// Search terms must contain something other than whitespace
pub fn validate_search_term(term: &str) -> Result<(), CaseError> {
    if term.trim().is_empty() {
        return Err(CaseError::invalid_field("term", "must not be blank"));
    }
    Ok(())
}
