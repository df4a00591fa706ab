//! Status-transition side effects and partial-update overlay.
//!
//! No transition graph is enforced: any status may move to any other. The
//! only decisions are the timestamps set on entry to a status.

use crate::contract::{
    Case, CasePatch, CaseStatus, Document, DocumentPatch, Hearing, HearingPatch, HearingStatus,
};
use chrono::{DateTime, NaiveDate, Utc};

/// Replace `target` only when a value was supplied
fn overlay<T>(target: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *target = value;
    }
}

/// Like [`overlay`] for nullable stored fields; absent never clears
fn overlay_opt<T>(target: &mut Option<T>, value: Option<T>) {
    if value.is_some() {
        *target = value;
    }
}

/// Nullable text: absent or blank never clears, supplied text is trimmed
fn overlay_text(target: &mut Option<String>, value: Option<String>) {
    let value = value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty());
    overlay_opt(target, value);
}

/// Move a case to `status`. Entering CLOSED stamps `close_date` with
/// `transition_date` unless a close date is already recorded.
pub fn apply_case_status(case: &mut Case, status: CaseStatus, transition_date: NaiveDate) {
    case.status = status;
    if status == CaseStatus::Closed && case.close_date.is_none() {
        case.close_date = Some(transition_date);
    }
}

/// Overlay the non-null fields of `patch` onto `case`.
///
/// `client_ids` in the patch is normalized by the caller. The patch's
/// `close_date` only serves as the transition date of a CLOSED status.
pub fn apply_case_patch(case: &mut Case, patch: CasePatch, today: NaiveDate) {
    let CasePatch {
        title,
        description,
        status,
        open_date,
        close_date,
        client_ids,
        assigned_user_id,
    } = patch;

    overlay(&mut case.title, title);
    overlay_text(&mut case.description, description);
    overlay(&mut case.open_date, open_date);
    overlay(&mut case.client_ids, client_ids);
    overlay_opt(&mut case.assigned_user_id, assigned_user_id);

    if let Some(status) = status {
        apply_case_status(case, status, close_date.unwrap_or(today));
    }
}

/// Move a hearing to `status`. Entering IN_PROGRESS / COMPLETED stamps the
/// actual start / end time the first time only.
pub fn apply_hearing_status(hearing: &mut Hearing, status: HearingStatus, now: DateTime<Utc>) {
    hearing.status = status;
    match status {
        HearingStatus::InProgress if hearing.actual_start_time.is_none() => {
            hearing.actual_start_time = Some(now);
        }
        HearingStatus::Completed if hearing.actual_end_time.is_none() => {
            hearing.actual_end_time = Some(now);
        }
        _ => {}
    }
}

/// Overlay the non-null fields of `patch` onto `hearing`. Changing the
/// scheduled date leaves the status alone.
pub fn apply_hearing_patch(hearing: &mut Hearing, patch: HearingPatch, now: DateTime<Utc>) {
    let HearingPatch {
        title,
        judge_name,
        scheduled_date,
        location,
        status,
        notes,
    } = patch;

    overlay_text(&mut hearing.title, title);
    overlay_text(&mut hearing.judge_name, judge_name);
    overlay(&mut hearing.scheduled_date, scheduled_date);
    overlay(&mut hearing.location, location);
    overlay_text(&mut hearing.notes, notes);

    if let Some(status) = status {
        apply_hearing_status(hearing, status, now);
    }
}

pub fn apply_document_patch(document: &mut Document, patch: DocumentPatch) {
    overlay(&mut document.title, patch.title);
    overlay(&mut document.document_type, patch.document_type);
    overlay_text(&mut document.content, patch.content);
}

/// Sort and deduplicate client ids
pub fn normalize_client_ids(mut ids: Vec<i64>) -> Vec<i64> {
    ids.sort_unstable();
    ids.dedup();
    ids
}
