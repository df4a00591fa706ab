use super::{store_error, write_error, Service};
use crate::contract::{CaseError, Hearing, HearingPatch, HearingStatus, NewHearing};
use crate::domain::{rules, validation};
use chrono::{DateTime, Duration, Utc};
use tracing::{debug, info};

impl Service {
    /// Schedule a hearing for an existing case. New hearings start as
    /// SCHEDULED.
    pub async fn create_hearing(&self, input: NewHearing) -> Result<Hearing, CaseError> {
        let now = Utc::now();
        validation::validate_new_hearing(&input, &self.config, now)?;

        let (Some(case_id), Some(scheduled_date)) = (input.case_id, input.scheduled_date) else {
            return Err(CaseError::Internal);
        };
        self.ensure_case_exists(case_id).await?;

        let hearing = Hearing {
            id: 0,
            case_id,
            title: input.title,
            judge_name: input.judge_name,
            scheduled_date,
            actual_start_time: None,
            actual_end_time: None,
            location: input.location,
            status: HearingStatus::Scheduled,
            notes: input.notes,
            created_at: now,
            updated_at: now,
        };

        let created = self
            .hearings
            .insert(&hearing)
            .await
            .map_err(|e| store_error("insert hearing", e))?;
        info!(hearing_id = created.id, case_id, "Scheduled hearing");
        Ok(created)
    }

    pub async fn get_hearing(&self, id: i64) -> Result<Hearing, CaseError> {
        debug!(hearing_id = id, "Getting hearing");
        self.hearings
            .find_by_id(id)
            .await
            .map_err(|e| store_error("find hearing", e))?
            .ok_or_else(|| CaseError::hearing_not_found(id))
    }

    pub async fn list_hearings(&self) -> Result<Vec<Hearing>, CaseError> {
        self.hearings
            .list_all()
            .await
            .map_err(|e| store_error("list hearings", e))
    }

    pub async fn list_hearings_by_status(
        &self,
        status: HearingStatus,
    ) -> Result<Vec<Hearing>, CaseError> {
        self.hearings
            .list_by_status(status)
            .await
            .map_err(|e| store_error("list hearings by status", e))
    }

    /// SCHEDULED or POSTPONED hearings within the configured window from
    /// now, earliest first
    pub async fn list_upcoming_hearings(&self) -> Result<Vec<Hearing>, CaseError> {
        self.list_upcoming_hearings_from(Utc::now()).await
    }

    pub(crate) async fn list_upcoming_hearings_from(
        &self,
        from: DateTime<Utc>,
    ) -> Result<Vec<Hearing>, CaseError> {
        let window = self.config.upcoming_window_days;
        let to = Duration::try_days(i64::from(window))
            .and_then(|days| from.checked_add_signed(days))
            .ok_or_else(|| {
                tracing::error!(window, "upcoming window ends past the supported date range");
                CaseError::Internal
            })?;
        let hearings = self
            .hearings
            .list_scheduled_between(from, to)
            .await
            .map_err(|e| store_error("list upcoming hearings", e))?;
        Ok(hearings
            .into_iter()
            .filter(|h| {
                matches!(
                    h.status,
                    HearingStatus::Scheduled | HearingStatus::Postponed
                )
            })
            .collect())
    }

    pub async fn update_hearing(&self, id: i64, patch: HearingPatch) -> Result<Hearing, CaseError> {
        let now = Utc::now();
        validation::validate_hearing_patch(&patch, &self.config, now)?;
        let mut hearing = self.get_hearing(id).await?;

        rules::apply_hearing_patch(&mut hearing, patch, now);
        hearing.updated_at = now;

        let updated = self
            .hearings
            .update(&hearing)
            .await
            .map_err(|e| {
                write_error("update hearing", e, CaseError::hearing_not_found(id))
            })?;
        info!(hearing_id = id, status = %updated.status, "Updated hearing");
        Ok(updated)
    }

    pub async fn update_hearing_status(
        &self,
        id: i64,
        status: HearingStatus,
    ) -> Result<Hearing, CaseError> {
        self.update_hearing(
            id,
            HearingPatch {
                status: Some(status),
                ..HearingPatch::default()
            },
        )
        .await
    }

    /// Move a hearing to a new future date. The status is left as it is.
    pub async fn reschedule_hearing(
        &self,
        id: i64,
        scheduled_date: DateTime<Utc>,
    ) -> Result<Hearing, CaseError> {
        validation::validate_reschedule(scheduled_date, Utc::now())?;
        self.update_hearing(
            id,
            HearingPatch {
                scheduled_date: Some(scheduled_date),
                ..HearingPatch::default()
            },
        )
        .await
    }

    pub async fn delete_hearing(&self, id: i64) -> Result<(), CaseError> {
        let removed = self
            .hearings
            .delete(id)
            .await
            .map_err(|e| store_error("delete hearing", e))?;
        if !removed {
            return Err(CaseError::hearing_not_found(id));
        }
        info!(hearing_id = id, "Deleted hearing");
        Ok(())
    }
}
