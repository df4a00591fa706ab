use super::{store_error, write_error, Service};
use crate::contract::{Case, CaseError, CasePatch, CaseStatus, Document, Hearing, NewCase};
use crate::domain::{rules, validation};
use chrono::{Datelike, NaiveDate, Utc};
use rand::Rng;
use svckit::StoreError;
use tracing::{debug, info, warn};

impl Service {
    /// Create a case with a freshly generated case number.
    ///
    /// The store's unique index on the case number decides collisions; a
    /// colliding number is regenerated up to `case_number_max_attempts`
    /// times.
    pub async fn create_case(&self, input: NewCase) -> Result<Case, CaseError> {
        validation::validate_new_case(&input, &self.config)?;

        let now = Utc::now();
        let mut case = Case {
            id: 0,
            case_number: String::new(),
            title: input.title,
            description: input.description,
            status: CaseStatus::Open,
            open_date: input.open_date.unwrap_or_else(|| now.date_naive()),
            close_date: None,
            client_ids: rules::normalize_client_ids(input.client_ids),
            assigned_user_id: input.assigned_user_id,
            created_at: now,
            updated_at: now,
        };
        if let Some(status) = input.status {
            rules::apply_case_status(&mut case, status, now.date_naive());
        }

        let attempts = self.config.case_number_max_attempts.max(1);
        for attempt in 1..=attempts {
            case.case_number = self.generate_case_number(now.year());
            match self.cases.insert(&case).await {
                Ok(created) => {
                    info!(
                        case_id = created.id,
                        case_number = %created.case_number,
                        "Created case"
                    );
                    return Ok(created);
                }
                Err(StoreError::UniqueViolation(constraint)) => {
                    warn!(
                        attempt,
                        case_number = %case.case_number,
                        %constraint,
                        "Case number collision, regenerating"
                    );
                }
                Err(e) => return Err(store_error("insert case", e)),
            }
        }

        Err(CaseError::conflict(format!(
            "Could not allocate a unique case number after {attempts} attempts"
        )))
    }

    /// `{prefix}-{year}-{8 uppercase hex digits}`
    fn generate_case_number(&self, year: i32) -> String {
        let suffix: u32 = rand::rng().random();
        format!("{}-{}-{:08X}", self.config.case_number_prefix, year, suffix)
    }

    pub async fn get_case(&self, id: i64) -> Result<Case, CaseError> {
        debug!(case_id = id, "Getting case");
        self.cases
            .find_by_id(id)
            .await
            .map_err(|e| store_error("find case", e))?
            .ok_or_else(|| CaseError::case_not_found(id))
    }

    pub async fn get_case_by_number(&self, case_number: &str) -> Result<Case, CaseError> {
        debug!(%case_number, "Getting case by number");
        self.cases
            .find_by_number(case_number)
            .await
            .map_err(|e| store_error("find case by number", e))?
            .ok_or_else(|| CaseError::case_number_not_found(case_number))
    }

    pub async fn list_cases(&self) -> Result<Vec<Case>, CaseError> {
        self.cases
            .list_all()
            .await
            .map_err(|e| store_error("list cases", e))
    }

    /// Cases linked to a client. Unknown clients simply have no cases; the
    /// client itself lives in another service.
    pub async fn list_cases_by_client(&self, client_id: i64) -> Result<Vec<Case>, CaseError> {
        debug!(client_id, "Listing cases for client");
        self.cases
            .list_by_client(client_id)
            .await
            .map_err(|e| store_error("list cases by client", e))
    }

    pub async fn list_cases_by_status(&self, status: CaseStatus) -> Result<Vec<Case>, CaseError> {
        self.cases
            .list_by_status(status)
            .await
            .map_err(|e| store_error("list cases by status", e))
    }

    pub async fn list_cases_by_assigned_user(&self, user_id: i64) -> Result<Vec<Case>, CaseError> {
        self.cases
            .list_by_assigned_user(user_id)
            .await
            .map_err(|e| store_error("list cases by assignee", e))
    }

    /// Case-insensitive substring search over title and case number
    pub async fn search_cases(&self, term: &str) -> Result<Vec<Case>, CaseError> {
        validation::validate_search_term(term)?;
        self.cases
            .search(term.trim())
            .await
            .map_err(|e| store_error("search cases", e))
    }

    /// Partial update. Absent fields keep their stored value; the case
    /// number is never changed.
    pub async fn update_case(&self, id: i64, patch: CasePatch) -> Result<Case, CaseError> {
        validation::validate_case_patch(&patch, &self.config)?;
        let mut case = self.get_case(id).await?;

        let patch = CasePatch {
            client_ids: patch.client_ids.map(rules::normalize_client_ids),
            ..patch
        };
        let now = Utc::now();
        rules::apply_case_patch(&mut case, patch, now.date_naive());
        case.updated_at = now;

        let updated = self
            .cases
            .update(&case)
            .await
            .map_err(|e| write_error("update case", e, CaseError::case_not_found(id)))?;
        info!(case_id = id, status = %updated.status, "Updated case");
        Ok(updated)
    }

    /// Change only the status; `close_date` is the transition date used when
    /// the case is closed and defaults to today.
    pub async fn update_case_status(
        &self,
        id: i64,
        status: CaseStatus,
        close_date: Option<NaiveDate>,
    ) -> Result<Case, CaseError> {
        self.update_case(
            id,
            CasePatch {
                status: Some(status),
                close_date,
                ..CasePatch::default()
            },
        )
        .await
    }

    /// Link a client to a case. Linking an already linked client is a no-op.
    pub async fn link_client(&self, case_id: i64, client_id: i64) -> Result<Case, CaseError> {
        self.ensure_case_exists(case_id).await?;
        let added = self
            .cases
            .link_client(case_id, client_id)
            .await
            .map_err(|e| {
                write_error("link client", e, CaseError::case_not_found(case_id))
            })?;
        if added {
            info!(case_id, client_id, "Linked client to case");
        }
        self.get_case(case_id).await
    }

    pub async fn unlink_client(&self, case_id: i64, client_id: i64) -> Result<Case, CaseError> {
        self.ensure_case_exists(case_id).await?;
        let removed = self
            .cases
            .unlink_client(case_id, client_id)
            .await
            .map_err(|e| store_error("unlink client", e))?;
        if !removed {
            return Err(CaseError::NotFound {
                resource: "Case client link",
                id: format!("{case_id}/{client_id}"),
            });
        }
        info!(case_id, client_id, "Unlinked client from case");
        self.get_case(case_id).await
    }

    pub async fn list_case_hearings(&self, case_id: i64) -> Result<Vec<Hearing>, CaseError> {
        self.ensure_case_exists(case_id).await?;
        self.hearings
            .list_by_case(case_id)
            .await
            .map_err(|e| store_error("list hearings by case", e))
    }

    pub async fn list_case_documents(&self, case_id: i64) -> Result<Vec<Document>, CaseError> {
        self.ensure_case_exists(case_id).await?;
        self.documents
            .list_by_case(case_id)
            .await
            .map_err(|e| store_error("list documents by case", e))
    }

    /// Delete a case together with its hearings, documents and client links
    pub async fn delete_case(&self, id: i64) -> Result<(), CaseError> {
        let removed = self
            .cases
            .delete_cascade(id)
            .await
            .map_err(|e| store_error("delete case", e))?;
        if !removed {
            return Err(CaseError::case_not_found(id));
        }
        info!(case_id = id, "Deleted case with its hearings and documents");
        Ok(())
    }
}
