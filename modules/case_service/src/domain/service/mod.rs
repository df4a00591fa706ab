//! Domain service - business logic orchestration
//!
//! One [`Service`] serves the whole case aggregate. Operations are split by
//! entity across the submodules.

mod cases;
mod documents;
mod hearings;

use crate::config::Config;
use crate::contract::CaseError;
use crate::domain::repository::{CaseRepository, DocumentRepository, HearingRepository};
use std::sync::Arc;
use svckit::StoreError;

/// Domain service for cases, hearings and documents
pub struct Service {
    cases: Arc<dyn CaseRepository>,
    hearings: Arc<dyn HearingRepository>,
    documents: Arc<dyn DocumentRepository>,
    config: Config,
}

impl Service {
    pub fn new(
        cases: Arc<dyn CaseRepository>,
        hearings: Arc<dyn HearingRepository>,
        documents: Arc<dyn DocumentRepository>,
        config: Config,
    ) -> Self {
        Self {
            cases,
            hearings,
            documents,
            config,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    async fn ensure_case_exists(&self, case_id: i64) -> Result<(), CaseError> {
        let exists = self
            .cases
            .exists(case_id)
            .await
            .map_err(|e| store_error("check case existence", e))?;
        if exists {
            Ok(())
        } else {
            Err(CaseError::case_not_found(case_id))
        }
    }
}

/// Map a storage failure to the contract error.
///
/// Unique violations become conflicts; anything else is logged with its
/// cause and reported as an internal error.
fn store_error(operation: &str, err: StoreError) -> CaseError {
    match err {
        StoreError::UniqueViolation(constraint) => {
            tracing::debug!(operation, %constraint, "unique constraint violated");
            CaseError::conflict(format!("Duplicate value violates {constraint}"))
        }
        other => {
            tracing::error!(operation, error = ?other, "storage failure");
            CaseError::Internal
        }
    }
}

/// [`store_error`] for writes to a row read just before: a row deleted in
/// between is reported as `not_found`
fn write_error(operation: &str, err: StoreError, not_found: CaseError) -> CaseError {
    match err {
        StoreError::NotFound => {
            tracing::debug!(operation, "row deleted before write");
            not_found
        }
        other => store_error(operation, other),
    }
}
