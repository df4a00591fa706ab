//! Repository traits for data access
//!
//! These traits define the interface for data access operations.
//! Implementations are in infra/storage/repositories.rs

use crate::contract::{Case, CaseStatus, Document, DocumentType, Hearing, HearingStatus};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use svckit::StoreError;

pub type StoreResult<T> = Result<T, StoreError>;

/// Repository for cases and their client links
#[async_trait]
pub trait CaseRepository: Send + Sync {
    /// Insert a case and its client links; `case.id` is ignored, the store assigns one
    async fn insert(&self, case: &Case) -> StoreResult<Case>;

    async fn find_by_id(&self, id: i64) -> StoreResult<Option<Case>>;

    async fn find_by_number(&self, case_number: &str) -> StoreResult<Option<Case>>;

    async fn list_all(&self) -> StoreResult<Vec<Case>>;

    async fn list_by_client(&self, client_id: i64) -> StoreResult<Vec<Case>>;

    async fn list_by_status(&self, status: CaseStatus) -> StoreResult<Vec<Case>>;

    async fn list_by_assigned_user(&self, user_id: i64) -> StoreResult<Vec<Case>>;

    /// Case-insensitive substring match on title OR case number
    async fn search(&self, term: &str) -> StoreResult<Vec<Case>>;

    /// Overwrite a case by id, replacing its client links
    async fn update(&self, case: &Case) -> StoreResult<Case>;

    /// Returns false when the link already existed
    async fn link_client(&self, case_id: i64, client_id: i64) -> StoreResult<bool>;

    /// Returns false when there was no such link
    async fn unlink_client(&self, case_id: i64, client_id: i64) -> StoreResult<bool>;

    /// Delete a case with its hearings, documents and client links as one
    /// atomic unit. Returns false when the case does not exist.
    async fn delete_cascade(&self, id: i64) -> StoreResult<bool>;

    async fn exists(&self, id: i64) -> StoreResult<bool>;
}

/// Repository for hearings
#[async_trait]
pub trait HearingRepository: Send + Sync {
    /// `hearing.id` is ignored, the store assigns one
    async fn insert(&self, hearing: &Hearing) -> StoreResult<Hearing>;

    async fn find_by_id(&self, id: i64) -> StoreResult<Option<Hearing>>;

    async fn list_all(&self) -> StoreResult<Vec<Hearing>>;

    async fn list_by_case(&self, case_id: i64) -> StoreResult<Vec<Hearing>>;

    async fn list_by_status(&self, status: HearingStatus) -> StoreResult<Vec<Hearing>>;

    /// Hearings scheduled in `[from, to]`, earliest first
    async fn list_scheduled_between(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> StoreResult<Vec<Hearing>>;

    async fn update(&self, hearing: &Hearing) -> StoreResult<Hearing>;

    /// Returns false when the hearing does not exist
    async fn delete(&self, id: i64) -> StoreResult<bool>;
}

/// Repository for documents
#[async_trait]
pub trait DocumentRepository: Send + Sync {
    /// `document.id` is ignored, the store assigns one
    async fn insert(&self, document: &Document) -> StoreResult<Document>;

    async fn find_by_id(&self, id: i64) -> StoreResult<Option<Document>>;

    async fn list_all(&self) -> StoreResult<Vec<Document>>;

    async fn list_by_case(&self, case_id: i64) -> StoreResult<Vec<Document>>;

    async fn list_by_type(&self, document_type: DocumentType) -> StoreResult<Vec<Document>>;

    async fn update(&self, document: &Document) -> StoreResult<Document>;

    /// Returns false when the document does not exist
    async fn delete(&self, id: i64) -> StoreResult<bool>;
}
