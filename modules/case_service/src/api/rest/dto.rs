//! REST DTOs with serde derives for HTTP API
//!
//! Request fields are all optional so that missing values surface as field
//! validation errors rather than body-parse failures. Enum values travel as
//! strings and are parsed in the mapper.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ===== Case DTOs =====

/// Case response DTO
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CaseDto {
    pub id: i64,

    #[schema(example = "CASE-2026-1A2B3C4D")]
    pub case_number: String,

    pub title: String,

    pub description: Option<String>,

    /// OPEN, IN_PROGRESS, ON_HOLD, CLOSED or ARCHIVED
    #[schema(example = "OPEN")]
    pub status: String,

    pub open_date: NaiveDate,

    pub close_date: Option<NaiveDate>,

    pub client_ids: Vec<i64>,

    pub assigned_user_id: Option<i64>,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

/// Case creation request
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCaseRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    /// Defaults to OPEN; legacy NEW / ACTIVE / PENDING are accepted
    pub status: Option<String>,
    /// Defaults to today
    pub open_date: Option<NaiveDate>,
    #[serde(default)]
    pub client_ids: Vec<i64>,
    pub assigned_user_id: Option<i64>,
}

/// Partial case update; absent fields are left unchanged
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCaseRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
    pub open_date: Option<NaiveDate>,
    /// Only honoured together with status CLOSED
    pub close_date: Option<NaiveDate>,
    /// Replaces the linked clients when present
    pub client_ids: Option<Vec<i64>>,
    pub assigned_user_id: Option<i64>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCaseStatusRequest {
    pub status: Option<String>,
    pub close_date: Option<NaiveDate>,
}

// ===== Hearing DTOs =====

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HearingDto {
    pub id: i64,
    pub case_id: i64,
    pub title: Option<String>,
    pub judge_name: Option<String>,
    pub scheduled_date: DateTime<Utc>,
    pub actual_start_time: Option<DateTime<Utc>>,
    pub actual_end_time: Option<DateTime<Utc>>,
    pub location: String,
    /// SCHEDULED, IN_PROGRESS, COMPLETED, POSTPONED or CANCELLED
    #[schema(example = "SCHEDULED")]
    pub status: String,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateHearingRequest {
    pub case_id: Option<i64>,
    pub title: Option<String>,
    pub judge_name: Option<String>,
    pub scheduled_date: Option<DateTime<Utc>>,
    pub location: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateHearingRequest {
    pub title: Option<String>,
    pub judge_name: Option<String>,
    pub scheduled_date: Option<DateTime<Utc>>,
    pub location: Option<String>,
    pub status: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateHearingStatusRequest {
    pub status: Option<String>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RescheduleHearingRequest {
    pub scheduled_date: Option<DateTime<Utc>>,
}

// ===== Document DTOs =====

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DocumentDto {
    pub id: i64,
    pub case_id: i64,
    pub title: String,
    /// CONTRACT, EVIDENCE, PETITION, COURT_ORDER or OTHER
    #[schema(example = "EVIDENCE")]
    pub document_type: String,
    pub content: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateDocumentRequest {
    pub case_id: Option<i64>,
    pub title: Option<String>,
    /// Defaults to OTHER
    pub document_type: Option<String>,
    pub content: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDocumentRequest {
    pub title: Option<String>,
    pub document_type: Option<String>,
    pub content: Option<String>,
}

// ===== Query parameters =====

#[derive(Debug, Clone, Deserialize)]
pub struct SearchQuery {
    pub term: Option<String>,
}
