//! Contract models for the case service
//!
//! These models are transport-agnostic and used by the domain, the storage
//! layer and the REST layer alike. NO serde derives - wire shapes live in
//! `api::rest::dto`.

use chrono::{DateTime, NaiveDate, Utc};
use std::fmt;
use std::str::FromStr;

/// Lifecycle status of a case. Any status may move to any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CaseStatus {
    Open,
    InProgress,
    OnHold,
    Closed,
    Archived,
}

impl CaseStatus {
    pub const ALL: [CaseStatus; 5] = [
        Self::Open,
        Self::InProgress,
        Self::OnHold,
        Self::Closed,
        Self::Archived,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Open => "OPEN",
            Self::InProgress => "IN_PROGRESS",
            Self::OnHold => "ON_HOLD",
            Self::Closed => "CLOSED",
            Self::Archived => "ARCHIVED",
        }
    }
}

impl fmt::Display for CaseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown enum literal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

impl fmt::Display for UnknownVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown {} '{}'", self.kind, self.value)
    }
}

impl std::error::Error for UnknownVariant {}

impl FromStr for CaseStatus {
    type Err = UnknownVariant;

    /// Accepts the canonical names plus the legacy `NEW`/`ACTIVE`/`PENDING`
    /// names, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "OPEN" | "NEW" => Ok(Self::Open),
            "IN_PROGRESS" | "ACTIVE" => Ok(Self::InProgress),
            "ON_HOLD" | "PENDING" => Ok(Self::OnHold),
            "CLOSED" => Ok(Self::Closed),
            "ARCHIVED" => Ok(Self::Archived),
            _ => Err(UnknownVariant {
                kind: "case status",
                value: s.to_string(),
            }),
        }
    }
}

/// A legal matter; aggregate root for hearings and documents
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Case {
    pub id: i64,
    /// Generated, globally unique, immutable
    pub case_number: String,
    pub title: String,
    pub description: Option<String>,
    pub status: CaseStatus,
    pub open_date: NaiveDate,
    /// Set on the first transition to CLOSED, never overwritten afterwards
    pub close_date: Option<NaiveDate>,
    /// Linked clients, ascending and without duplicates
    pub client_ids: Vec<i64>,
    pub assigned_user_id: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for case creation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewCase {
    pub title: String,
    pub description: Option<String>,
    pub status: Option<CaseStatus>,
    pub open_date: Option<NaiveDate>,
    pub client_ids: Vec<i64>,
    pub assigned_user_id: Option<i64>,
}

/// Partial update; `None` leaves the stored value untouched
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CasePatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<CaseStatus>,
    pub open_date: Option<NaiveDate>,
    /// Transition date used when this patch closes the case
    pub close_date: Option<NaiveDate>,
    /// Replaces the full set of linked clients
    pub client_ids: Option<Vec<i64>>,
    pub assigned_user_id: Option<i64>,
}

/// Scheduled court event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HearingStatus {
    Scheduled,
    InProgress,
    Completed,
    Postponed,
    Cancelled,
}

impl HearingStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Scheduled => "SCHEDULED",
            Self::InProgress => "IN_PROGRESS",
            Self::Completed => "COMPLETED",
            Self::Postponed => "POSTPONED",
            Self::Cancelled => "CANCELLED",
        }
    }
}

impl fmt::Display for HearingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HearingStatus {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "SCHEDULED" => Ok(Self::Scheduled),
            "IN_PROGRESS" => Ok(Self::InProgress),
            "COMPLETED" => Ok(Self::Completed),
            "POSTPONED" => Ok(Self::Postponed),
            "CANCELLED" => Ok(Self::Cancelled),
            _ => Err(UnknownVariant {
                kind: "hearing status",
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hearing {
    pub id: i64,
    pub case_id: i64,
    pub title: Option<String>,
    pub judge_name: Option<String>,
    pub scheduled_date: DateTime<Utc>,
    /// Set once, on the first transition to IN_PROGRESS
    pub actual_start_time: Option<DateTime<Utc>>,
    /// Set once, on the first transition to COMPLETED
    pub actual_end_time: Option<DateTime<Utc>>,
    pub location: String,
    pub status: HearingStatus,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewHearing {
    pub case_id: Option<i64>,
    pub title: Option<String>,
    pub judge_name: Option<String>,
    pub scheduled_date: Option<DateTime<Utc>>,
    pub location: String,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HearingPatch {
    pub title: Option<String>,
    pub judge_name: Option<String>,
    pub scheduled_date: Option<DateTime<Utc>>,
    pub location: Option<String>,
    pub status: Option<HearingStatus>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentType {
    Contract,
    Evidence,
    Petition,
    CourtOrder,
    Other,
}

impl DocumentType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Contract => "CONTRACT",
            Self::Evidence => "EVIDENCE",
            Self::Petition => "PETITION",
            Self::CourtOrder => "COURT_ORDER",
            Self::Other => "OTHER",
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DocumentType {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "CONTRACT" => Ok(Self::Contract),
            "EVIDENCE" => Ok(Self::Evidence),
            "PETITION" => Ok(Self::Petition),
            "COURT_ORDER" => Ok(Self::CourtOrder),
            "OTHER" => Ok(Self::Other),
            _ => Err(UnknownVariant {
                kind: "document type",
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub id: i64,
    pub case_id: i64,
    pub title: String,
    pub document_type: DocumentType,
    pub content: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewDocument {
    pub case_id: Option<i64>,
    pub title: String,
    /// Defaults to `OTHER`
    pub document_type: Option<DocumentType>,
    pub content: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentPatch {
    pub title: Option<String>,
    pub document_type: Option<DocumentType>,
    pub content: Option<String>,
}
