//! Contract models for the client service
//!
//! Transport-agnostic; wire shapes live in `api::rest::dto`.

use chrono::{DateTime, NaiveDate, Utc};

/// A party represented in one or more cases
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Client {
    pub id: i64,
    pub name: String,
    pub surname: String,
    /// Unique among clients when present
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    /// Unique among clients when present
    pub tax_id: Option<String>,
    /// Unique among clients when present
    pub identity_number: Option<String>,
    pub notes: Option<String>,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for client creation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewClient {
    pub name: String,
    pub surname: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub tax_id: Option<String>,
    pub identity_number: Option<String>,
    pub notes: Option<String>,
    /// Defaults to true
    pub active: Option<bool>,
}

/// Partial update; `None` leaves the stored value untouched
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientPatch {
    pub name: Option<String>,
    pub surname: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub tax_id: Option<String>,
    pub identity_number: Option<String>,
    pub notes: Option<String>,
    pub active: Option<bool>,
}

/// Fields that must be unique across clients when non-empty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UniqueField {
    Email,
    TaxId,
    IdentityNumber,
}

impl UniqueField {
    pub const ALL: [UniqueField; 3] = [Self::Email, Self::TaxId, Self::IdentityNumber];

    /// Wire (camelCase) field name
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::TaxId => "taxId",
            Self::IdentityNumber => "identityNumber",
        }
    }

    pub fn value_of(self, client: &Client) -> Option<&str> {
        match self {
            Self::Email => client.email.as_deref(),
            Self::TaxId => client.tax_id.as_deref(),
            Self::IdentityNumber => client.identity_number.as_deref(),
        }
    }
}

/// A case as seen from the client service, fetched from the case service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseSummary {
    pub id: i64,
    pub case_number: String,
    pub title: String,
    /// Status name as reported by the case service
    pub status: String,
    pub open_date: Option<NaiveDate>,
    pub close_date: Option<NaiveDate>,
    pub client_ids: Vec<i64>,
    pub assigned_user_id: Option<i64>,
}
