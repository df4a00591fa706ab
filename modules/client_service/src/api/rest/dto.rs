//! REST DTOs with serde derives for HTTP API

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Client response DTO
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClientDto {
    pub id: i64,
    pub name: String,
    pub surname: String,
    #[schema(example = "jane.doe@example.com")]
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub tax_id: Option<String>,
    pub identity_number: Option<String>,
    pub notes: Option<String>,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Client creation request; name and surname are required
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateClientRequest {
    pub name: Option<String>,
    pub surname: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub tax_id: Option<String>,
    pub identity_number: Option<String>,
    pub notes: Option<String>,
    /// Defaults to true
    pub active: Option<bool>,
}

/// Partial client update; absent or blank fields are left unchanged
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateClientRequest {
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

/// A case linked to a client, as reported by the case service
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CaseSummaryDto {
    pub id: i64,
    pub case_number: String,
    pub title: String,
    pub status: String,
    pub open_date: Option<NaiveDate>,
    pub close_date: Option<NaiveDate>,
    pub client_ids: Vec<i64>,
    pub assigned_user_id: Option<i64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchQuery {
    pub term: Option<String>,
}
