//! Outbound ports to other services

use crate::contract::{CaseSummary, ClientError};
use async_trait::async_trait;

/// Read access to the case service.
///
/// `bearer` is the caller's access token, forwarded unchanged.
#[async_trait]
pub trait CaseDirectory: Send + Sync {
    /// Cases linked to a client. Never fails: when the case service cannot
    /// answer, the failure is logged and an empty list is returned. An empty
    /// result therefore does not prove the client has no cases.
    async fn cases_for_client(&self, client_id: i64, bearer: Option<&str>) -> Vec<CaseSummary>;

    /// A single case; `Ok(None)` when the case service reports it missing.
    /// Transport failures surface as [`ClientError::UpstreamUnavailable`].
    async fn get_case(
        &self,
        case_id: i64,
        bearer: Option<&str>,
    ) -> Result<Option<CaseSummary>, ClientError>;
}
