//! HTTP client for the case service

use crate::contract::{CaseSummary, ClientError};
use crate::domain::CaseDirectory;
use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::StatusCode;
use serde::Deserialize;
use svckit::{ApiResponse, UpstreamConfig};
use tracing::{debug, instrument, warn};
use url::Url;

/// Case as serialized by the case service
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RemoteCase {
    id: i64,
    case_number: String,
    title: String,
    status: String,
    open_date: Option<NaiveDate>,
    close_date: Option<NaiveDate>,
    #[serde(default)]
    client_ids: Vec<i64>,
    assigned_user_id: Option<i64>,
}

impl From<RemoteCase> for CaseSummary {
    fn from(case: RemoteCase) -> Self {
        Self {
            id: case.id,
            case_number: case.case_number,
            title: case.title,
            status: case.status,
            open_date: case.open_date,
            close_date: case.close_date,
            client_ids: case.client_ids,
            assigned_user_id: case.assigned_user_id,
        }
    }
}

#[derive(Debug, thiserror::Error)]
enum FetchError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("unexpected status {0}")]
    Status(StatusCode),
    #[error("response carried no data")]
    Empty,
}

/// [`CaseDirectory`] backed by the case service REST API
pub struct HttpCaseDirectory {
    http: reqwest::Client,
    base: Url,
}

impl HttpCaseDirectory {
    pub fn new(config: &UpstreamConfig) -> anyhow::Result<Self> {
        let base = Url::parse(&config.base_url)?;
        if base.cannot_be_a_base() {
            anyhow::bail!("case service URL cannot be a base: {}", config.base_url);
        }
        Ok(Self {
            http: config.build_client()?,
            base,
        })
    }

    /// `{base}/api/v1/<segments>`, keeping any path the base already has
    fn url(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(["api", "v1"]).extend(segments);
        }
        url
    }

    /// GET `url` and unwrap the envelope. `Ok(None)` on 404.
    async fn fetch<T>(&self, url: Url, bearer: Option<&str>) -> Result<Option<T>, FetchError>
    where
        T: serde::de::DeserializeOwned,
    {
        let mut request = self.http.get(url);
        if let Some(token) = bearer {
            request = request.bearer_auth(token);
        }
        let response = request.send().await?;

        match response.status() {
            status if status.is_success() => {
                let body: ApiResponse<T> = response.json().await?;
                body.data.map(Some).ok_or(FetchError::Empty)
            }
            StatusCode::NOT_FOUND => Ok(None),
            status => Err(FetchError::Status(status)),
        }
    }
}

#[async_trait]
impl CaseDirectory for HttpCaseDirectory {
    #[instrument(skip(self, bearer))]
    async fn cases_for_client(&self, client_id: i64, bearer: Option<&str>) -> Vec<CaseSummary> {
        let url = self.url(&["cases", "client", &client_id.to_string()]);
        match self.fetch::<Vec<RemoteCase>>(url, bearer).await {
            Ok(cases) => {
                let cases: Vec<CaseSummary> = cases
                    .unwrap_or_default()
                    .into_iter()
                    .map(Into::into)
                    .collect();
                debug!(count = cases.len(), "Fetched client cases");
                cases
            }
            Err(e) => {
                warn!(error = %e, "Case service unavailable, returning no cases");
                Vec::new()
            }
        }
    }

    #[instrument(skip(self, bearer))]
    async fn get_case(
        &self,
        case_id: i64,
        bearer: Option<&str>,
    ) -> Result<Option<CaseSummary>, ClientError> {
        let url = self.url(&["cases", &case_id.to_string()]);
        match self.fetch::<RemoteCase>(url, bearer).await {
            Ok(case) => Ok(case.map(Into::into)),
            Err(e) => {
                warn!(error = %e, "Case lookup failed");
                Err(ClientError::case_service_unavailable(e.to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn directory(base_url: &str) -> HttpCaseDirectory {
        HttpCaseDirectory::new(&UpstreamConfig {
            base_url: base_url.to_string(),
            ..UpstreamConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn urls_are_built_under_api_prefix() {
        let dir = directory("http://cases:8080");
        assert_eq!(
            dir.url(&["cases", "client", "7"]).as_str(),
            "http://cases:8080/api/v1/cases/client/7"
        );
    }

    #[test]
    fn base_path_is_preserved() {
        let dir = directory("http://gateway/legal/");
        assert_eq!(
            dir.url(&["cases", "3"]).as_str(),
            "http://gateway/legal/api/v1/cases/3"
        );
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        assert!(HttpCaseDirectory::new(&UpstreamConfig {
            base_url: "not a url".to_string(),
            ..UpstreamConfig::default()
        })
        .is_err());
    }
}
