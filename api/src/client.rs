//! HTTP client for the survey submission and dashboard endpoints.

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::{
    config::ApiConfig,
    error::ApiError,
    model::{error_detail, DashboardPoint, DateRange, Feedback, SurveyRecord},
};

/// The remote collaborator the UI controllers talk to. `ApiClient` is the
/// production implementation; tests substitute stubs.
#[allow(async_fn_in_trait)]
pub trait SurveyBackend {
    async fn submit_survey(&self, record: &SurveyRecord) -> Result<Feedback, ApiError>;

    async fn dashboard_data(&self, range: &DateRange) -> Result<Vec<DashboardPoint>, ApiError>;
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    config: ApiConfig,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self::with_http(config, reqwest::Client::new())
    }

    pub fn with_http(config: ApiConfig, http: reqwest::Client) -> Self {
        Self { config, http }
    }
}

impl PartialEq for ApiClient {
    fn eq(&self, other: &Self) -> bool {
        self.config == other.config
    }
}

impl SurveyBackend for ApiClient {
    async fn submit_survey(&self, record: &SurveyRecord) -> Result<Feedback, ApiError> {
        let url = self.config.submit_url();
        debug!(%url, "posting survey");
        let resp = self.http.post(&url).json(record).send().await?;
        read_json(resp).await
    }

    async fn dashboard_data(&self, range: &DateRange) -> Result<Vec<DashboardPoint>, ApiError> {
        let url = self.config.dashboard_url();
        let query = range.query_pairs()?;
        debug!(%url, start = %query[0].1, end = %query[1].1, "fetching dashboard data");
        let resp = self.http.get(&url).query(&query).send().await?;
        read_json(resp).await
    }
}

async fn read_json<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, ApiError> {
    let status = resp.status();
    let body = resp.text().await?;
    if !status.is_success() {
        return Err(ApiError::Server {
            status: status.as_u16(),
            detail: error_detail(&body),
        });
    }
    Ok(serde_json::from_str(&body)?)
}
