use futures::future::join3;
use reqwest::Client;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::locations::LocationDirectory;
use crate::observation::GroundwaterResponse;
use crate::query::AnalysisQuery;
use crate::station::LiveStation;
use crate::summary::{GroundwaterSummary, TrendResponse};

/// Default base of the groundwater API gateway.
pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000/api";

pub const SUMMARY_ENDPOINT: &str = "groundwater-summary/";
pub const TREND_ENDPOINT: &str = "water-level-trend/";
pub const LEVELS_ENDPOINT: &str = "groundwater-level/";
pub const ALL_STATIONS_ENDPOINT: &str = "all-stations-live/";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("API request failed with status {0}")]
    Status(u16),
    #[error("{0}")]
    Http(#[from] reqwest::Error),
}

/// HTTP client for the groundwater API gateway.
///
/// Works on native targets and wasm32; keep anything tokio-flavoured out
/// of here.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl Default for ApiClient {
    fn default() -> Self {
        ApiClient::new(DEFAULT_API_BASE)
    }
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        ApiClient {
            client: Client::new(),
            base_url,
        }
    }

    fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url, endpoint)
    }

    async fn post_analysis<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &AnalysisQuery,
    ) -> Result<T, ApiError> {
        let response = self
            .client
            .post(self.endpoint_url(endpoint))
            .json(query)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(ApiError::Status(response.status().as_u16()));
        }
        Ok(response.json::<T>().await?)
    }

    pub async fn fetch_summary(&self, query: &AnalysisQuery) -> Result<GroundwaterSummary, ApiError> {
        self.post_analysis(SUMMARY_ENDPOINT, query).await
    }

    pub async fn fetch_trend(&self, query: &AnalysisQuery) -> Result<TrendResponse, ApiError> {
        self.post_analysis(TREND_ENDPOINT, query).await
    }

    pub async fn fetch_levels(&self, query: &AnalysisQuery) -> Result<GroundwaterResponse, ApiError> {
        self.post_analysis(LEVELS_ENDPOINT, query).await
    }

    /// Fire the three analysis requests concurrently and wait for all of
    /// them before deciding the outcome.
    pub async fn fetch_analysis(&self, query: &AnalysisQuery) -> Result<AnalysisBundle, ApiError> {
        let (summary, trend, levels) = join3(
            self.fetch_summary(query),
            self.fetch_trend(query),
            self.fetch_levels(query),
        )
        .await;
        combine_analysis(summary, trend, levels)
    }

    /// Fetch the state-and-district directory. Served off-API from a
    /// static document, but kept here so callers need one client only.
    pub async fn fetch_locations(&self) -> Result<LocationDirectory, ApiError> {
        LocationDirectory::fetch(&self.client).await
    }

    /// Current snapshot of every known station.
    pub async fn fetch_all_stations(&self) -> Result<Vec<LiveStation>, ApiError> {
        let response = self
            .client
            .get(self.endpoint_url(ALL_STATIONS_ENDPOINT))
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(ApiError::Status(response.status().as_u16()));
        }
        Ok(response.json::<Vec<LiveStation>>().await?)
    }
}

/// The three analysis responses, produced and published as one unit.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct AnalysisBundle {
    pub summary: GroundwaterSummary,
    pub trend: TrendResponse,
    pub levels: GroundwaterResponse,
}

fn status_code<T>(result: &Result<T, ApiError>) -> Option<u16> {
    match result {
        Err(ApiError::Status(code)) => Some(*code),
        _ => None,
    }
}

/// Resolve the joined results. Bad statuses outrank transport and decode
/// failures, and the summary, trend, levels endpoint order breaks ties.
fn combine_analysis(
    summary: Result<GroundwaterSummary, ApiError>,
    trend: Result<TrendResponse, ApiError>,
    levels: Result<GroundwaterResponse, ApiError>,
) -> Result<AnalysisBundle, ApiError> {
    if let Some(code) = status_code(&summary)
        .or_else(|| status_code(&trend))
        .or_else(|| status_code(&levels))
    {
        return Err(ApiError::Status(code));
    }
    Ok(AnalysisBundle {
        summary: summary?,
        trend: trend?,
        levels: levels?,
    })
}
