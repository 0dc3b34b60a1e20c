//! Native HTTP client for the Weather Explorer API (`api` feature).

use crate::error::ApiError;
use crate::explorer::PendingQuery;
use crate::models::{
    decode_response, ChartType, ConcurrentResponse, Envelope, LocationsResponse, StatsResponse,
    VisualizationResponse, WeatherPage,
};
use crate::query::{locations_url, stats_url, visualization_url};

/// Default API base for a backend running locally.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000/api";

/// Thin `reqwest` wrapper; one GET per call, no retries.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base: String,
}

impl ApiClient {
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base: base.into(),
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub async fn locations(&self) -> Result<Vec<String>, ApiError> {
        let response: LocationsResponse = self.get(&locations_url(&self.base)).await?;
        Ok(response.locations)
    }

    /// Fetch a standard page issued by [`crate::ExplorerState`].
    pub async fn fetch_page(&self, pending: &PendingQuery) -> Result<WeatherPage, ApiError> {
        self.get(&pending.url(&self.base)).await
    }

    pub async fn fetch_concurrent(
        &self,
        pending: &PendingQuery,
    ) -> Result<ConcurrentResponse, ApiError> {
        self.get(&pending.url(&self.base)).await
    }

    pub async fn visualize(
        &self,
        chart: ChartType,
        location: Option<&str>,
    ) -> Result<VisualizationResponse, ApiError> {
        self.get(&visualization_url(&self.base, chart, location))
            .await
    }

    pub async fn stats(&self, location: Option<&str>) -> Result<StatsResponse, ApiError> {
        self.get(&stats_url(&self.base, location)).await
    }

    async fn get<T: Envelope>(&self, url: &str) -> Result<T, ApiError> {
        log::info!("GET {}", url);
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        decode_response(status, &body).inspect_err(|e| log::error!("{} failed: {}", url, e))
    }
}
