// src/services/fred.rs
use log::debug;
use reqwest::Client;
use serde::Deserialize;

use crate::config::AppConfig;

use super::error::{FetchError, FetchResult};

#[derive(Debug, Deserialize)]
struct ObservationsResponse {
    observations: Vec<Observation>,
}

#[derive(Debug, Deserialize)]
struct Observation {
    value: String,
}

/// Adapter for the FRED economic-series API.
pub struct FredClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl FredClient {
    pub fn new(cfg: &AppConfig) -> FetchResult<Self> {
        let client = Client::builder().timeout(cfg.http_timeout).build()?;
        Ok(Self {
            client,
            base_url: cfg.fred_base_url.clone(),
            api_key: cfg.fred_api_key.clone(),
        })
    }

    /// Latest reported value of a series. FRED publishes gaps as a "."
    /// observation; those are skipped, not read as zero.
    pub async fn series_latest(&self, series_id: &str) -> FetchResult<f64> {
        let mut values = self.series_history(series_id, 1).await?;
        values.pop().ok_or(FetchError::NoData)
    }

    /// Last `limit` valid values of a series, most recent last.
    /// Observations arrive date-ascending, the API's default order.
    pub async fn series_history(&self, series_id: &str, limit: usize) -> FetchResult<Vec<f64>> {
        let key = self
            .api_key
            .as_deref()
            .ok_or(FetchError::MissingApiKey("FRED"))?;
        let url = format!(
            "{}/fred/series/observations?series_id={}&api_key={}&file_type=json",
            self.base_url, series_id, key
        );
        debug!("Fetching FRED series {}", series_id);

        let resp = self.client.get(&url).send().await?;
        if !resp.status().is_success() {
            return Err(FetchError::Status(resp.status()));
        }

        let data: ObservationsResponse = resp.json().await?;
        let mut values: Vec<f64> = data
            .observations
            .iter()
            .filter_map(|o| o.value.trim().parse::<f64>().ok())
            .collect();
        if values.is_empty() {
            return Err(FetchError::NoData);
        }

        let keep_from = values.len().saturating_sub(limit);
        Ok(values.split_off(keep_from))
    }
}
