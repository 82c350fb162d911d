// src/services/quotes.rs
use log::debug;
use reqwest::Client;
use serde::Deserialize;

use crate::config::AppConfig;

use super::error::{FetchError, FetchResult};

#[derive(Debug, Deserialize)]
struct ChartResponse {
    chart: Chart,
}

#[derive(Debug, Deserialize)]
struct Chart {
    result: Option<Vec<ChartResult>>,
    error: Option<ChartError>,
}

#[derive(Debug, Deserialize)]
struct ChartError {
    code: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct ChartResult {
    indicators: Indicators,
}

#[derive(Debug, Deserialize)]
struct Indicators {
    quote: Vec<Quote>,
}

#[derive(Debug, Deserialize)]
struct Quote {
    close: Option<Vec<Option<f64>>>,
}

/// Index tickers carry a caret, which is not a legal URL path byte.
fn encode_ticker(ticker: &str) -> String {
    ticker.replace('^', "%5E")
}

/// Quote adapter over the Yahoo v8 chart endpoint.
pub struct QuoteClient {
    client: Client,
    base_url: String,
}

impl QuoteClient {
    pub fn new(cfg: &AppConfig) -> FetchResult<Self> {
        let client = Client::builder()
            .timeout(cfg.http_timeout)
            .user_agent("Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36")
            .build()?;
        Ok(Self {
            client,
            base_url: cfg.quote_base_url.clone(),
        })
    }

    /// Most recent daily close for a ticker.
    pub async fn latest_close(&self, ticker: &str) -> FetchResult<f64> {
        let closes = self.daily_closes(ticker, "1d").await?;
        closes.last().copied().ok_or(FetchError::NoData)
    }

    /// Daily closes over a trailing range ("1d", "6mo", ...), oldest
    /// first. Null entries (untraded sessions) are dropped.
    pub async fn daily_closes(&self, ticker: &str, range: &str) -> FetchResult<Vec<f64>> {
        let url = format!(
            "{}/v8/finance/chart/{}?range={}&interval=1d&includePrePost=false",
            self.base_url,
            encode_ticker(ticker),
            range
        );
        debug!("Fetching quote history: {}", url);

        let resp = self.client.get(&url).send().await?;
        if !resp.status().is_success() {
            return Err(FetchError::Status(resp.status()));
        }

        let data: ChartResponse = resp.json().await?;
        if let Some(err) = data.chart.error {
            return Err(FetchError::Upstream(format!(
                "{}: {}",
                err.code, err.description
            )));
        }

        let result = data
            .chart
            .result
            .and_then(|r| r.into_iter().next())
            .ok_or(FetchError::NoData)?;
        let quote = result
            .indicators
            .quote
            .into_iter()
            .next()
            .ok_or(FetchError::NoData)?;

        let closes: Vec<f64> = quote
            .close
            .unwrap_or_default()
            .into_iter()
            .flatten()
            .collect();
        if closes.is_empty() {
            return Err(FetchError::NoData);
        }
        Ok(closes)
    }
}

/// US 10Y treasury yield. Yahoo's ^TNX quotes the yield itself.
pub async fn us_10y_yield(quotes: &QuoteClient) -> FetchResult<f64> {
    quotes.latest_close("^TNX").await
}

/// Commodity bloc proxy. A free CRB composite feed is hard to come by, so
/// front-month WTI stands in for the broad index.
pub async fn commodity_index(quotes: &QuoteClient) -> FetchResult<f64> {
    quotes.latest_close("CL=F").await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caret_tickers_are_path_encoded() {
        assert_eq!(encode_ticker("^TNX"), "%5ETNX");
        assert_eq!(encode_ticker("GC=F"), "GC=F");
    }
}
