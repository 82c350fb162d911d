// src/services/error.rs
use thiserror::Error;

/// Why an external fetch produced no value.
///
/// Adapters report failures through this type instead of swallowing them;
/// the aggregator is the one place that converts a failure into the
/// documented fallback value.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("unexpected http status: {0}")]
    Status(reqwest::StatusCode),
    #[error("upstream reported an error: {0}")]
    Upstream(String),
    #[error("malformed response: {0}")]
    Parse(String),
    #[error("no data points in response")]
    NoData,
    #[error("missing API key for {0}")]
    MissingApiKey(&'static str),
    #[error("feed not implemented: {0}")]
    NotImplemented(&'static str),
}

pub type FetchResult<T> = Result<T, FetchError>;
