// src/config.rs
use std::env;
use std::time::Duration;

/// Runtime configuration for the external data sources.
///
/// Read once at startup and handed to the adapter constructors. Base URLs
/// are part of the config so tests can point every client at a local mock
/// server instead of the live feeds.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Credential for the FRED economic-series API (`FRED_API_KEY`). The
    /// unemployment adapter degrades to its fallback when this is missing.
    pub fred_api_key: Option<String>,
    /// Yahoo chart API base, e.g. `https://query1.finance.yahoo.com`.
    pub quote_base_url: String,
    /// FRED API base, e.g. `https://api.stlouisfed.org`.
    pub fred_base_url: String,
    /// Static quote page carrying the JP 10Y yield table.
    pub jgb_url: String,
    /// Per-request timeout applied to every outbound HTTP call.
    pub http_timeout: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            fred_api_key: None,
            quote_base_url: "https://query1.finance.yahoo.com".to_string(),
            fred_base_url: "https://api.stlouisfed.org".to_string(),
            jgb_url: "https://www.cnyes.com/futures/html5chart/JP10YY.html".to_string(),
            http_timeout: Duration::from_secs(5),
        }
    }
}

impl AppConfig {
    /// Build the configuration from process environment variables,
    /// keeping the built-in defaults for anything unset.
    pub fn from_env() -> Self {
        let mut cfg = Self::default();
        cfg.fred_api_key = env::var("FRED_API_KEY").ok().filter(|k| !k.is_empty());
        if let Ok(url) = env::var("QUOTE_BASE_URL") {
            cfg.quote_base_url = url;
        }
        if let Ok(url) = env::var("FRED_BASE_URL") {
            cfg.fred_base_url = url;
        }
        if let Ok(url) = env::var("JGB_QUOTE_URL") {
            cfg.jgb_url = url;
        }
        cfg
    }
}
