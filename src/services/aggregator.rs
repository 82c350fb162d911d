// src/services/aggregator.rs
use log::{error, info};

use crate::config::AppConfig;
use crate::models::Dashboard;

use super::error::FetchResult;
use super::fred::FredClient;
use super::jgb::JgbClient;
use super::metals;
use super::quotes::{self, QuoteClient};
use super::scoring;

/// FRED series id for the US civilian unemployment rate.
const UNEMPLOYMENT_SERIES: &str = "UNRATE";

/// Owns one client per external source and recomputes the whole dashboard
/// on demand. Holds no state between calls.
pub struct DashboardService {
    quotes: QuoteClient,
    jgb: JgbClient,
    fred: FredClient,
}

impl DashboardService {
    pub fn new(cfg: &AppConfig) -> FetchResult<Self> {
        Ok(Self {
            quotes: QuoteClient::new(cfg)?,
            jgb: JgbClient::new(cfg)?,
            fred: FredClient::new(cfg)?,
        })
    }

    /// Recompute every indicator and assemble the dashboard payload.
    ///
    /// Each source is attempted exactly once, all fetches in flight
    /// concurrently. A failed fetch degrades to its documented fallback
    /// and is named in `unavailable_sources`, so a reader can tell a real
    /// zero from a missing one. Never fails: the payload is always fully
    /// shaped. `last_updated` is left for the caller to stamp.
    pub async fn update_all_data(&self) -> Dashboard {
        let (us, jp, unrate, scan) = tokio::join!(
            quotes::us_10y_yield(&self.quotes),
            self.jgb.latest_yield(),
            self.fred.series_latest(UNEMPLOYMENT_SERIES),
            metals::scan(&self.quotes),
        );

        let mut unavailable = Vec::new();
        let us = fallback(us, "us_10y", &mut unavailable);
        let jp = fallback(jp, "jp_10y", &mut unavailable);
        let unrate = fallback(unrate, "unemployment", &mut unavailable);

        let us_jp_spread = scoring::spread_record(us, jp);

        // Composite score: one rule today; further indicators append here.
        let mark17 = vec![scoring::score_unemployment(unrate)];
        let total_score: u32 = mark17.iter().map(|item| item.score).sum();
        let advice = scoring::advice_for(total_score);

        unavailable.extend(scan.unavailable);

        info!(
            "Dashboard recomputed: spread={} total_score={} advice={:?} metals={} degraded_sources={}",
            us_jp_spread.spread,
            total_score,
            advice,
            scan.metals.len(),
            unavailable.len()
        );

        Dashboard {
            us_jp_spread,
            mark17,
            total_score,
            advice,
            metals: scan.metals,
            metals_crash: scan.has_crash,
            unavailable_sources: unavailable,
            last_updated: None,
        }
    }
}

fn fallback(result: FetchResult<f64>, source: &str, unavailable: &mut Vec<String>) -> f64 {
    match result {
        Ok(v) => v,
        Err(e) => {
            error!("Source {} unavailable, using fallback 0.0: {}", source, e);
            unavailable.push(source.to_string());
            0.0
        }
    }
}
