// src/services/twse.rs

use super::error::{FetchError, FetchResult};

/// Total market value from the TWSE daily summary
/// (`/exchangeReport/MI_INDEX?response=json&date=<yyyymmdd>&type=ALL`).
///
/// Parsing that feed is not wired up yet. Callers get `NotImplemented`
/// rather than a placeholder number dressed up as a real observation.
pub async fn market_cap_snapshot() -> FetchResult<f64> {
    Err(FetchError::NotImplemented("TWSE market value feed"))
}
