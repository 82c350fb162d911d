// src/services/metals.rs
use log::{error, warn};

use crate::models::{MetalStatus, Status};

use super::quotes::QuoteClient;
use super::scoring::round2;

/// Futures tracked by the drawdown scan, in display order. Nickel and tin
/// lack a dependable free feed, so platinum rounds out the set.
pub const METALS: [(&str, &str); 4] = [
    ("Gold", "GC=F"),
    ("Silver", "SI=F"),
    ("Copper", "HG=F"),
    ("Platinum", "PL=F"),
];

const HISTORY_RANGE: &str = "6mo";
const DRAWDOWN_DANGER_PCT: f64 = 50.0;

/// Result of one full scan over the tracked metals.
pub struct MetalsScan {
    /// One row per instrument with a usable history, in `METALS` order.
    pub metals: Vec<MetalStatus>,
    /// True when any instrument sits at or past the danger drawdown.
    pub has_crash: bool,
    /// Instruments dropped from this scan, named for the outage report.
    pub unavailable: Vec<String>,
}

/// Classify one instrument from its trailing closes, oldest first.
/// Returns `None` when the history cannot support a drawdown figure.
pub fn classify(name: &str, closes: &[f64]) -> Option<MetalStatus> {
    let current = *closes.last()?;
    let high = closes.iter().copied().fold(f64::MIN, f64::max);
    if high <= 0.0 {
        return None;
    }
    let drop = (high - current) / high * 100.0;
    let status = if drop >= DRAWDOWN_DANGER_PCT {
        Status::Danger
    } else {
        Status::Safe
    };
    Some(MetalStatus {
        name: name.to_string(),
        current: round2(current),
        high: round2(high),
        drop: round2(drop),
        status,
    })
}

/// Scan every tracked metal over the trailing window. A failing ticker
/// only drops that row; the rest of the scan proceeds.
pub async fn scan(quotes: &QuoteClient) -> MetalsScan {
    let mut metals = Vec::new();
    let mut unavailable = Vec::new();

    for (name, ticker) in METALS {
        match quotes.daily_closes(ticker, HISTORY_RANGE).await {
            Ok(closes) => match classify(name, &closes) {
                Some(metal) => metals.push(metal),
                None => {
                    warn!("History for {} ({}) is unusable, skipping", name, ticker);
                    unavailable.push(format!("metals:{name}"));
                }
            },
            Err(e) => {
                error!("Failed to fetch {} ({}) history: {}", name, ticker, e);
                unavailable.push(format!("metals:{name}"));
            }
        }
    }

    let has_crash = metals.iter().any(|m| m.status == Status::Danger);
    MetalsScan {
        metals,
        has_crash,
        unavailable,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drawdown_at_exactly_half_is_danger() {
        let metal = classify("Gold", &[100.0, 50.0]).unwrap();
        assert_eq!(metal.high, 100.0);
        assert_eq!(metal.current, 50.0);
        assert_eq!(metal.drop, 50.0);
        assert_eq!(metal.status, Status::Danger);
    }

    #[test]
    fn drawdown_just_under_half_is_safe() {
        let metal = classify("Gold", &[100.0, 51.0]).unwrap();
        assert_eq!(metal.drop, 49.0);
        assert_eq!(metal.status, Status::Safe);
    }

    #[test]
    fn high_is_window_max_not_first_close() {
        let metal = classify("Silver", &[20.0, 35.0, 28.0]).unwrap();
        assert_eq!(metal.high, 35.0);
        assert_eq!(metal.current, 28.0);
        assert_eq!(metal.drop, 20.0);
    }

    #[test]
    fn drop_is_rounded_to_two_decimals() {
        let metal = classify("Copper", &[3.0, 2.0]).unwrap();
        assert_eq!(metal.drop, 33.33);
    }

    #[test]
    fn empty_history_yields_nothing() {
        assert!(classify("Gold", &[]).is_none());
    }

    #[test]
    fn non_positive_high_yields_nothing() {
        assert!(classify("Gold", &[0.0, 0.0]).is_none());
    }

    #[test]
    fn tracked_set_keeps_display_order() {
        let names: Vec<&str> = METALS.iter().map(|(name, _)| *name).collect();
        assert_eq!(names, ["Gold", "Silver", "Copper", "Platinum"]);
    }
}
