// src/models.rs
use serde::{Serialize, Deserialize};
use chrono::{DateTime, Utc};

/// Qualitative state of a single indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    Safe,
    Warning,
    Danger,
}

/// Position advice derived from the composite score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Advice {
    Safe,
    Caution,
    Reduce,
    Flee,
}

/// US/JP 10-year yield spread. `spread` is `us - jp`; anything under 2.0
/// points is flagged Danger (exactly 2.0 is Safe).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpreadRecord {
    pub us: f64,
    pub jp: f64,
    pub spread: f64,
    pub status: Status,
}

/// One scored indicator row. `value` is pre-formatted for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreItem {
    pub item: String,
    pub value: String,
    pub score: u32,
    pub status: Status,
}

/// Drawdown state of one metals future over the trailing window.
/// `drop` is the percent decline from `high` to `current`; 50% or more
/// is Danger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetalStatus {
    pub name: String,
    pub current: f64,
    pub high: f64,
    pub drop: f64,
    pub status: Status,
}

/// The full dashboard payload. Field names are the wire contract the
/// frontend binds to by name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dashboard {
    pub us_jp_spread: SpreadRecord,
    pub mark17: Vec<ScoreItem>,
    pub total_score: u32,
    pub advice: Advice,
    pub metals: Vec<MetalStatus>,
    pub metals_crash: bool,
    /// Sources whose fetch failed this cycle. Their values in the payload
    /// are the documented fallbacks, not real observations.
    pub unavailable_sources: Vec<String>,
    /// Stamped by the request handler, not the aggregator.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<DateTime<Utc>>,
}
