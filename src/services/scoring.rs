// src/services/scoring.rs
use crate::models::{Advice, ScoreItem, SpreadRecord, Status};

/// Spread under this many points is a Danger signal.
const SPREAD_DANGER_BELOW: f64 = 2.0;

pub(crate) fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// Build the US/JP spread record. Display values are rounded to two
/// decimals; the status is judged on the unrounded spread.
pub fn spread_record(us: f64, jp: f64) -> SpreadRecord {
    let spread = us - jp;
    let status = if spread < SPREAD_DANGER_BELOW {
        Status::Danger
    } else {
        Status::Safe
    };
    SpreadRecord {
        us: round2(us),
        jp: round2(jp),
        spread: round2(spread),
        status,
    }
}

/// Score the unemployment print: above 4.5 is an outright danger signal
/// (+3), above 4.0 a warning (+1), at or below 4.0 neutral.
pub fn score_unemployment(unrate: f64) -> ScoreItem {
    let (score, status) = if unrate > 4.5 {
        (3, Status::Danger)
    } else if unrate > 4.0 {
        (1, Status::Warning)
    } else {
        (0, Status::Safe)
    };
    ScoreItem {
        item: "Unemployment".to_string(),
        value: format!("{unrate}%"),
        score,
        status,
    }
}

/// Map the composite score to an advice band, highest band first.
pub fn advice_for(total_score: u32) -> Advice {
    if total_score >= 15 {
        Advice::Flee
    } else if total_score >= 12 {
        Advice::Reduce
    } else if total_score >= 6 {
        Advice::Caution
    } else {
        Advice::Safe
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spread_is_us_minus_jp() {
        let rec = spread_record(4.5, 1.0);
        assert_eq!(rec.us, 4.5);
        assert_eq!(rec.jp, 1.0);
        assert_eq!(rec.spread, 3.5);
        assert_eq!(rec.status, Status::Safe);
    }

    #[test]
    fn spread_exactly_two_is_safe() {
        assert_eq!(spread_record(3.0, 1.0).status, Status::Safe);
        assert_eq!(spread_record(2.99, 1.0).status, Status::Danger);
    }

    #[test]
    fn negative_spread_is_not_clamped() {
        let rec = spread_record(1.0, 4.0);
        assert_eq!(rec.spread, -3.0);
        assert_eq!(rec.status, Status::Danger);
    }

    #[test]
    fn unemployment_boundaries() {
        let item = score_unemployment(4.0);
        assert_eq!((item.score, item.status), (0, Status::Safe));

        let item = score_unemployment(4.01);
        assert_eq!((item.score, item.status), (1, Status::Warning));

        let item = score_unemployment(4.5);
        assert_eq!((item.score, item.status), (1, Status::Warning));

        let item = score_unemployment(4.51);
        assert_eq!((item.score, item.status), (3, Status::Danger));
    }

    #[test]
    fn unemployment_item_is_display_formatted() {
        let item = score_unemployment(4.3);
        assert_eq!(item.item, "Unemployment");
        assert_eq!(item.value, "4.3%");
    }

    #[test]
    fn advice_bands_are_evaluated_highest_first() {
        assert_eq!(advice_for(15), Advice::Flee);
        assert_eq!(advice_for(12), Advice::Reduce);
        assert_eq!(advice_for(6), Advice::Caution);
        assert_eq!(advice_for(5), Advice::Safe);
        assert_eq!(advice_for(0), Advice::Safe);
        assert_eq!(advice_for(20), Advice::Flee);
    }

    #[test]
    fn round2_keeps_two_decimals() {
        assert_eq!(round2(3.14159), 3.14);
        assert_eq!(round2(2.678), 2.68);
        assert_eq!(round2(-0.125), -0.13);
    }
}
