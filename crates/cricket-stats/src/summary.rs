//! Accumulator and result types for match statistics.

use std::collections::BTreeMap;

use cricket_core::MatchInfo;
use serde::Serialize;

/// Batting accumulator for one batsman.
///
/// Counters are filled during the aggregation pass; `strike_rate` is
/// recomputed from the counters in a finalization step and is never
/// maintained incrementally.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BattingSummary {
    /// Runs scored off the bat.
    pub runs: u32,
    /// Balls faced.
    pub balls: u32,
    /// Balls on which exactly 4 runs were scored off the bat.
    #[serde(rename = "4s")]
    pub fours: u32,
    /// Balls on which exactly 6 runs were scored off the bat.
    #[serde(rename = "6s")]
    pub sixes: u32,
    /// Runs per 100 balls faced, rounded to 2 decimal places.
    pub strike_rate: f64,
}

impl BattingSummary {
    /// Strike rate derived from the raw counters: `runs / balls * 100`,
    /// rounded to 2 decimal places, 0 when no balls were faced.
    pub fn computed_strike_rate(&self) -> f64 {
        if self.balls == 0 {
            0.0
        } else {
            round2(f64::from(self.runs) / f64::from(self.balls) * 100.0)
        }
    }
}

/// Bowling accumulator for one bowler.
///
/// As with [`BattingSummary`], `overs` and `economy` are derived from the
/// counters during finalization.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BowlingSummary {
    /// Runs conceded, extras included.
    pub runs: u32,
    /// Wickets taken.
    pub wickets: u32,
    /// Balls bowled.
    pub balls: u32,
    /// Overs bowled (`balls / 6`), rounded to 1 decimal place.
    pub overs: f64,
    /// Runs conceded per over, rounded to 2 decimal places.
    pub economy: f64,
}

impl BowlingSummary {
    /// Overs bowled derived from the ball count, rounded to 1 decimal place.
    pub fn computed_overs(&self) -> f64 {
        round1(f64::from(self.balls) / 6.0)
    }

    /// Economy rate derived from the raw counters: runs per (unrounded)
    /// over, rounded to 2 decimal places, 0 when no balls were bowled.
    pub fn computed_economy(&self) -> f64 {
        if self.balls == 0 {
            0.0
        } else {
            let overs = f64::from(self.balls) / 6.0;
            round2(f64::from(self.runs) / overs)
        }
    }
}

/// Complete statistics for one match.
///
/// Built fresh per [`crate::aggregate`] call. Player maps are keyed by
/// identifier and iterate in sorted order, so serialized output is
/// deterministic.
#[derive(Debug, Clone, Default, Serialize)]
pub struct MatchStatistics {
    /// Per-batsman summaries.
    pub batting: BTreeMap<String, BattingSummary>,
    /// Per-bowler summaries.
    pub bowling: BTreeMap<String, BowlingSummary>,
    /// Runs scored per team, accumulated across all of that team's innings.
    pub team_scores: BTreeMap<String, u32>,
    /// The match metadata block, echoed from the input record.
    pub info: MatchInfo,
}

pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
