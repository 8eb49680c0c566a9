//! The single-pass aggregation fold over a match record.

use std::collections::BTreeMap;

use cricket_core::{BallEvent, BallLabel, MatchRecord, Runs};
use thiserror::Error;

use crate::summary::{BattingSummary, BowlingSummary, MatchStatistics};

/// Errors raised when a match record does not have the shape the
/// aggregation pass requires.
///
/// Any of these fails the entire call: a silently undercounted statistic
/// would be worse than an explicit failure the caller can report, so no
/// partial [`MatchStatistics`] is ever returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedRecordError {
    /// The record has no `innings` key at all. An empty innings list is
    /// valid and yields empty statistics.
    #[error("match record has no innings list")]
    MissingInnings,

    /// An innings entry was an empty mapping with no name or body.
    #[error("innings entry {index} is an empty mapping")]
    EmptyInningsEntry { index: usize },

    /// An innings body has no `team`.
    #[error("innings '{innings}' has no team")]
    MissingTeam { innings: String },

    /// An innings body has no `deliveries` list.
    #[error("innings '{innings}' has no deliveries")]
    MissingDeliveries { innings: String },

    /// A delivery was an empty mapping with no ball event.
    #[error("delivery {index} in innings '{innings}' is an empty mapping")]
    EmptyDelivery { innings: String, index: usize },

    /// A ball event is missing a required field.
    #[error("ball {ball} in innings '{innings}' is missing '{field}'")]
    MissingBallField {
        innings: String,
        ball: String,
        field: &'static str,
    },
}

/// Folds every delivery of every innings into a [`MatchStatistics`].
///
/// The pass is strictly sequential: innings in record order, deliveries in
/// bowling order, no reordering and no skipping. Per ball it
///
/// 1. credits `runs.batsman` (plus a ball faced, and a boundary when the
///    runs off the bat equal exactly 4 or 6) to the striker,
/// 2. credits `runs.total`, a ball bowled, and any wicket to the bowler,
/// 3. adds `runs.total` to the batting team's score.
///
/// Accumulators are created lazily on a player's first appearance and keyed
/// by identifier only, so a player bowling in one innings and batting in
/// another accumulates into the same maps. After the pass, derived metrics
/// (strike rate, overs, economy) are recomputed from the raw counters and
/// the `info` block is echoed onto the result.
///
/// Two scoring simplifications are intentional and match the upstream
/// record producers: every wicket is credited to the current bowler
/// regardless of dismissal type, and boundaries are detected by exact
/// equality on the runs off the bat rather than by a dedicated flag.
///
/// # Errors
///
/// Returns [`MalformedRecordError`] when `innings` is absent, an innings
/// lacks `team` or `deliveries`, or a ball event lacks `batsman`, `bowler`,
/// `runs.batsman`, or `runs.total`. The call fails as a whole; no partial
/// statistics are produced.
pub fn aggregate(record: &MatchRecord) -> Result<MatchStatistics, MalformedRecordError> {
    let innings_list = record
        .innings
        .as_ref()
        .ok_or(MalformedRecordError::MissingInnings)?;

    let mut stats = MatchStatistics {
        info: record.info.clone(),
        ..Default::default()
    };

    for (index, entry) in innings_list.iter().enumerate() {
        let (name, innings) = entry
            .body()
            .ok_or(MalformedRecordError::EmptyInningsEntry { index })?;
        let team = innings
            .team
            .as_ref()
            .ok_or_else(|| MalformedRecordError::MissingTeam {
                innings: name.to_string(),
            })?;
        let deliveries =
            innings
                .deliveries
                .as_ref()
                .ok_or_else(|| MalformedRecordError::MissingDeliveries {
                    innings: name.to_string(),
                })?;

        for (ball_index, delivery) in deliveries.iter().enumerate() {
            let (label, ball) =
                delivery
                    .event()
                    .ok_or_else(|| MalformedRecordError::EmptyDelivery {
                        innings: name.to_string(),
                        index: ball_index,
                    })?;

            update_batting(&mut stats.batting, name, label, ball)?;
            update_bowling(&mut stats.bowling, name, label, ball)?;

            let total = require_runs(ball, name, label)?
                .total
                .ok_or_else(|| missing_field(name, label, "runs.total"))?;
            *stats.team_scores.entry(team.clone()).or_insert(0) += total;
        }
    }

    finalize(&mut stats);
    Ok(stats)
}

fn update_batting(
    batting: &mut BTreeMap<String, BattingSummary>,
    innings: &str,
    label: &BallLabel,
    ball: &BallEvent,
) -> Result<(), MalformedRecordError> {
    let batsman = ball
        .batsman
        .as_ref()
        .ok_or_else(|| missing_field(innings, label, "batsman"))?;
    let off_bat = require_runs(ball, innings, label)?
        .batsman
        .ok_or_else(|| missing_field(innings, label, "runs.batsman"))?;

    let summary = batting.entry(batsman.clone()).or_default();
    summary.runs += off_bat;
    summary.balls += 1;
    if off_bat == 4 {
        summary.fours += 1;
    }
    if off_bat == 6 {
        summary.sixes += 1;
    }
    Ok(())
}

fn update_bowling(
    bowling: &mut BTreeMap<String, BowlingSummary>,
    innings: &str,
    label: &BallLabel,
    ball: &BallEvent,
) -> Result<(), MalformedRecordError> {
    let bowler = ball
        .bowler
        .as_ref()
        .ok_or_else(|| missing_field(innings, label, "bowler"))?;
    let total = require_runs(ball, innings, label)?
        .total
        .ok_or_else(|| missing_field(innings, label, "runs.total"))?;

    let summary = bowling.entry(bowler.clone()).or_default();
    summary.runs += total;
    summary.balls += 1;
    if ball.wicket.is_some() {
        summary.wickets += 1;
    }
    Ok(())
}

fn require_runs<'a>(
    ball: &'a BallEvent,
    innings: &str,
    label: &BallLabel,
) -> Result<&'a Runs, MalformedRecordError> {
    ball.runs
        .as_ref()
        .ok_or_else(|| missing_field(innings, label, "runs"))
}

fn missing_field(innings: &str, label: &BallLabel, field: &'static str) -> MalformedRecordError {
    MalformedRecordError::MissingBallField {
        innings: innings.to_string(),
        ball: label.to_string(),
        field,
    }
}

/// Recomputes every derived metric from the raw counters.
fn finalize(stats: &mut MatchStatistics) {
    for summary in stats.batting.values_mut() {
        summary.strike_rate = summary.computed_strike_rate();
    }
    for summary in stats.bowling.values_mut() {
        summary.overs = summary.computed_overs();
        summary.economy = summary.computed_economy();
    }
}
