//! Property tests: no runs or balls are lost or double-counted by the
//! aggregation pass, whatever the delivery sequence looks like.

use std::collections::BTreeMap;

use cricket_core::{
    BallEvent, BallLabel, Delivery, Innings, InningsEntry, MatchRecord, Runs, WicketEvent,
};
use cricket_stats::aggregate;
use proptest::prelude::*;

#[derive(Debug, Clone)]
struct Ball {
    batsman: usize,
    bowler: usize,
    off_bat: u32,
    extras: u32,
    wicket: bool,
}

const BATSMEN: [&str; 4] = ["Root", "Stokes", "Brook", "Pope"];
const BOWLERS: [&str; 3] = ["Starc", "Cummins", "Lyon"];

fn ball_strategy() -> impl Strategy<Value = Ball> {
    (0..BATSMEN.len(), 0..BOWLERS.len(), 0u32..=6, 0u32..=4, any::<bool>()).prop_map(
        |(batsman, bowler, off_bat, extras, wicket)| Ball {
            batsman,
            bowler,
            off_bat,
            extras,
            wicket,
        },
    )
}

fn record_from(balls: &[Ball]) -> MatchRecord {
    let deliveries = balls
        .iter()
        .enumerate()
        .map(|(i, ball)| {
            let event = BallEvent {
                batsman: Some(BATSMEN[ball.batsman].to_string()),
                bowler: Some(BOWLERS[ball.bowler].to_string()),
                runs: Some(Runs {
                    batsman: Some(ball.off_bat),
                    extras: Some(ball.extras),
                    total: Some(ball.off_bat + ball.extras),
                }),
                wicket: ball.wicket.then(WicketEvent::default),
            };
            let mut map = BTreeMap::new();
            map.insert(BallLabel(format!("{}.{}", i / 6, i % 6 + 1)), event);
            Delivery(map)
        })
        .collect();

    let mut innings = BTreeMap::new();
    innings.insert(
        "1st innings".to_string(),
        Innings {
            team: Some("England".to_string()),
            deliveries: Some(deliveries),
        },
    );

    MatchRecord {
        innings: Some(vec![InningsEntry(innings)]),
        ..Default::default()
    }
}

proptest! {
    #[test]
    fn batting_runs_and_balls_are_conserved(balls in prop::collection::vec(ball_strategy(), 0..120)) {
        let stats = aggregate(&record_from(&balls)).unwrap();

        let total_off_bat: u32 = balls.iter().map(|b| b.off_bat).sum();
        let summed: u32 = stats.batting.values().map(|s| s.runs).sum();
        prop_assert_eq!(summed, total_off_bat);

        for (i, name) in BATSMEN.iter().enumerate() {
            let faced = balls.iter().filter(|b| b.batsman == i).count() as u32;
            let recorded = stats.batting.get(*name).map_or(0, |s| s.balls);
            prop_assert_eq!(recorded, faced);
        }
    }

    #[test]
    fn bowling_totals_and_wickets_are_conserved(balls in prop::collection::vec(ball_strategy(), 0..120)) {
        let stats = aggregate(&record_from(&balls)).unwrap();

        let conceded: u32 = stats.bowling.values().map(|s| s.runs).sum();
        let total: u32 = balls.iter().map(|b| b.off_bat + b.extras).sum();
        prop_assert_eq!(conceded, total);

        let wickets: u32 = stats.bowling.values().map(|s| s.wickets).sum();
        prop_assert_eq!(wickets, balls.iter().filter(|b| b.wicket).count() as u32);

        // Team score equals the sum of totals over every delivery.
        prop_assert_eq!(stats.team_scores.get("England").copied().unwrap_or(0), total);
    }

    #[test]
    fn derived_metrics_match_their_formulas(balls in prop::collection::vec(ball_strategy(), 1..60)) {
        let stats = aggregate(&record_from(&balls)).unwrap();

        for summary in stats.batting.values() {
            let expected = if summary.balls == 0 {
                0.0
            } else {
                (f64::from(summary.runs) / f64::from(summary.balls) * 100.0 * 100.0).round() / 100.0
            };
            prop_assert_eq!(summary.strike_rate, expected);
        }

        for summary in stats.bowling.values() {
            let expected = if summary.balls == 0 {
                0.0
            } else {
                (f64::from(summary.runs) / (f64::from(summary.balls) / 6.0) * 100.0).round() / 100.0
            };
            prop_assert_eq!(summary.economy, expected);
            prop_assert_eq!(summary.overs, (f64::from(summary.balls) / 6.0 * 10.0).round() / 10.0);
        }
    }
}
