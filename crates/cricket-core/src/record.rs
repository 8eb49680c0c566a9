//! The hierarchical match record: innings, deliveries, and ball events.

use std::collections::BTreeMap;
use std::fmt;

use serde::de::{self, Deserializer, Visitor};
use serde::Deserialize;

use crate::info::MatchInfo;

/// A complete ball-by-ball match record.
///
/// `innings` stays `Option` so that a record missing the key entirely is
/// distinguishable from one with an empty innings list; consumers treat the
/// former as malformed and the latter as a valid, empty match.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MatchRecord {
    /// Match metadata block.
    #[serde(default)]
    pub info: MatchInfo,
    /// Innings in match order.
    pub innings: Option<Vec<InningsEntry>>,
}

/// One innings entry: a single-entry mapping from the innings name
/// (e.g. `"1st innings"`) to its body.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct InningsEntry(pub BTreeMap<String, Innings>);

impl InningsEntry {
    /// The innings name and body. Scorers emit exactly one entry per
    /// mapping; if more are present the first in key order is used.
    pub fn body(&self) -> Option<(&str, &Innings)> {
        self.0
            .iter()
            .next()
            .map(|(name, innings)| (name.as_str(), innings))
    }
}

/// The body of one innings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Innings {
    /// The batting team.
    pub team: Option<String>,
    /// Deliveries in the order they were bowled.
    pub deliveries: Option<Vec<Delivery>>,
}

/// One delivery: a single-entry mapping from the ball label (e.g. `"0.1"`)
/// to the ball event. Processing order is the order of the enclosing list;
/// the label itself is never interpreted.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct Delivery(pub BTreeMap<BallLabel, BallEvent>);

impl Delivery {
    /// The ball label and event. As with [`InningsEntry::body`], the first
    /// entry wins if the mapping unexpectedly holds more than one.
    pub fn event(&self) -> Option<(&BallLabel, &BallEvent)> {
        self.0.iter().next()
    }
}

/// A ball label such as `"0.1"` (over 0, ball 1).
///
/// Scorers write these as YAML numbers, so deserialization accepts any
/// scalar and normalizes it to its string form.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct BallLabel(pub String);

impl fmt::Display for BallLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for BallLabel {
    fn from(label: &str) -> Self {
        BallLabel(label.to_string())
    }
}

impl<'de> Deserialize<'de> for BallLabel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct LabelVisitor;

        impl Visitor<'_> for LabelVisitor {
            type Value = BallLabel;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a ball label (string or number)")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<BallLabel, E> {
                Ok(BallLabel(v.to_string()))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<BallLabel, E> {
                Ok(BallLabel(v.to_string()))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<BallLabel, E> {
                Ok(BallLabel(v.to_string()))
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<BallLabel, E> {
                Ok(BallLabel(v.to_string()))
            }
        }

        deserializer.deserialize_any(LabelVisitor)
    }
}

/// The outcome of a single ball bowled.
///
/// Required-ness is decided by the consumer; unknown keys such as
/// `non_striker` are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BallEvent {
    /// The striker facing this ball.
    pub batsman: Option<String>,
    /// The bowler delivering this ball.
    pub bowler: Option<String>,
    /// Runs scored off this ball.
    pub runs: Option<Runs>,
    /// Present when a wicket fell on this ball.
    pub wicket: Option<WicketEvent>,
}

/// Run breakdown for one ball.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Runs {
    /// Runs credited to the striker.
    pub batsman: Option<u32>,
    /// Extras (byes, wides, ...) not credited to the striker.
    pub extras: Option<u32>,
    /// Total added to the team score and conceded by the bowler.
    pub total: Option<u32>,
}

/// Details of a dismissal. Consumers that only care whether a wicket fell
/// can test presence of the field and ignore the contents.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WicketEvent {
    /// Dismissal type (e.g. "bowled", "caught", "run out").
    pub kind: Option<String>,
    /// The dismissed player.
    pub player_out: Option<String>,
    /// Fielders involved in the dismissal.
    #[serde(default)]
    pub fielders: Vec<String>,
}
