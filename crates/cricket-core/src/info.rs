//! Match metadata: the `info` block of a match record.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Free-form match metadata.
///
/// The fields consumed by this workspace (`city`, `teams`, `outcome.winner`)
/// are typed; everything else the scorer recorded (dates, venue, umpires,
/// toss, ...) is kept in `extra` so the block survives a round trip into the
/// statistics output unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchInfo {
    /// City the match was played in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// The two participating teams.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub teams: Vec<String>,
    /// Match outcome, if decided.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<Outcome>,
    /// Any remaining metadata keys, preserved verbatim.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_yaml::Value>,
}

/// Match outcome block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Outcome {
    /// Winning team, absent for draws, ties, and no-results.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub winner: Option<String>,
    /// Margin details and other outcome keys, preserved verbatim.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_yaml::Value>,
}

impl MatchInfo {
    /// Winning team name, if the outcome names one.
    pub fn winner(&self) -> Option<&str> {
        self.outcome.as_ref().and_then(|o| o.winner.as_deref())
    }
}
