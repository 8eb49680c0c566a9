//! Ball-by-ball match statistics aggregation.
//!
//! This crate folds a [`cricket_core::MatchRecord`] into a
//! [`MatchStatistics`] value: per-batsman and per-bowler accumulators, team
//! totals, and derived rate metrics (strike rate, overs, economy).
//!
//! # Overview
//!
//! - [`aggregate`] - single-pass fold over all deliveries in all innings
//! - [`BattingSummary`] / [`BowlingSummary`] - per-player accumulators
//! - [`MatchStatistics`] - the composed result
//! - [`MalformedRecordError`] - raised when a required field is absent
//!
//! # Example
//!
//! ```
//! use cricket_core::MatchRecord;
//! use cricket_stats::aggregate;
//!
//! let record: MatchRecord = serde_yaml::from_str("innings: []")?;
//! let stats = aggregate(&record)?;
//! assert!(stats.batting.is_empty());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod aggregate;
mod summary;

pub use aggregate::{aggregate, MalformedRecordError};
pub use summary::{BattingSummary, BowlingSummary, MatchStatistics};
