//! Core types for ball-by-ball cricket match records.
//!
//! This crate provides the deserialized shape of a match record as produced
//! by ball-by-ball scorers: match metadata, an ordered list of innings, and
//! the per-delivery outcomes within each innings.
//!
//! - [`MatchRecord`] is the top-level record
//! - [`InningsEntry`] and [`Innings`] describe one team's batting turn
//! - [`Delivery`] and [`BallEvent`] describe a single ball bowled
//! - [`MatchInfo`] carries the free-form metadata block
//!
//! Fields that downstream consumers require are deliberately `Option`: the
//! record is accepted as-is at deserialization time, and it is up to the
//! consumer (e.g. the statistics aggregator) to decide which absences make
//! a record unusable.

mod info;
mod record;

pub use info::{MatchInfo, Outcome};
pub use record::{BallEvent, BallLabel, Delivery, Innings, InningsEntry, MatchRecord, Runs, WicketEvent};
