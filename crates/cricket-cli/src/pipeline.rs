//! The load -> aggregate -> narrate pipeline and its degrade policy.
//!
//! The aggregator fails fast and explicitly; the decision of what to do
//! with a failure lives here. `analyze` never returns an error: a broken
//! record degrades to a fixed placeholder and null statistics, and a failed
//! commentary request degrades to a placeholder while keeping the
//! statistics, so a caller can always tell "no stats" from "wrong stats".

use std::path::Path;

use cricket_narrate::{NarrateError, Narrator};
use cricket_stats::{MalformedRecordError, MatchStatistics};
use serde::Serialize;
use thiserror::Error;

use crate::loader::{self, LoadError};

/// Commentary shown when the record could not be loaded or aggregated.
pub const PIPELINE_PLACEHOLDER: &str = "Analysis unavailable due to an error.";

/// Commentary shown when statistics exist but commentary generation failed
/// or was not configured.
pub const API_PLACEHOLDER: &str = "Analysis unavailable due to API error.";

/// Errors from the load and aggregate stages.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error(transparent)]
    Aggregate(#[from] MalformedRecordError),
}

/// The full pipeline result: statistics (null when the record was
/// unusable) plus commentary or a placeholder.
#[derive(Debug, Serialize)]
pub struct AnalysisReport {
    pub statistics: Option<MatchStatistics>,
    pub commentary: String,
}

/// Loads a record and aggregates it, propagating failures to the caller.
pub fn stats(path: &Path) -> Result<MatchStatistics, PipelineError> {
    let record = loader::load_record(path)?;
    Ok(cricket_stats::aggregate(&record)?)
}

/// Runs the full pipeline with the degrade policy applied.
///
/// A `None` narrator (no API key configured) is treated like a failed
/// commentary request: the statistics still come back, with the API
/// placeholder as commentary.
pub fn analyze(path: &Path, narrator: Option<&Narrator>) -> AnalysisReport {
    let statistics = match stats(path) {
        Ok(statistics) => statistics,
        Err(err) => {
            tracing::warn!(error = %err, path = %path.display(), "match analysis failed");
            return AnalysisReport {
                statistics: None,
                commentary: PIPELINE_PLACEHOLDER.to_string(),
            };
        }
    };

    let commentary = match narrator.map(|n| n.generate(&statistics.info)) {
        Some(Ok(text)) => text,
        Some(Err(err)) => {
            warn_narration(&err);
            API_PLACEHOLDER.to_string()
        }
        None => API_PLACEHOLDER.to_string(),
    };

    AnalysisReport {
        statistics: Some(statistics),
        commentary,
    }
}

fn warn_narration(err: &NarrateError) {
    tracing::warn!(error = %err, "commentary generation failed");
}
