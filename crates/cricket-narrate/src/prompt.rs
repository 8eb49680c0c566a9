//! Prompt construction from match metadata.

use cricket_core::MatchInfo;

/// Builds the analysis prompt from the match metadata block.
///
/// Only location, teams, and winner feed the prompt today; the statistics
/// value the pipeline produces is a superset of this, leaving room for
/// richer prompts without touching the aggregation side.
pub fn build_prompt(info: &MatchInfo) -> String {
    let city = info.city.as_deref().unwrap_or("Unknown");
    let teams = if info.teams.is_empty() {
        "Unknown".to_string()
    } else {
        info.teams.join(", ")
    };
    let winner = info.winner().unwrap_or("Unknown");

    format!(
        "Analyze this cricket match data:\n\
         Location: {city}\n\
         Teams: {teams}\n\
         Winner: {winner}\n\
         \n\
         Provide detailed analysis including:\n\
         1. Key performances with statistics\n\
         2. Match turning points\n\
         3. Recommendations"
    )
}

#[cfg(test)]
mod tests {
    use cricket_core::Outcome;

    use super::*;

    #[test]
    fn prompt_includes_location_teams_and_winner() {
        let info = MatchInfo {
            city: Some("Galle".to_string()),
            teams: vec!["Sri Lanka".to_string(), "England".to_string()],
            outcome: Some(Outcome {
                winner: Some("England".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        };

        let prompt = build_prompt(&info);
        assert!(prompt.contains("Location: Galle"));
        assert!(prompt.contains("Teams: Sri Lanka, England"));
        assert!(prompt.contains("Winner: England"));
        assert!(prompt.contains("Match turning points"));
    }

    #[test]
    fn missing_metadata_falls_back_to_unknown() {
        let prompt = build_prompt(&MatchInfo::default());
        assert!(prompt.contains("Location: Unknown"));
        assert!(prompt.contains("Teams: Unknown"));
        assert!(prompt.contains("Winner: Unknown"));
    }
}
