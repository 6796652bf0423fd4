//! Per-team aggregation of the parsed match list.

use std::collections::HashMap;

use crate::records::{RawMatch, TeamMatch, TeamRecord};
use crate::{ReportError, Result};

/// Pivots the ordered match list into insertion-ordered team records, each
/// holding that team's matches from its own perspective.
///
/// Two passes: discovery creates one record per distinct name (exact,
/// case-sensitive equality) in first-seen order; projection then appends a
/// `TeamMatch` to each side of every match. Every `RawMatch` contributes
/// exactly two entries, so the total across teams is `2 * matches.len()`.
pub fn aggregate_teams(matches: &[RawMatch]) -> Result<Vec<TeamRecord>> {
    let mut teams: Vec<TeamRecord> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for m in matches {
        for name in [&m.team_a, &m.team_b] {
            if !index.contains_key(name.as_str()) {
                index.insert(name.clone(), teams.len());
                teams.push(TeamRecord {
                    name: name.clone(),
                    matches: Vec::new(),
                });
            }
        }
    }

    for m in matches {
        let a = lookup(&index, &m.team_a)?;
        teams[a].matches.push(TeamMatch {
            opponent: m.team_b.clone(),
            self_score: m.score_a.clone(),
            opponent_score: m.score_b.clone(),
            result: m.result.clone(),
        });

        let b = lookup(&index, &m.team_b)?;
        teams[b].matches.push(TeamMatch {
            opponent: m.team_a.clone(),
            self_score: m.score_b.clone(),
            opponent_score: m.score_a.clone(),
            result: m.result.clone(),
        });
    }

    log::debug!(
        "aggregated {} matches into {} teams",
        matches.len(),
        teams.len()
    );
    Ok(teams)
}

// The discovery pass registers every name, so a miss here means the two
// passes disagree. That is an internal-consistency failure, not bad input.
fn lookup(index: &HashMap<String, usize>, name: &str) -> Result<usize> {
    index.get(name).copied().ok_or_else(|| {
        ReportError::Internal(format!("team {name:?} missing from discovery index"))
    })
}
