use serde::{Deserialize, Serialize};

/// One tournament fixture as it appears on the results page, in document
/// order. Names and scores are the extracted text verbatim: no trimming,
/// no normalization. Scores may be empty (see the parser's count policy).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawMatch {
    pub team_a: String,
    pub team_b: String,
    pub score_a: String,
    pub score_b: String,
    pub result: String,
}

/// One team's perspective on one [`RawMatch`]. Owned exclusively by its
/// [`TeamRecord`]; created during aggregation and immutable afterward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMatch {
    pub opponent: String,
    pub self_score: String,
    pub opponent_score: String,
    /// The page's free-text summary, copied verbatim to both sides.
    /// Callers that need a winner/loser distinction must parse it.
    pub result: String,
}

/// One entry per distinct team name, in first-seen order. Name matching is
/// exact string equality, so variant spellings become distinct teams.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamRecord {
    pub name: String,
    pub matches: Vec<TeamMatch>,
}
