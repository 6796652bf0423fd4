//! Results-page markup extraction.
//!
//! The page is a flat list of self-contained match blocks. Each block is
//! expected to carry exactly two team names and one result line; score
//! nodes vary between zero and two depending on how far the fixture got.

use scraper::{ElementRef, Html, Selector};

use crate::records::RawMatch;
use crate::{ReportError, Result};

/// Extraction seam: aggregation only sees `Vec<RawMatch>`, so the strategy
/// behind it (CSS selectors today) can be swapped without touching it.
pub trait ResultsParser {
    fn parse(&self, html: &str) -> Result<Vec<RawMatch>>;
}

/// Selector-based parser for the ESPNcricinfo results layout.
pub struct CricinfoParser {
    block: Selector,
    team_name: Selector,
    score: Selector,
    status: Selector,
}

impl CricinfoParser {
    pub fn new() -> Self {
        // Fixed literal selectors; parse only fails on invalid syntax.
        CricinfoParser {
            block: Selector::parse("div.match-score-block").unwrap(),
            team_name: Selector::parse("div.name-detail > p.name").unwrap(),
            score: Selector::parse("div.score-detail > span.score").unwrap(),
            status: Selector::parse("div.status-text > span").unwrap(),
        }
    }
}

impl Default for CricinfoParser {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultsParser for CricinfoParser {
    fn parse(&self, html: &str) -> Result<Vec<RawMatch>> {
        let document = Html::parse_document(html);
        let mut matches = Vec::new();

        for block in document.select(&self.block) {
            let names: Vec<String> = block
                .select(&self.team_name)
                .map(|el| node_text(&el))
                .collect();
            let [Some(team_a), Some(team_b)] = [names.first(), names.get(1)] else {
                return Err(ReportError::Structure(format!(
                    "match block {} has {} team name node(s), expected 2",
                    matches.len(),
                    names.len()
                )));
            };
            if team_a.is_empty() || team_b.is_empty() {
                return Err(ReportError::Structure(format!(
                    "match block {} has an empty team name",
                    matches.len()
                )));
            }

            let scores: Vec<String> =
                block.select(&self.score).map(|el| node_text(&el)).collect();
            // Count-based policy: 1 score means only one side batted;
            // anything other than 1 or 2 degrades to no scores.
            let (score_a, score_b) = match scores.as_slice() {
                [a, b] => (a.clone(), b.clone()),
                [a] => (a.clone(), String::new()),
                _ => (String::new(), String::new()),
            };

            let result = block
                .select(&self.status)
                .next()
                .map(|el| node_text(&el))
                .ok_or_else(|| {
                    ReportError::Structure(format!(
                        "match block {} has no result node",
                        matches.len()
                    ))
                })?;

            matches.push(RawMatch {
                team_a: team_a.clone(),
                team_b: team_b.clone(),
                score_a,
                score_b,
                result,
            });
        }

        log::debug!("extracted {} match blocks", matches.len());
        Ok(matches)
    }
}

/// Concatenated text content, passed through verbatim (no trimming).
fn node_text(el: &ElementRef) -> String {
    el.text().collect()
}
