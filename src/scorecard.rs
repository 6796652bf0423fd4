//! Scorecard rendering: one PDF per (team, opponent) match, produced by
//! stamping five text fields onto a fixed-layout template document.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use lopdf::content::Operation;
use lopdf::{dictionary, Dictionary, Document, Object};
use rayon::prelude::*;

use crate::records::{TeamMatch, TeamRecord};
use crate::{ReportError, Result};

const FONT_KEY: &str = "Fsc";
const FONT_SIZE: i64 = 8;
const TEXT_X: i64 = 320;
// Field baselines, top to bottom: team, opponent, self score, opponent
// score, result.
const FIELD_Y: [i64; 5] = [690, 677, 662, 647, 634];

/// The template document, loaded once and stamped per match. Each render
/// works on a fresh `Document` parsed from the cached bytes, so concurrent
/// renders share nothing mutable.
#[derive(Debug)]
pub struct ScorecardTemplate {
    bytes: Vec<u8>,
}

impl ScorecardTemplate {
    pub fn load(path: &Path) -> Result<Self> {
        let bytes = fs::read(path)?;
        // Parse once up front so a broken template fails the run before
        // any destination folder is created.
        let doc = Document::load_mem(&bytes)?;
        if doc.get_pages().is_empty() {
            return Err(ReportError::Structure(format!(
                "template {} has no pages",
                path.display()
            )));
        }
        Ok(ScorecardTemplate { bytes })
    }

    /// Stamps one match's five fields onto page 1 and saves the result.
    pub fn render(&self, team: &str, entry: &TeamMatch, out: &Path) -> Result<()> {
        let mut doc = Document::load_mem(&self.bytes)?;
        let page_id = *doc
            .get_pages()
            .values()
            .next()
            .ok_or_else(|| ReportError::Internal("template page vanished".to_string()))?;

        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica",
        });
        let resources = doc.get_or_create_resources(page_id)?.as_dict_mut()?;
        if !matches!(resources.get(b"Font"), Ok(Object::Dictionary(_))) {
            resources.set("Font", Dictionary::new());
        }
        resources
            .get_mut(b"Font")?
            .as_dict_mut()?
            .set(FONT_KEY, font_id);

        let fields = [
            team,
            entry.opponent.as_str(),
            entry.self_score.as_str(),
            entry.opponent_score.as_str(),
            entry.result.as_str(),
        ];
        let mut content = doc.get_and_decode_page_content(page_id)?;
        for (text, y) in fields.iter().zip(FIELD_Y) {
            content.operations.push(Operation::new("BT", vec![]));
            content
                .operations
                .push(Operation::new("Tf", vec![FONT_KEY.into(), FONT_SIZE.into()]));
            content
                .operations
                .push(Operation::new("Td", vec![TEXT_X.into(), y.into()]));
            content
                .operations
                .push(Operation::new("Tj", vec![Object::string_literal(*text)]));
            content.operations.push(Operation::new("ET", vec![]));
        }
        doc.change_page_content(page_id, content.encode()?)?;

        doc.save(out)?;
        Ok(())
    }
}

/// Renders `dest/<team>/<opponent>.pdf` for every match of every team.
///
/// `dest` must not pre-exist (no-overwrite guard). Team records are
/// read-only by now, so per-team rendering fans out over rayon; failures
/// are collected and the first one is returned after all tasks finish.
/// Returns the number of documents written.
pub fn render_scorecards(
    teams: &[TeamRecord],
    template: &ScorecardTemplate,
    dest: &Path,
) -> Result<usize> {
    if dest.exists() {
        return Err(ReportError::DestinationConflict(format!(
            "destination folder {} already exists",
            dest.display()
        )));
    }
    fs::create_dir_all(dest)?;
    for team in teams {
        fs::create_dir(dest.join(&team.name))?;
        warn_duplicate_opponents(team);
    }

    let failures: Vec<ReportError> = teams
        .par_iter()
        .map(|team| {
            let team_dir = dest.join(&team.name);
            let mut errs = Vec::new();
            for entry in &team.matches {
                let out = team_dir.join(format!("{}.pdf", entry.opponent));
                if let Err(err) = template.render(&team.name, entry, &out) {
                    log::error!("scorecard {} failed: {err}", out.display());
                    errs.push(err);
                }
            }
            errs
        })
        .flatten()
        .collect();

    let total: usize = teams.iter().map(|t| t.matches.len()).sum();
    match failures.into_iter().next() {
        Some(err) => Err(err),
        None => {
            log::info!("{total} scorecards written under {}", dest.display());
            Ok(total)
        }
    }
}

// A rematch against the same opponent reuses the same file name, so the
// later document overwrites the earlier one. Known limitation; log it.
fn warn_duplicate_opponents(team: &TeamRecord) {
    let mut seen = HashSet::new();
    for entry in &team.matches {
        if !seen.insert(entry.opponent.as_str()) {
            log::warn!(
                "{}: repeated opponent {:?}, earlier scorecard will be overwritten",
                team.name,
                entry.opponent
            );
        }
    }
}
