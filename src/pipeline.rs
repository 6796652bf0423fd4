//! Run orchestration: fetch -> parse -> aggregate -> render x2.
//!
//! Strictly one-directional and single-pass; no stage reads back its own
//! output. Both intermediate datasets are snapshotted before rendering so
//! a renderer failure does not discard computed work.

use std::path::PathBuf;

use crate::markup::ResultsParser;
use crate::scorecard::ScorecardTemplate;
use crate::{aggregate, excel, fetch, scorecard, snapshot, Result};

pub struct ReportConfig {
    /// Results page URL.
    pub source_url: String,
    /// Workbook destination path.
    pub excel_path: PathBuf,
    /// Root folder for the per-team scorecard tree. Must not pre-exist.
    pub data_dir: PathBuf,
    /// Fixed-layout scorecard template.
    pub template_path: PathBuf,
    /// Where matches.json / teams.json land.
    pub snapshot_dir: PathBuf,
}

pub struct RunReport {
    pub matches: usize,
    pub teams: usize,
    pub documents: usize,
}

pub fn run(config: &ReportConfig, parser: &dyn ResultsParser) -> Result<RunReport> {
    let html = fetch::fetch_results_page(&config.source_url)?;
    run_from_markup(config, parser, &html)
}

/// Everything after the fetch, so the pipeline is exercisable offline
/// from fixture markup.
pub fn run_from_markup(
    config: &ReportConfig,
    parser: &dyn ResultsParser,
    html: &str,
) -> Result<RunReport> {
    let matches = parser.parse(html)?;
    log::info!("parsed {} matches", matches.len());
    snapshot::write_snapshot(&config.snapshot_dir, snapshot::MATCHES_SNAPSHOT, &matches)?;

    let teams = aggregate::aggregate_teams(&matches)?;
    log::info!("aggregated {} teams", teams.len());
    snapshot::write_snapshot(&config.snapshot_dir, snapshot::TEAMS_SNAPSHOT, &teams)?;

    // Template problems should surface before either renderer touches disk.
    let template = ScorecardTemplate::load(&config.template_path)?;

    excel::write_team_workbook(&teams, &config.excel_path)?;
    let documents = scorecard::render_scorecards(&teams, &template, &config.data_dir)?;

    Ok(RunReport {
        matches: matches.len(),
        teams: teams.len(),
        documents,
    })
}
