//! CLI for the cricket tournament report pipeline.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use cric_report::markup::CricinfoParser;
use cric_report::pipeline::{self, ReportConfig};

#[derive(Parser)]
#[command(name = "cric-report")]
#[command(about = "Fetch a cricket results page and emit per-team reports", long_about = None)]
struct Cli {
    /// Destination path for the spreadsheet workbook
    #[arg(long)]
    excel: PathBuf,

    /// Destination folder for per-team scorecard subfolders (must not exist)
    #[arg(long = "data-folder")]
    data_folder: PathBuf,

    /// URL of the tournament results page
    #[arg(long)]
    source: String,

    /// Fixed-layout scorecard template PDF
    #[arg(long, default_value = "Template.pdf")]
    template: PathBuf,

    /// Directory for the matches.json / teams.json snapshots
    #[arg(long, default_value = ".")]
    snapshot_dir: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let config = ReportConfig {
        source_url: cli.source,
        excel_path: cli.excel,
        data_dir: cli.data_folder,
        template_path: cli.template,
        snapshot_dir: cli.snapshot_dir,
    };

    let report =
        pipeline::run(&config, &CricinfoParser::new()).context("report generation failed")?;
    log::info!(
        "done: {} matches, {} teams, {} scorecards",
        report.matches,
        report.teams,
        report.documents
    );
    Ok(())
}
