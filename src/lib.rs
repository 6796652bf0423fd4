//! Cricket tournament report pipeline.
//!
//! Fetches a results page, extracts match records from its markup,
//! aggregates them per team, and renders a spreadsheet workbook plus one
//! PDF scorecard per (team, opponent) match.

use thiserror::Error;

pub mod aggregate;
pub mod excel;
pub mod fetch;
pub mod markup;
pub mod pipeline;
pub mod records;
pub mod scorecard;
pub mod snapshot;

/// Pipeline error taxonomy. Every variant is fatal for the run; the only
/// degraded-but-valid case (a non-standard score-node count) is handled
/// inside the parser and never surfaces here.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Transport failure or non-success HTTP status.
    #[error("fetch failed: {0}")]
    Fetch(#[from] reqwest::Error),

    /// An expected structural node is missing from the results page.
    /// The source is assumed well-formed, so this signals format drift.
    #[error("results page structure: {0}")]
    Structure(String),

    /// Sheet-name collision or pre-existing destination folder.
    #[error("destination conflict: {0}")]
    DestinationConflict(String),

    /// Internal-consistency failure (e.g. a projection-pass lookup miss,
    /// which the two-pass aggregation should make impossible).
    #[error("internal: {0}")]
    Internal(String),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),

    #[error("snapshot serialization: {0}")]
    Json(#[from] serde_json::Error),

    #[error("workbook: {0}")]
    Excel(#[from] rust_xlsxwriter::XlsxError),

    #[error("scorecard pdf: {0}")]
    Pdf(#[from] lopdf::Error),
}

pub type Result<T> = std::result::Result<T, ReportError>;
