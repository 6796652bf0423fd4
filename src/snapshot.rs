//! Diagnostic snapshots of the two intermediate datasets.
//!
//! Written after each pipeline stage so a rendering failure does not
//! discard already-computed work. Nothing reads these back.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::Result;

pub const MATCHES_SNAPSHOT: &str = "matches.json";
pub const TEAMS_SNAPSHOT: &str = "teams.json";

pub fn write_snapshot<T: Serialize>(dir: &Path, name: &str, value: &T) -> Result<PathBuf> {
    let path = dir.join(name);
    let json = serde_json::to_string_pretty(value)?;
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, json)?;
    fs::rename(&tmp, &path)?;
    log::debug!("snapshot written: {}", path.display());
    Ok(path)
}
