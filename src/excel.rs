//! Spreadsheet rendering: one worksheet per team.

use std::collections::HashSet;
use std::path::Path;

use rust_xlsxwriter::{Workbook, Worksheet};

use crate::records::TeamRecord;
use crate::{ReportError, Result};

pub const SHEET_HEADER: [&str; 4] = ["Vs", "Self Score", "Opponent Score", "Result"];

/// Writes one sheet per team (sheet name = team name) with the fixed header
/// row and one row per match in sequence order. Duplicate team names are a
/// sheet-name collision and fail before any sheet is created.
pub fn write_team_workbook(teams: &[TeamRecord], path: &Path) -> Result<()> {
    let mut seen = HashSet::new();
    for team in teams {
        if !seen.insert(team.name.as_str()) {
            return Err(ReportError::DestinationConflict(format!(
                "duplicate sheet name {:?}",
                team.name
            )));
        }
    }

    let mut workbook = Workbook::new();
    for team in teams {
        let mut rows = vec![SHEET_HEADER.iter().map(|s| s.to_string()).collect()];
        for m in &team.matches {
            rows.push(vec![
                m.opponent.clone(),
                m.self_score.clone(),
                m.opponent_score.clone(),
                m.result.clone(),
            ]);
        }

        let sheet = workbook.add_worksheet();
        sheet.set_name(&team.name)?;
        write_rows(sheet, &rows)?;
    }

    workbook.save(path)?;
    log::info!("workbook written: {} ({} sheets)", path.display(), teams.len());
    Ok(())
}

fn write_rows(worksheet: &mut Worksheet, rows: &[Vec<String>]) -> Result<()> {
    for (row_idx, row) in rows.iter().enumerate() {
        for (col_idx, value) in row.iter().enumerate() {
            worksheet.write_string(row_idx as u32, col_idx as u16, value)?;
        }
    }
    Ok(())
}
