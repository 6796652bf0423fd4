use std::fs;
use std::path::Path;

use lopdf::content::Content;
use lopdf::{dictionary, Document, Object, Stream};

use cric_report::excel::write_team_workbook;
use cric_report::markup::CricinfoParser;
use cric_report::pipeline::{run_from_markup, ReportConfig};
use cric_report::records::{TeamMatch, TeamRecord};
use cric_report::scorecard::{render_scorecards, ScorecardTemplate};
use cric_report::ReportError;

fn team(name: &str, matches: Vec<TeamMatch>) -> TeamRecord {
    TeamRecord {
        name: name.to_string(),
        matches,
    }
}

fn team_match(opponent: &str, self_score: &str, opponent_score: &str, result: &str) -> TeamMatch {
    TeamMatch {
        opponent: opponent.to_string(),
        self_score: self_score.to_string(),
        opponent_score: opponent_score.to_string(),
        result: result.to_string(),
    }
}

/// One empty A4 page, the smallest document the renderer accepts.
fn write_blank_template(path: &Path) {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let content_id = doc.add_object(Stream::new(
        dictionary! {},
        Content { operations: vec![] }.encode().unwrap(),
    ));
    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "Contents" => content_id,
        "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
    });
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => vec![page_id.into()],
            "Count" => 1,
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc.save(path).unwrap();
}

#[test]
fn workbook_written_with_one_sheet_per_team() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("worldcup.xlsx");

    let teams = vec![
        team(
            "India",
            vec![team_match("Australia", "300", "295", "India won by 5 runs")],
        ),
        // Zero-match team still gets a header-only sheet.
        team("England", vec![]),
    ];
    write_team_workbook(&teams, &path).expect("workbook should write");

    let meta = fs::metadata(&path).expect("workbook file should exist");
    assert!(meta.len() > 0);
}

#[test]
fn duplicate_sheet_name_fails_before_writing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("worldcup.xlsx");

    let teams = vec![team("India", vec![]), team("India", vec![])];
    let err = write_team_workbook(&teams, &path).unwrap_err();
    assert!(matches!(err, ReportError::DestinationConflict(_)), "got {err:?}");
    assert!(!path.exists(), "no partial workbook should be left behind");
}

#[test]
fn scorecards_one_pdf_per_match() {
    let dir = tempfile::tempdir().unwrap();
    let template_path = dir.path().join("Template.pdf");
    write_blank_template(&template_path);
    let template = ScorecardTemplate::load(&template_path).expect("template should load");

    let teams = vec![
        team(
            "India",
            vec![
                team_match("Australia", "300", "295", "India won by 5 runs"),
                team_match("England", "", "", "Match abandoned"),
            ],
        ),
        team("Bangladesh", vec![]),
    ];
    let dest = dir.path().join("WorldCup");
    let written = render_scorecards(&teams, &template, &dest).expect("rendering should succeed");
    assert_eq!(written, 2);

    assert!(dest.join("India").join("Australia.pdf").is_file());
    assert!(dest.join("India").join("England.pdf").is_file());

    // Zero-match team: subfolder exists, no documents.
    let bangladesh: Vec<_> = fs::read_dir(dest.join("Bangladesh"))
        .expect("team folder should exist")
        .collect();
    assert!(bangladesh.is_empty());

    // Stamped output must be a loadable document.
    let rendered = Document::load(dest.join("India").join("Australia.pdf"))
        .expect("rendered scorecard should parse");
    assert_eq!(rendered.get_pages().len(), 1);
}

#[test]
fn repeated_opponent_overwrites_earlier_scorecard() {
    let dir = tempfile::tempdir().unwrap();
    let template_path = dir.path().join("Template.pdf");
    write_blank_template(&template_path);
    let template = ScorecardTemplate::load(&template_path).expect("template should load");

    // Group stage plus knockout rematch: same opponent, same file name.
    // The later document silently replaces the earlier one (acknowledged
    // limitation), and rendering still succeeds.
    let teams = vec![team(
        "India",
        vec![
            team_match("Australia", "300", "295", "India won by 5 runs"),
            team_match("Australia", "240", "241", "Australia won by 3 wickets"),
        ],
    )];
    let dest = dir.path().join("WorldCup");
    let written = render_scorecards(&teams, &template, &dest).expect("rendering should succeed");
    assert_eq!(written, 2);

    let india: Vec<_> = fs::read_dir(dest.join("India"))
        .expect("team folder should exist")
        .collect();
    assert_eq!(india.len(), 1, "one file should remain after the overwrite");
    assert!(dest.join("India").join("Australia.pdf").is_file());
}

#[test]
fn existing_destination_folder_is_a_conflict() {
    let dir = tempfile::tempdir().unwrap();
    let template_path = dir.path().join("Template.pdf");
    write_blank_template(&template_path);
    let template = ScorecardTemplate::load(&template_path).expect("template should load");

    let dest = dir.path().join("WorldCup");
    fs::create_dir(&dest).unwrap();

    let teams = vec![team("India", vec![])];
    let err = render_scorecards(&teams, &template, &dest).unwrap_err();
    assert!(matches!(err, ReportError::DestinationConflict(_)), "got {err:?}");
}

#[test]
fn missing_template_fails_load() {
    let dir = tempfile::tempdir().unwrap();
    let err = ScorecardTemplate::load(&dir.path().join("nope.pdf")).unwrap_err();
    assert!(matches!(err, ReportError::Io(_)), "got {err:?}");
}

#[test]
fn pipeline_from_markup_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let template_path = dir.path().join("Template.pdf");
    write_blank_template(&template_path);

    let html = "<html><body>\
        <div class=\"match-score-block\">\
          <div class=\"name-detail\"><p class=\"name\">India</p></div>\
          <div class=\"score-detail\"><span class=\"score\">300</span></div>\
          <div class=\"name-detail\"><p class=\"name\">Australia</p></div>\
          <div class=\"score-detail\"><span class=\"score\">295</span></div>\
          <div class=\"status-text\"><span>India won by 5 runs</span></div>\
        </div>\
        <div class=\"match-score-block\">\
          <div class=\"name-detail\"><p class=\"name\">India</p></div>\
          <div class=\"name-detail\"><p class=\"name\">England</p></div>\
          <div class=\"status-text\"><span>Match abandoned</span></div>\
        </div>\
        </body></html>";

    let config = ReportConfig {
        source_url: String::new(),
        excel_path: dir.path().join("worldcup.xlsx"),
        data_dir: dir.path().join("WorldCup"),
        template_path,
        snapshot_dir: dir.path().to_path_buf(),
    };
    let report =
        run_from_markup(&config, &CricinfoParser::new(), html).expect("pipeline should run");

    assert_eq!(report.matches, 2);
    assert_eq!(report.teams, 3);
    assert_eq!(report.documents, 4);

    assert!(config.excel_path.is_file());
    assert!(config.data_dir.join("India").join("Australia.pdf").is_file());
    assert!(config.data_dir.join("India").join("England.pdf").is_file());
    assert!(config.data_dir.join("Australia").join("India.pdf").is_file());
    assert!(config.data_dir.join("England").join("India.pdf").is_file());

    // Snapshots are plain JSON arrays of the intermediate datasets.
    let teams_json = fs::read_to_string(dir.path().join("teams.json")).unwrap();
    let teams: Vec<TeamRecord> = serde_json::from_str(&teams_json).unwrap();
    assert_eq!(teams.len(), 3);
    assert_eq!(teams[1].name, "Australia");
    assert_eq!(teams[1].matches[0].self_score, "295");
    assert_eq!(teams[1].matches[0].opponent_score, "300");
    assert!(dir.path().join("matches.json").is_file());
}
