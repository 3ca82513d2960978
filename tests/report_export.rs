use std::fs::{self, File};

use tempfile::tempdir;
use ttt_minimax::{
    GameTree, Position,
    export::{ExportFormat, ReportExporter, SolveReport},
};

fn report_for(board: &str) -> SolveReport {
    let mut tree = GameTree::build(Position::from_string(board).unwrap()).unwrap();
    let value = tree.evaluate().unwrap();
    SolveReport::new(&tree, value)
}

#[test]
fn json_report_round_trips() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("report.json");
    let report = report_for("XOX/.O./...");

    let format = ReportExporter::export(&report, &path).unwrap();
    assert_eq!(format, ExportFormat::Json);

    let parsed: SolveReport = serde_json::from_reader(File::open(&path).unwrap()).unwrap();
    assert_eq!(parsed, report);
    assert_eq!(parsed.position, "XOX.O....");
}

#[test]
fn csv_report_lists_depths() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("depths.csv");
    // O to move with two empty cells.
    let report = report_for("XOX/XOO/.X.");

    let format = ReportExporter::export(&report, &path).unwrap();
    assert_eq!(format, ExportFormat::Csv);

    let contents = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines, vec!["depth,nodes,terminals", "0,1,0", "1,2,0", "2,2,2"]);
}

#[test]
fn export_to_missing_directory_fails() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing").join("report.json");
    let report = report_for("XOX/OXO/OX.");

    assert!(ReportExporter::export(&report, &path).is_err());
}
