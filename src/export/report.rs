//! JSON and CSV reports for a solved position

use std::{fs::File, io::BufWriter, path::Path};

use serde::{Deserialize, Serialize};

use crate::{
    Result,
    analysis::TreeStats,
    tictactoe::{GameTree, Outcome, Player, Value},
};

/// Value of playing in one cell from the root
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveValue {
    pub position: usize,
    pub value: Value,
}

/// Summary of an evaluated game tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolveReport {
    /// Root position encoded row-major
    pub position: String,
    /// `None` when the root is terminal
    pub side_to_move: Option<Player>,
    pub result: Outcome,
    pub value: Value,
    pub best_moves: Vec<usize>,
    pub move_values: Vec<MoveValue>,
    pub stats: TreeStats,
}

impl SolveReport {
    /// Summarize `tree`, whose root evaluated to `value`
    pub fn new(tree: &GameTree, value: Value) -> Self {
        let root = tree.root();
        let result = root.result();
        let side_to_move = if result.is_terminal() {
            None
        } else {
            root.position().side_to_move().ok()
        };

        Self {
            position: root.position().encode(),
            side_to_move,
            result,
            value,
            best_moves: root.best_moves(),
            move_values: root
                .move_values()
                .into_iter()
                .map(|(position, value)| MoveValue { position, value })
                .collect(),
            stats: tree.stats(),
        }
    }
}

/// One row of the per-depth CSV table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepthRecord {
    pub depth: usize,
    pub nodes: usize,
    pub terminals: usize,
}

/// Output format, chosen from the export path's extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Csv,
}

impl ExportFormat {
    /// `.csv` selects CSV; anything else is JSON
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("csv") => ExportFormat::Csv,
            _ => ExportFormat::Json,
        }
    }
}

/// Writer for [`SolveReport`] files
pub struct ReportExporter;

impl ReportExporter {
    /// Write `report` to `path` and return the format used.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be created or written.
    pub fn export(report: &SolveReport, path: &Path) -> Result<ExportFormat> {
        let format = ExportFormat::from_path(path);
        match format {
            ExportFormat::Json => Self::write_json(report, path)?,
            ExportFormat::Csv => Self::write_csv(&report.stats, path)?,
        }
        Ok(format)
    }

    fn write_json(report: &SolveReport, path: &Path) -> Result<()> {
        let file = File::create(path).map_err(|source| crate::Error::Io {
            operation: format!("create report file {}", path.display()),
            source,
        })?;
        serde_json::to_writer_pretty(BufWriter::new(file), report)?;
        Ok(())
    }

    fn write_csv(stats: &TreeStats, path: &Path) -> Result<()> {
        let mut writer = csv::Writer::from_path(path)?;
        for record in Self::depth_records(stats) {
            writer.serialize(record)?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Per-depth rows of `stats`, root first
    pub fn depth_records(stats: &TreeStats) -> Vec<DepthRecord> {
        stats
            .nodes_by_depth
            .iter()
            .zip(&stats.terminals_by_depth)
            .enumerate()
            .map(|(depth, (&nodes, &terminals))| DepthRecord {
                depth,
                nodes,
                terminals,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::Position;

    #[test]
    fn format_from_extension() {
        assert_eq!(ExportFormat::from_path(Path::new("out.csv")), ExportFormat::Csv);
        assert_eq!(ExportFormat::from_path(Path::new("OUT.CSV")), ExportFormat::Csv);
        assert_eq!(ExportFormat::from_path(Path::new("out.json")), ExportFormat::Json);
        assert_eq!(ExportFormat::from_path(Path::new("out")), ExportFormat::Json);
    }

    #[test]
    fn report_for_one_move_position() {
        let mut tree = GameTree::build(Position::from_string("XOX/OXO/OX.").unwrap()).unwrap();
        let value = tree.evaluate().unwrap();
        let report = SolveReport::new(&tree, value);

        assert_eq!(report.position, "XOXOXOOX.");
        assert_eq!(report.side_to_move, Some(Player::X));
        assert_eq!(report.result, Outcome::Undecided);
        assert_eq!(report.value, 1);
        assert_eq!(report.best_moves, vec![8]);
        assert_eq!(
            report.move_values,
            vec![MoveValue {
                position: 8,
                value: 1
            }]
        );
        assert_eq!(report.stats.total_nodes, 2);
    }

    #[test]
    fn terminal_report_has_no_side_to_move() {
        let mut tree = GameTree::build(Position::from_string("XXX/OO./...").unwrap()).unwrap();
        let value = tree.evaluate().unwrap();
        let report = SolveReport::new(&tree, value);

        assert_eq!(report.side_to_move, None);
        assert!(report.best_moves.is_empty());
        assert!(report.move_values.is_empty());
    }

    #[test]
    fn depth_records_follow_stats() {
        let stats = TreeStats {
            total_nodes: 5,
            nodes_by_depth: vec![1, 2, 2],
            terminals_by_depth: vec![0, 0, 2],
            ..TreeStats::default()
        };
        let records = ReportExporter::depth_records(&stats);
        assert_eq!(records.len(), 3);
        assert_eq!(
            records[2],
            DepthRecord {
                depth: 2,
                nodes: 2,
                terminals: 2
            }
        );
    }
}
