//! Run configuration for the solver command

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::tictactoe::Position;

/// Configuration for one solver run.
///
/// # Examples
///
/// ```
/// use ttt_minimax::{Position, cli::config::RunConfig};
///
/// let config = RunConfig::new(Position::new())
///     .with_stats(true)
///     .with_verbose(true);
/// assert!(config.show_stats);
/// assert!(!config.show_moves);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunConfig {
    /// Root position of the tree
    pub position: Position,

    /// Print tree statistics after the value
    pub show_stats: bool,

    /// Print per-move values and best moves after the value
    pub show_moves: bool,

    /// Write a report to this path (`.csv` for the depth table, else JSON)
    pub export: Option<PathBuf>,

    /// Whether to show a spinner while building and evaluating
    pub progress: bool,

    /// Verbose diagnostics on stderr
    pub verbose: bool,
}

impl RunConfig {
    /// Configuration that only prints the root value of `position`
    pub fn new(position: Position) -> Self {
        Self {
            position,
            show_stats: false,
            show_moves: false,
            export: None,
            progress: false,
            verbose: false,
        }
    }

    pub fn with_stats(mut self, show: bool) -> Self {
        self.show_stats = show;
        self
    }

    pub fn with_moves(mut self, show: bool) -> Self {
        self.show_moves = show;
        self
    }

    pub fn with_export(mut self, path: PathBuf) -> Self {
        self.export = Some(path);
        self
    }

    pub fn with_progress(mut self, progress: bool) -> Self {
        self.progress = progress;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self::new(Position::new())
    }
}
