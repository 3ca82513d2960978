//! Solve command - Build the full game tree and print the root's minimax value

use std::{path::PathBuf, time::Instant};

use anyhow::{Context, Result};
use clap::Parser;
use indicatif::ProgressBar;

use crate::{
    analysis::TreeStats,
    cli::{
        config::RunConfig,
        output::{
            create_spinner, format_number, log_step, print_kv, print_section, print_subsection,
        },
    },
    export::{ExportFormat, ReportExporter, SolveReport},
    tictactoe::{GameTree, Node, Position, Value},
};

#[derive(Parser, Debug)]
pub struct SolveArgs {
    /// Starting position as 9 cells, row-major ('.'/'0' empty, 'X'/'1', 'O'/'2');
    /// '/', '|', ',' and whitespace are ignored. Defaults to the empty board.
    #[arg(long, short = 'p')]
    pub position: Option<String>,

    /// Print tree statistics after the value
    #[arg(long)]
    pub stats: bool,

    /// Print the value of every root move and the best moves
    #[arg(long)]
    pub moves: bool,

    /// Export a report (`.csv` writes the per-depth table, anything else JSON)
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Show a spinner on stderr while working
    #[arg(long)]
    pub progress: bool,

    /// Print timing diagnostics on stderr
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

impl TryFrom<SolveArgs> for RunConfig {
    type Error = crate::Error;

    fn try_from(args: SolveArgs) -> crate::Result<Self> {
        let position = match args.position.as_deref() {
            Some(s) => Position::from_string(s)?,
            None => Position::new(),
        };

        let mut config = RunConfig::new(position)
            .with_stats(args.stats)
            .with_moves(args.moves)
            .with_progress(args.progress)
            .with_verbose(args.verbose);
        if let Some(path) = args.export {
            config = config.with_export(path);
        }
        Ok(config)
    }
}

/// Parse arguments into a [`RunConfig`] and run it
pub fn execute(args: SolveArgs) -> Result<()> {
    let config = RunConfig::try_from(args).context("invalid --position")?;
    run(&config).map(|_| ())
}

/// Build, evaluate and report. Returns the root value.
pub fn run(config: &RunConfig) -> Result<Value> {
    let spinner = if config.progress {
        Some(create_spinner("Expanding game tree")?)
    } else {
        None
    };

    let (tree, value) = with_spinner(spinner, |spinner| {
        log_step(config.verbose, &format!("expanding game tree from '{}'", config.position.encode()));
        let started = Instant::now();
        let mut tree = GameTree::build(config.position).with_context(|| {
            format!(
                "failed to expand game tree from '{}'",
                config.position.encode()
            )
        })?;
        log_step(config.verbose, &format!("expanded in {:.2?}", started.elapsed()));

        if let Some(pb) = spinner {
            pb.set_message("Evaluating minimax");
        }
        let started = Instant::now();
        let value = tree.evaluate().context("minimax evaluation failed")?;
        log_step(config.verbose, &format!("evaluated in {:.2?}", started.elapsed()));
        Ok((tree, value))
    })?;

    println!("{value}");

    if config.show_stats {
        print_stats(&tree.stats());
    }
    if config.show_moves {
        print_moves(tree.root());
    }

    if let Some(path) = &config.export {
        let report = SolveReport::new(&tree, value);
        let format = ReportExporter::export(&report, path)
            .with_context(|| format!("failed to export report to {}", path.display()))?;
        let label = match format {
            ExportFormat::Json => "JSON report",
            ExportFormat::Csv => "CSV depth table",
        };
        log_step(config.verbose, &format!("{label} written to {}", path.display()));
    }

    Ok(value)
}

/// Run `work` under an optional spinner and clear the spinner on success or error
fn with_spinner<T>(
    spinner: Option<ProgressBar>,
    work: impl FnOnce(Option<&ProgressBar>) -> Result<T>,
) -> Result<T> {
    let result = work(spinner.as_ref());
    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }
    result
}

fn print_stats(stats: &TreeStats) {
    print_section("Game Tree Statistics");
    print_kv("Total nodes", &format_number(stats.total_nodes));
    print_kv("Terminal nodes", &format_number(stats.terminal_nodes()));
    print_kv("X wins", &format_number(stats.outcomes.x_wins));
    print_kv("O wins", &format_number(stats.outcomes.o_wins));
    print_kv("Draws", &format_number(stats.outcomes.draws));
    print_kv("Max depth", &stats.max_depth().to_string());

    print_subsection("Nodes by depth");
    for (depth, (&nodes, &terminals)) in stats
        .nodes_by_depth
        .iter()
        .zip(&stats.terminals_by_depth)
        .enumerate()
    {
        println!(
            "  Depth {depth}: {} nodes ({} terminal)",
            format_number(nodes),
            format_number(terminals)
        );
    }
}

fn print_moves(root: &Node) {
    print_section("Root Moves");
    println!("{}", root.position());

    let moves = root.move_values();
    if moves.is_empty() {
        println!("  (position is terminal: {:?})", root.result());
        return;
    }

    for (pos, value) in &moves {
        println!(
            "  position {pos} (row {}, col {}): {value:+}",
            pos / 3,
            pos % 3
        );
    }
    let best: Vec<String> = root.best_moves().iter().map(|m| m.to_string()).collect();
    print_kv("Best moves", &best.join(", "));
}
