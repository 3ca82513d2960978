//! ttt-minimax CLI - exhaustive Tic-Tac-Toe game tree solver
//!
//! Builds the complete game tree from a starting position (the empty board
//! by default), evaluates it with minimax and prints the root value.

use anyhow::Result;
use clap::Parser;

#[derive(Parser)]
#[command(name = "ttt-minimax")]
#[command(version, about = "Exhaustive Tic-Tac-Toe minimax solver", long_about = None)]
struct Cli {
    #[command(flatten)]
    solve: ttt_minimax::cli::commands::solve::SolveArgs,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    ttt_minimax::cli::commands::solve::execute(cli.solve)
}
