//! Exhaustive Tic-Tac-Toe game tree with minimax evaluation
//!
//! This crate provides:
//! - Position representation, terminal detection and side-to-move derivation
//! - Full game tree construction from any starting position
//! - Minimax evaluation of every node in the tree
//! - Tree statistics and JSON/CSV reports
//! - The `ttt-minimax` command-line entry point

pub mod analysis;
pub mod cli;
pub mod error;
pub mod export;
pub mod tictactoe;

pub use analysis::TreeStats;
pub use error::{Error, Result};
pub use tictactoe::{GameTree, Node, Outcome, Player, Position, Value};
