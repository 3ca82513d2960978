//! Tic-Tac-Toe positions and the exhaustive game tree

pub mod board;
pub mod game_tree;
pub mod lines;
pub mod outcome;

pub use board::{Cell, Player, Position};
pub use game_tree::{GameTree, Node};
pub use lines::{LineAnalyzer, WINNING_LINES};
pub use outcome::{Outcome, Value};
