//! Classification of a position's result

use serde::{Deserialize, Serialize};

use super::board::Player;

/// Game-theoretic value of a position: +1 X wins, 0 draw, -1 O wins
pub type Value = i32;

/// Result of a position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Win(Player),
    Draw,
    Undecided,
}

impl Outcome {
    /// Whether the game is over
    pub fn is_terminal(self) -> bool {
        !matches!(self, Outcome::Undecided)
    }

    /// Terminal payoff from X's perspective, `None` while undecided
    pub fn payoff(self) -> Option<Value> {
        match self {
            Outcome::Win(Player::X) => Some(1),
            Outcome::Win(Player::O) => Some(-1),
            Outcome::Draw => Some(0),
            Outcome::Undecided => None,
        }
    }
}
