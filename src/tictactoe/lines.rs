//! Winning line analysis for Tic-Tac-Toe

use super::{Cell, Player};

/// Winning line indices on the 3x3 board, in scan order
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// Utility for analyzing winning lines in Tic-Tac-Toe
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// First complete line in [`WINNING_LINES`] order, if any
    pub fn first_winning_line(cells: &[Cell; 9]) -> Option<[usize; 3]> {
        WINNING_LINES.iter().copied().find(|&[a, b, c]| {
            cells[a] != Cell::Empty && cells[a] == cells[b] && cells[b] == cells[c]
        })
    }

    /// Owner of the first complete line, if any
    pub fn first_winner(cells: &[Cell; 9]) -> Option<Player> {
        Self::first_winning_line(cells).and_then(|[a, _, _]| cells[a].to_player())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_horizontal_winner() {
        let mut cells = [Cell::Empty; 9];
        cells[0] = Cell::X;
        cells[1] = Cell::X;
        cells[2] = Cell::X;

        assert_eq!(LineAnalyzer::first_winner(&cells), Some(Player::X));
    }

    #[test]
    fn test_vertical_winner() {
        let mut cells = [Cell::Empty; 9];
        cells[0] = Cell::O;
        cells[3] = Cell::O;
        cells[6] = Cell::O;

        assert_eq!(LineAnalyzer::first_winner(&cells), Some(Player::O));
        assert_eq!(LineAnalyzer::first_winning_line(&cells), Some([0, 3, 6]));
    }

    #[test]
    fn test_anti_diagonal() {
        let mut cells = [Cell::Empty; 9];
        cells[2] = Cell::X;
        cells[4] = Cell::X;
        cells[6] = Cell::X;

        assert_eq!(LineAnalyzer::first_winning_line(&cells), Some([2, 4, 6]));
    }

    #[test]
    fn test_rows_scanned_before_columns() {
        // XXX
        // X..
        // X..
        let mut cells = [Cell::Empty; 9];
        for idx in [0, 1, 2, 3, 6] {
            cells[idx] = Cell::X;
        }

        assert_eq!(LineAnalyzer::first_winning_line(&cells), Some([0, 1, 2]));
    }

    #[test]
    fn test_no_line() {
        let mut cells = [Cell::Empty; 9];
        cells[0] = Cell::X;
        cells[1] = Cell::O;
        cells[2] = Cell::X;

        assert_eq!(LineAnalyzer::first_winning_line(&cells), None);
        assert_eq!(LineAnalyzer::first_winner(&cells), None);
    }
}
