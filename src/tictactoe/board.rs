//! Position representation and basic operations

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{lines::LineAnalyzer, outcome::Outcome};

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    /// Parse a cell from either the letter or the numeric grid notation.
    ///
    /// `0` is an empty cell here, matching the `0`/`1`/`2` grid encoding.
    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | '_' | '0' => Some(Cell::Empty),
            'X' | 'x' | '1' => Some(Cell::X),
            'O' | 'o' | '2' => Some(Cell::O),
            _ => None,
        }
    }

    pub fn to_player(self) -> Option<Player> {
        match self {
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
            Cell::Empty => None,
        }
    }
}

/// A player in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_cell().to_char())
    }
}

/// A 3x3 grid of cells stored row-major (index `row * 3 + col`).
///
/// The side to move is not stored; it is derived from the piece counts by
/// [`Position::side_to_move`]. The type is `Copy`, so every derived position
/// is an independent grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub cells: [Cell; 9],
}

/// Count of each piece type on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PieceCount {
    x: usize,
    o: usize,
    empty: usize,
}

impl Position {
    /// Create the empty starting position
    pub fn new() -> Self {
        Self::from_cells([Cell::Empty; 9])
    }

    pub fn from_cells(cells: [Cell; 9]) -> Self {
        Position { cells }
    }

    /// Build a position from the numeric grid notation (0 empty, 1 X, 2 O).
    ///
    /// # Errors
    ///
    /// Returns error if any entry is not 0, 1 or 2.
    ///
    /// # Examples
    ///
    /// ```
    /// use ttt_minimax::tictactoe::{Cell, Position};
    ///
    /// let position = Position::from_grid([[1, 1, 1], [2, 2, 0], [0, 0, 0]]).unwrap();
    /// assert_eq!(position.get(0), Cell::X);
    /// assert_eq!(position.get(5), Cell::Empty);
    /// ```
    pub fn from_grid(grid: [[u8; 3]; 3]) -> Result<Self, crate::Error> {
        let mut cells = [Cell::Empty; 9];
        for (row, values) in grid.iter().enumerate() {
            for (col, &value) in values.iter().enumerate() {
                let pos = row * 3 + col;
                cells[pos] = match value {
                    0 => Cell::Empty,
                    1 => Cell::X,
                    2 => Cell::O,
                    _ => {
                        return Err(crate::Error::InvalidCellCharacter {
                            character: char::from_digit(u32::from(value), 10).unwrap_or('?'),
                            position: pos,
                            context: format!("{grid:?}"),
                        });
                    }
                };
            }
        }
        Ok(Self::from_cells(cells))
    }

    /// Create a position from a string representation.
    ///
    /// The string must contain exactly 9 cell characters once whitespace and
    /// the row separators `/`, `|` and `,` are removed. Piece counts are not
    /// checked here; [`Position::side_to_move`] reports inconsistent boards.
    ///
    /// # Errors
    ///
    /// Returns error if the cell count is not 9 or a character is not a cell.
    pub fn from_string(s: &str) -> Result<Self, crate::Error> {
        let chars: Vec<char> = s
            .chars()
            .filter(|c| !c.is_whitespace() && !matches!(c, '/' | '|' | ','))
            .collect();
        if chars.len() != 9 {
            return Err(crate::Error::InvalidBoardLength {
                expected: 9,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut cells = [Cell::Empty; 9];
        for (i, &c) in chars.iter().enumerate() {
            cells[i] = Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: s.to_string(),
            })?;
        }

        Ok(Self::from_cells(cells))
    }

    fn count_pieces(&self) -> PieceCount {
        let mut count = PieceCount {
            x: 0,
            o: 0,
            empty: 0,
        };
        for cell in &self.cells {
            match cell {
                Cell::X => count.x += 1,
                Cell::O => count.o += 1,
                Cell::Empty => count.empty += 1,
            }
        }
        count
    }

    /// Classify the position.
    ///
    /// Rows, then columns, then diagonals are scanned and the first complete
    /// line decides the winner. A full board without a line is a draw.
    pub fn result(&self) -> Outcome {
        if let Some(winner) = LineAnalyzer::first_winner(&self.cells) {
            return Outcome::Win(winner);
        }
        if self.count_pieces().empty == 0 {
            Outcome::Draw
        } else {
            Outcome::Undecided
        }
    }

    /// Whether the position has a determined result
    pub fn is_terminal(&self) -> bool {
        self.result().is_terminal()
    }

    /// Derive the player to move from the piece counts.
    ///
    /// X moves when the counts are equal and O moves when X leads by one.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidState`] for any other relation between
    /// the counts, in either direction.
    pub fn side_to_move(&self) -> Result<Player, crate::Error> {
        let count = self.count_pieces();
        if count.x == count.o {
            Ok(Player::X)
        } else if count.x == count.o + 1 {
            Ok(Player::O)
        } else {
            Err(crate::Error::InvalidState {
                x_count: count.x,
                o_count: count.o,
                position: self.encode(),
            })
        }
    }

    /// Count the number of occupied cells on the board.
    pub fn occupied_count(&self) -> usize {
        let count = self.count_pieces();
        count.x + count.o
    }

    /// Get cell at position (0-8)
    pub fn get(&self, pos: usize) -> Cell {
        self.cells[pos]
    }

    /// Get all empty positions in row-major order
    pub fn empty_positions(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| i)
            .collect()
    }

    /// Copy this position with `player`'s mark placed at `pos`
    #[must_use = "with_mark returns a new position; the original is unchanged"]
    pub fn with_mark(&self, pos: usize, player: Player) -> Position {
        let mut next = *self;
        next.cells[pos] = player.to_cell();
        next
    }

    /// Find the position where two positions differ (for inferring moves)
    ///
    /// Returns the first position where the cells differ, or None if identical.
    pub fn find_changed_position(&self, other: &Position) -> Option<usize> {
        self.cells
            .iter()
            .zip(other.cells.iter())
            .position(|(a, b)| a != b)
    }

    /// Nine-character string encoding, row-major
    pub fn encode(&self) -> String {
        self.cells.iter().map(|&c| c.to_char()).collect()
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &cell) in self.cells.iter().enumerate() {
            write!(f, "{}", cell.to_char())?;
            if (i + 1).is_multiple_of(3) && i < 8 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
