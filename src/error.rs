//! Error types for the ttt-minimax crate

use thiserror::Error;

/// Main error type for the ttt-minimax crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error(
        "invalid game state: X={x_count}, O={o_count} (X must equal O or lead by exactly 1) in position '{position}'"
    )]
    InvalidState {
        x_count: usize,
        o_count: usize,
        position: String,
    },

    #[error("non-terminal position '{position}' was evaluated before being expanded")]
    Unexpanded { position: String },

    #[error("board string has wrong length: expected {expected} cells, got {got} in '{context}'")]
    InvalidBoardLength {
        expected: usize,
        got: usize,
        context: String,
    },

    #[error("invalid character '{character}' at position {position} in '{context}'")]
    InvalidCellCharacter {
        character: char,
        position: usize,
        context: String,
    },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("progress bar template error: {message}")]
    ProgressBarTemplate { message: String },
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}
