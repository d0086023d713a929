//! Error types for the Hexapawn crate

use thiserror::Error;

/// Main error type for the Hexapawn crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("square ({row}, {col}) is off the 3x3 board")]
    OutOfBounds { row: usize, col: usize },

    #[error("illegal move {notation} for {player}")]
    IllegalMove { notation: String, player: String },

    #[error("game already over")]
    GameOver,

    #[error("board string must have {expected} cells, got {got} in '{context}'")]
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

    #[error("invalid coordinate '{input}' (expected a square like 'b2' or a move like 'b1-b2')")]
    InvalidCoordinate { input: String },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;
