//! Newtype keys for matchbox memory and the default learning constants.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::rules::{Board, Move};

/// Memory key for a board position.
///
/// A pure function of the nine cells: equal boards always share a key and
/// boards differing in any cell never do.
///
/// # Examples
///
/// ```
/// use hexapawn::rules::Board;
/// use hexapawn::types::StateKey;
///
/// let key = StateKey::from(&Board::new());
/// assert_eq!(key.as_str(), "DDD...LLL");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct StateKey(String);

impl StateKey {
    /// Parse and validate a state key.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a valid board encoding.
    pub fn parse(s: &str) -> Result<Self, crate::Error> {
        let board = Board::from_string(s)?;
        Ok(Self::from(&board))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&Board> for StateKey {
    fn from(board: &Board) -> Self {
        StateKey(board.encode())
    }
}

impl AsRef<str> for StateKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Memory key for a move, formatted `row,col->row,col`
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MoveKey(String);

impl MoveKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<Move> for MoveKey {
    fn from(mv: Move) -> Self {
        MoveKey(mv.to_string())
    }
}

impl fmt::Display for MoveKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl PartialEq<&str> for MoveKey {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

/// Starting weight for every legal move in a new matchbox.
pub const INITIAL_WEIGHT: u32 = 3;

/// Lowest weight a move can be driven to.
pub const MIN_WEIGHT: u32 = 1;

/// Highest weight a move can be driven to.
pub const MAX_WEIGHT: u32 = 6;

/// Default weight adjustments.
pub mod reinforcement {
    /// Added to a move credited with a win.
    pub const REWARD: u32 = 1;

    /// Subtracted from a move blamed for a loss.
    pub const PENALTY: u32 = 1;
}

/// How many of the AI's most recent moves the default policy adjusts.
pub const DEFAULT_MOVES_TO_LEARN: usize = 2;
