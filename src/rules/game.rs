//! High-level game management

use serde::{Deserialize, Serialize};

use super::{
    board::{Board, Player},
    moves::{Move, legal_moves},
    outcome::{Victory, check_for_winner_with_reason},
};

/// A move together with the position it was played from.
///
/// The sequence of records for one player is the input to the matchbox
/// learning update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub board: Board,
    pub mv: Move,
}

impl MoveRecord {
    pub fn new(board: Board, mv: Move) -> Self {
        MoveRecord { board, mv }
    }
}

/// A single game with history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    initial: Board,
    board: Board,
    first_player: Player,
    to_move: Player,
    history: Vec<(Player, MoveRecord)>,
    outcome: Option<Victory>,
}

impl Game {
    /// Start a game from the standard position with `first_player` to move
    pub fn new(first_player: Player) -> Self {
        Self::from_position(Board::new(), first_player)
    }

    /// Start a game from an arbitrary position
    pub fn from_position(board: Board, to_move: Player) -> Self {
        Game {
            initial: board,
            board,
            first_player: to_move,
            to_move,
            history: Vec::new(),
            outcome: check_for_winner_with_reason(&board, Some(to_move)),
        }
    }

    pub fn initial(&self) -> &Board {
        &self.initial
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn first_player(&self) -> Player {
        self.first_player
    }

    pub fn to_move(&self) -> Player {
        self.to_move
    }

    pub fn outcome(&self) -> Option<Victory> {
        self.outcome
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Legal moves for the player to move (empty once the game is over)
    pub fn legal_moves(&self) -> Vec<Move> {
        if self.is_over() {
            return Vec::new();
        }
        legal_moves(&self.board, self.to_move)
    }

    /// Play a move for the player to move.
    ///
    /// Returns the outcome if the move ended the game.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::GameOver`] once the game has finished and
    /// [`crate::Error::IllegalMove`] for a move the generator would not produce.
    pub fn play(&mut self, mv: Move) -> Result<Option<Victory>, crate::Error> {
        if self.is_over() {
            return Err(crate::Error::GameOver);
        }

        if !legal_moves(&self.board, self.to_move).contains(&mv) {
            return Err(crate::Error::IllegalMove {
                notation: mv.to_string(),
                player: self.to_move.to_string(),
            });
        }

        self.history
            .push((self.to_move, MoveRecord::new(self.board, mv)));
        self.board = self.board.apply(mv);
        self.to_move = self.to_move.opponent();
        self.outcome = check_for_winner_with_reason(&self.board, Some(self.to_move));

        Ok(self.outcome)
    }

    /// Number of moves played so far
    pub fn ply(&self) -> usize {
        self.history.len()
    }

    /// Every move played, in order, with the player who made it
    pub fn history(&self) -> &[(Player, MoveRecord)] {
        &self.history
    }

    /// The moves `player` made, oldest first
    pub fn history_for(&self, player: Player) -> Vec<MoveRecord> {
        self.history
            .iter()
            .filter(|(mover, _)| *mover == player)
            .map(|(_, record)| *record)
            .collect()
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(Player::Light)
    }
}
