//! Legal move generation

use std::fmt;

use serde::{Deserialize, Serialize};

use super::board::{BOARD_SIZE, Board, Player};
use crate::types::MoveKey;

/// A pawn move in canonical coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Move {
    pub from_row: usize,
    pub from_col: usize,
    pub to_row: usize,
    pub to_col: usize,
}

impl Move {
    pub const fn new(from_row: usize, from_col: usize, to_row: usize, to_col: usize) -> Self {
        Move {
            from_row,
            from_col,
            to_row,
            to_col,
        }
    }

    /// True for diagonal (capturing) moves
    pub fn is_diagonal(&self) -> bool {
        self.from_col != self.to_col
    }

    /// Memory key for this move
    pub fn key(&self) -> MoveKey {
        MoveKey::from(*self)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{}->{},{}",
            self.from_row, self.from_col, self.to_row, self.to_col
        )
    }
}

/// Legal moves for the pawn at (row, col).
///
/// Returns nothing unless the square holds one of `mover`'s pawns. Candidates
/// are produced forward first, then the left diagonal, then the right diagonal.
/// A forward step needs an empty square; a diagonal step needs an opposing pawn.
pub fn legal_moves_for_piece(board: &Board, row: usize, col: usize, mover: Player) -> Vec<Move> {
    if row >= BOARD_SIZE || col >= BOARD_SIZE || board.get(row, col).owner() != Some(mover) {
        return Vec::new();
    }

    let forward_row = row as isize + mover.direction();
    if !(0..BOARD_SIZE as isize).contains(&forward_row) {
        return Vec::new();
    }

    let mut moves = Vec::with_capacity(3);
    let col = col as isize;

    if board.cell_at(forward_row, col).is_some_and(|c| c.owner().is_none()) {
        moves.push(Move::new(row, col as usize, forward_row as usize, col as usize));
    }

    let opponent = Some(mover.opponent());
    for capture_col in [col - 1, col + 1] {
        if board
            .cell_at(forward_row, capture_col)
            .is_some_and(|c| c.owner() == opponent)
        {
            moves.push(Move::new(
                row,
                col as usize,
                forward_row as usize,
                capture_col as usize,
            ));
        }
    }

    moves
}

/// All legal moves for `mover`, scanning its pawns in row-major order.
pub fn legal_moves(board: &Board, mover: Player) -> Vec<Move> {
    board
        .pawns(mover)
        .flat_map(|(row, col)| legal_moves_for_piece(board, row, col, mover))
        .collect()
}

impl Board {
    /// Convenience wrapper around [`legal_moves`]
    pub fn legal_moves(&self, mover: Player) -> Vec<Move> {
        legal_moves(self, mover)
    }

    /// Check whether `mover` has at least one legal move
    pub fn has_legal_move(&self, mover: Player) -> bool {
        self.pawns(mover)
            .any(|(row, col)| !legal_moves_for_piece(self, row, col, mover).is_empty())
    }
}
