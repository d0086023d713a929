//! Win detection

use std::fmt;

use serde::{Deserialize, Serialize};

use super::board::{BOARD_SIZE, Board, Player};

/// Why a game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WinReason {
    /// A pawn reached the opponent's home row
    Promotion,
    /// Every opposing pawn was captured
    Capture,
    /// The player to move had nothing legal to play
    NoLegalMoves,
}

impl fmt::Display for WinReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WinReason::Promotion => write!(f, "promotion"),
            WinReason::Capture => write!(f, "capture"),
            WinReason::NoLegalMoves => write!(f, "no legal moves"),
        }
    }
}

/// Winner of a finished game together with the deciding condition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Victory {
    pub winner: Player,
    pub reason: WinReason,
}

impl Victory {
    pub fn new(winner: Player, reason: WinReason) -> Self {
        Victory { winner, reason }
    }
}

impl fmt::Display for Victory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} wins by {}", self.winner, self.reason)
    }
}

fn has_promoted(board: &Board, player: Player) -> bool {
    let goal = player.promotion_row();
    let pawn = player.to_cell();
    (0..BOARD_SIZE).any(|col| board.get(goal, col) == pawn)
}

/// Decide whether the game is over and why.
///
/// Conditions are checked in a fixed order and the first match wins:
/// Dark promotion, Light promotion, Light wiped out, Dark wiped out, and
/// finally `next_mover` (when given) having no legal move.
pub fn check_for_winner_with_reason(board: &Board, next_mover: Option<Player>) -> Option<Victory> {
    for player in Player::ALL {
        if has_promoted(board, player) {
            return Some(Victory::new(player, WinReason::Promotion));
        }
    }

    for player in Player::ALL {
        if board.pawn_count(player.opponent()) == 0 {
            return Some(Victory::new(player, WinReason::Capture));
        }
    }

    match next_mover {
        Some(mover) if !board.has_legal_move(mover) => {
            Some(Victory::new(mover.opponent(), WinReason::NoLegalMoves))
        }
        _ => None,
    }
}

/// Winner of the position, if any. See [`check_for_winner_with_reason`].
pub fn check_for_winner(board: &Board, next_mover: Option<Player>) -> Option<Player> {
    check_for_winner_with_reason(board, next_mover).map(|victory| victory.winner)
}
