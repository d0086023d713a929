//! Hexapawn rules engine

pub mod board;
pub mod game;
pub mod moves;
pub mod notation;
pub mod outcome;

pub use board::{BOARD_SIZE, Board, Cell, Player};
pub use game::{Game, MoveRecord};
pub use moves::{Move, legal_moves, legal_moves_for_piece};
pub use notation::Perspective;
pub use outcome::{Victory, WinReason, check_for_winner, check_for_winner_with_reason};
