//! Square labels and perspective mapping.
//!
//! Internally the board is always in canonical orientation. A viewer sees it
//! from their own side: Light looks at it as stored, Dark sees it turned half
//! a circle. Squares are labelled `a`..`c` left to right and `1`..`3` from the
//! viewer's home row outward, so each side's first moves read like `b1-b2`.

use serde::{Deserialize, Serialize};

use super::{
    board::{BOARD_SIZE, Player},
    moves::Move,
};

const COLUMN_LABELS: [char; BOARD_SIZE] = ['a', 'b', 'c'];

/// Orientation the board is shown in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Perspective {
    Light,
    Dark,
}

impl From<Player> for Perspective {
    fn from(player: Player) -> Self {
        match player {
            Player::Light => Perspective::Light,
            Player::Dark => Perspective::Dark,
        }
    }
}

impl Perspective {
    fn flip(self, index: usize) -> usize {
        match self {
            Perspective::Light => index,
            Perspective::Dark => BOARD_SIZE - 1 - index,
        }
    }

    /// Map a canonical square to the viewer's (row, col), row 0 at the top
    pub fn to_visual(self, row: usize, col: usize) -> (usize, usize) {
        (self.flip(row), self.flip(col))
    }

    /// Inverse of [`Perspective::to_visual`]
    pub fn to_canonical(self, visual_row: usize, visual_col: usize) -> (usize, usize) {
        (self.flip(visual_row), self.flip(visual_col))
    }
}

/// Label of a canonical square as seen from `perspective`, e.g. `"b1"`
pub fn square_to_coord(row: usize, col: usize, perspective: Perspective) -> String {
    let (visual_row, visual_col) = perspective.to_visual(row, col);
    format!("{}{}", COLUMN_LABELS[visual_col], BOARD_SIZE - visual_row)
}

/// Render a move as `from-to`, e.g. `"b1-b2"`
pub fn move_to_coord(mv: Move, perspective: Perspective) -> String {
    format!(
        "{}-{}",
        square_to_coord(mv.from_row, mv.from_col, perspective),
        square_to_coord(mv.to_row, mv.to_col, perspective)
    )
}

/// Parse a square label into canonical (row, col).
///
/// # Errors
///
/// Returns [`crate::Error::InvalidCoordinate`] unless the text is a column
/// letter `a`-`c` followed by a rank `1`-`3`.
pub fn parse_square(text: &str, perspective: Perspective) -> Result<(usize, usize), crate::Error> {
    let invalid = || crate::Error::InvalidCoordinate {
        input: text.to_string(),
    };

    let mut chars = text.trim().chars();
    let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
        return Err(invalid());
    };

    let visual_col = COLUMN_LABELS
        .iter()
        .position(|&label| label == file.to_ascii_lowercase())
        .ok_or_else(invalid)?;
    let rank = rank
        .to_digit(10)
        .map(|d| d as usize)
        .filter(|d| (1..=BOARD_SIZE).contains(d))
        .ok_or_else(invalid)?;

    Ok(perspective.to_canonical(BOARD_SIZE - rank, visual_col))
}

/// Parse a move written as `b1-b2`, `b1 b2` or `b1b2`.
///
/// Only the syntax is checked; legality is up to the caller.
pub fn parse_move(text: &str, perspective: Perspective) -> Result<Move, crate::Error> {
    let compact: String = text
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .collect();

    if compact.len() != 4 || !compact.is_ascii() {
        return Err(crate::Error::InvalidCoordinate {
            input: text.to_string(),
        });
    }

    let (from_row, from_col) = parse_square(&compact[..2], perspective)?;
    let (to_row, to_col) = parse_square(&compact[2..], perspective)?;
    Ok(Move::new(from_row, from_col, to_row, to_col))
}
