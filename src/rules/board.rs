//! Board representation and basic operations

use std::fmt;

use serde::{Deserialize, Serialize};

use super::moves::Move;

/// Width and height of the Hexapawn board.
pub const BOARD_SIZE: usize = 3;

/// Number of cells on the board.
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// A cell on the Hexapawn board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    Dark,
    Light,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Dark => 'D',
            Cell::Light => 'L',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' => Some(Cell::Empty),
            'D' | 'd' => Some(Cell::Dark),
            'L' | 'l' => Some(Cell::Light),
            _ => None,
        }
    }

    /// Player owning the pawn in this cell, if any
    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Dark => Some(Player::Dark),
            Cell::Light => Some(Player::Light),
        }
    }
}

/// A player in the game.
///
/// Dark starts on row 0 and advances toward increasing row indices; Light
/// starts on row 2 and advances toward decreasing row indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    Dark,
    Light,
}

impl Player {
    /// Both players, Dark first.
    pub const ALL: [Player; 2] = [Player::Dark, Player::Light];

    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::Dark => Player::Light,
            Player::Light => Player::Dark,
        }
    }

    /// Row delta of a forward step
    pub const fn direction(self) -> isize {
        match self {
            Player::Dark => 1,
            Player::Light => -1,
        }
    }

    /// Row the player's pawns start on
    pub const fn home_row(self) -> usize {
        match self {
            Player::Dark => 0,
            Player::Light => BOARD_SIZE - 1,
        }
    }

    /// Row a pawn must reach to promote (the opponent's home row)
    pub const fn promotion_row(self) -> usize {
        match self {
            Player::Dark => BOARD_SIZE - 1,
            Player::Light => 0,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::Dark => Cell::Dark,
            Player::Light => Cell::Light,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Dark => write!(f, "Dark"),
            Player::Light => write!(f, "Light"),
        }
    }
}

/// Check whether signed coordinates land on the board.
pub fn is_on_board(row: isize, col: isize) -> bool {
    (0..BOARD_SIZE as isize).contains(&row) && (0..BOARD_SIZE as isize).contains(&col)
}

/// A 3x3 Hexapawn position in canonical orientation.
///
/// Cells are stored row-major. The type is `Copy`, so every operation that
/// changes the position hands back a new board and leaves the original intact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// The starting position: Dark fills row 0, Light fills row 2.
    pub fn new() -> Self {
        let mut cells = [Cell::Empty; CELL_COUNT];
        for col in 0..BOARD_SIZE {
            cells[Self::index(Player::Dark.home_row(), col)] = Cell::Dark;
            cells[Self::index(Player::Light.home_row(), col)] = Cell::Light;
        }
        Board { cells }
    }

    /// A board with no pawns at all
    pub fn empty() -> Self {
        Board {
            cells: [Cell::Empty; CELL_COUNT],
        }
    }

    /// Create a board from a string representation.
    ///
    /// The string holds 9 cells in row-major order using `D`, `L` and `.`.
    /// Whitespace and `|` row separators are ignored, so `"DDD|...|LLL"` and
    /// `"DDD...LLL"` describe the same starting position.
    ///
    /// # Errors
    ///
    /// Returns error unless exactly 9 cells are present and every character
    /// is a valid cell.
    pub fn from_string(s: &str) -> Result<Self, crate::Error> {
        let chars: Vec<char> = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '|')
            .collect();

        if chars.len() != CELL_COUNT {
            return Err(crate::Error::InvalidBoardLength {
                expected: CELL_COUNT,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut cells = [Cell::Empty; CELL_COUNT];
        for (i, &c) in chars.iter().enumerate() {
            cells[i] = Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: s.to_string(),
            })?;
        }

        Ok(Board { cells })
    }

    fn index(row: usize, col: usize) -> usize {
        assert!(
            row < BOARD_SIZE && col < BOARD_SIZE,
            "square ({row}, {col}) is off the board"
        );
        row * BOARD_SIZE + col
    }

    /// Get the cell at (row, col).
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are off the board.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[Self::index(row, col)]
    }

    /// Get the cell at signed coordinates, or `None` when off the board
    pub fn cell_at(&self, row: isize, col: isize) -> Option<Cell> {
        is_on_board(row, col).then(|| self.get(row as usize, col as usize))
    }

    /// Return a copy of this board with one cell replaced
    #[must_use = "with_cell returns a new board; the original is unchanged"]
    pub fn with_cell(&self, row: usize, col: usize, cell: Cell) -> Self {
        let mut next = *self;
        next.cells[Self::index(row, col)] = cell;
        next
    }

    /// Iterate over the squares holding `player`'s pawns in row-major order
    pub fn pawns(&self, player: Player) -> impl Iterator<Item = (usize, usize)> + '_ {
        let pawn = player.to_cell();
        self.cells
            .iter()
            .enumerate()
            .filter(move |&(_, &cell)| cell == pawn)
            .map(|(i, _)| (i / BOARD_SIZE, i % BOARD_SIZE))
    }

    /// Count the pawns `player` still has on the board
    pub fn pawn_count(&self, player: Player) -> usize {
        self.pawns(player).count()
    }

    /// Count the number of occupied cells on the board.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c != Cell::Empty).count()
    }

    /// Apply a move and return the resulting board.
    ///
    /// The destination takes the source cell's value and the source becomes
    /// empty, so a capture needs no separate handling. Moves are expected to
    /// come from the legal-move generator.
    ///
    /// # Panics
    ///
    /// Panics if either square of the move is off the board.
    #[must_use = "apply returns a new board; the original is unchanged"]
    pub fn apply(&self, mv: Move) -> Board {
        let mut next = *self;
        let from = Self::index(mv.from_row, mv.from_col);
        let to = Self::index(mv.to_row, mv.to_col);
        next.cells[to] = next.cells[from];
        next.cells[from] = Cell::Empty;
        next
    }

    /// Apply a move, reporting off-board coordinates as an error instead of panicking
    pub fn try_apply(&self, mv: Move) -> Result<Board, crate::Error> {
        for (row, col) in [(mv.from_row, mv.from_col), (mv.to_row, mv.to_col)] {
            if row >= BOARD_SIZE || col >= BOARD_SIZE {
                return Err(crate::Error::OutOfBounds { row, col });
            }
        }
        Ok(self.apply(mv))
    }

    /// Get a canonical string representation for use as a key
    pub fn encode(&self) -> String {
        self.cells.iter().map(|&c| c.to_char()).collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &cell) in self.cells.iter().enumerate() {
            write!(f, "{}", cell.to_char())?;
            if (i + 1) % BOARD_SIZE == 0 && i < CELL_COUNT - 1 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
