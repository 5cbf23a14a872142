//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Side length of the board.
pub const BOARD_SIZE: usize = 3;

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell occupied by a player's mark.
    Occupied(Player),
}

impl Cell {
    /// Returns the single-character label used on the wire (`"X"`, `"O"` or `" "`).
    pub fn symbol(self) -> &'static str {
        match self {
            Cell::Empty => " ",
            Cell::Occupied(Player::X) => "X",
            Cell::Occupied(Player::O) => "O",
        }
    }

    /// Returns true if this cell holds the given player's mark.
    pub fn is_marked_by(self, player: Player) -> bool {
        self == Cell::Occupied(player)
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Cells indexed `[row][col]`.
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Clears every cell.
    #[instrument(skip(self))]
    pub fn initialize(&mut self) {
        for row in self.cells.iter_mut() {
            row.fill(Cell::Empty);
        }
    }

    /// Returns true iff both coordinates are in range and the target cell is empty.
    ///
    /// Coordinates are signed so that negative input is reported as out of range
    /// instead of failing to convert.
    pub fn is_valid_move(&self, row: i64, col: i64) -> bool {
        matches!(self.get(row, col), Some(Cell::Empty))
    }

    /// Returns true iff no cell is empty.
    pub fn is_full(&self) -> bool {
        self.cells
            .iter()
            .flatten()
            .all(|cell| *cell != Cell::Empty)
    }

    /// Gets the cell at the given coordinates, or `None` if out of range.
    pub fn get(&self, row: i64, col: i64) -> Option<Cell> {
        let row = usize::try_from(row).ok()?;
        let col = usize::try_from(col).ok()?;
        self.cells.get(row)?.get(col).copied()
    }

    /// Places a mark. Callers must have checked [`Board::is_valid_move`].
    pub(crate) fn place(&mut self, row: usize, col: usize, player: Player) {
        self.cells[row][col] = Cell::Occupied(player);
    }

    /// Returns the rows of the board.
    pub fn rows(&self) -> &[[Cell; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    /// Returns the board as wire symbols, one string per cell.
    pub fn symbols(&self) -> [[String; BOARD_SIZE]; BOARD_SIZE] {
        self.cells
            .map(|row| row.map(|cell| cell.symbol().to_string()))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            let line: Vec<&str> = row.iter().map(|cell| cell.symbol()).collect();
            write!(f, "{}", line.join("|"))?;
            if i + 1 < BOARD_SIZE {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}
