//! Errors produced by the move processor.

use derive_more::{Display, Error};

/// Why a move request could not be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum MalformedKind {
    /// A coordinate was absent or empty.
    #[display("missing {}", _0)]
    Missing(Axis),
    /// A coordinate was present but not an integer.
    #[display("non-numeric {}", _0)]
    NotNumeric(Axis),
}

/// Which coordinate of a move request is at fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Axis {
    /// The `row` coordinate.
    #[display("row")]
    Row,
    /// The `col` coordinate.
    #[display("col")]
    Col,
}

/// Error that can occur when applying a move.
///
/// Every variant leaves the game untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum GameError {
    /// The game has been won or drawn and awaits a reset.
    #[display("Game is already over")]
    GameOver,

    /// A required coordinate was missing or unreadable.
    #[display("Malformed move request: {}", _0)]
    MalformedRequest(#[error(not(source))] MalformedKind),

    /// The coordinates are out of range or the cell is occupied.
    #[display("Invalid move at ({}, {})", row, col)]
    InvalidMove {
        /// Requested row.
        row: i64,
        /// Requested column.
        col: i64,
    },
}
