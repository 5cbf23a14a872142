//! Shared tic-tac-toe: the game core behind a single-board web server.
//!
//! # Architecture
//!
//! - **Board**: fixed 3x3 grid of [`Cell`]s
//! - **Rules**: pure win/draw checks over a board
//! - **Game**: the state machine owning board, turn, status and scores
//! - **Requests**: raw client coordinates and how they are parsed
//!
//! # Example
//!
//! ```
//! use shared_tictactoe::{Game, Player};
//!
//! let mut game = Game::new();
//! let snapshot = game.apply_move(1, 1)?;
//! assert_eq!(snapshot.board[1][1], "X");
//! assert_eq!(snapshot.current_player, Player::O);
//! # Ok::<(), shared_tictactoe::GameError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod error;
mod game;
pub mod rules;
mod snapshot;
mod types;

pub use action::{CoordinateParsing, MoveRequest};
pub use error::{Axis, GameError, MalformedKind};
pub use game::{Game, GameStatus, Scores};
pub use snapshot::Snapshot;
pub use types::{BOARD_SIZE, Board, Cell, Player};
