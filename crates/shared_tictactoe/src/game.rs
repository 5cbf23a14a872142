//! Game state machine and move processing for tic-tac-toe.

use crate::action::{CoordinateParsing, MoveRequest};
use crate::error::GameError;
use crate::rules::{has_won, is_draw};
use crate::snapshot::Snapshot;
use crate::types::{Board, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Player),
    /// Game ended in a draw.
    Draw,
}

impl GameStatus {
    /// Whether moves are accepted in this status.
    pub fn is_active(self) -> bool {
        self == GameStatus::InProgress
    }

    /// Message shown to players for this status.
    pub fn message(self) -> String {
        match self {
            GameStatus::InProgress => String::new(),
            GameStatus::Won(player) => format!("Player {} wins!", player),
            GameStatus::Draw => "It's a draw!".to_string(),
        }
    }
}

/// Cumulative wins per player. Never decremented.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scores {
    x: u32,
    o: u32,
}

impl Scores {
    /// Wins recorded for `player`.
    pub fn of(&self, player: Player) -> u32 {
        match player {
            Player::X => self.x,
            Player::O => self.o,
        }
    }

    fn record_win(&mut self, player: Player) {
        match player {
            Player::X => self.x = self.x.saturating_add(1),
            Player::O => self.o = self.o.saturating_add(1),
        }
    }
}

/// The single tic-tac-toe game: board, turn, status and scores.
///
/// All mutation goes through [`Game::apply_move`], [`Game::submit`] and
/// [`Game::reset`]; each either completes or leaves the game untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    current_player: Player,
    status: GameStatus,
    scores: Scores,
}

impl Game {
    /// Creates a new game: empty board, X to move, no wins recorded.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            status: GameStatus::InProgress,
            scores: Scores::default(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move (or who made the final move).
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Whether moves are accepted.
    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }

    /// Returns the score tally.
    pub fn scores(&self) -> Scores {
        self.scores
    }

    /// Builds the client-facing snapshot of the current state.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            board: self.board.symbols(),
            current_player: self.current_player,
            message: self.status.message(),
            game_active: self.is_active(),
            score_x: self.scores.of(Player::X),
            score_o: self.scores.of(Player::O),
        }
    }

    /// Places the current player's mark at `(row, col)` and resolves the turn.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn apply_move(&mut self, row: i64, col: i64) -> Result<Snapshot, GameError> {
        if !self.is_active() {
            warn!(status = ?self.status, "Move attempted after game over");
            return Err(GameError::GameOver);
        }

        if !self.board.is_valid_move(row, col) {
            warn!(row, col, "Invalid move");
            return Err(GameError::InvalidMove { row, col });
        }
        // is_valid_move guarantees both are in 0..3
        let (r, c) = (row as usize, col as usize);

        let player = self.current_player;
        self.board.place(r, c, player);

        if has_won(&self.board, player) {
            self.status = GameStatus::Won(player);
            self.scores.record_win(player);
            info!(%player, score = self.scores.of(player), "Player completed a line");
        } else if is_draw(&self.board) {
            self.status = GameStatus::Draw;
            info!("Board full, game drawn");
        } else {
            self.current_player = player.opponent();
            debug!(next = %self.current_player, "Turn passed");
        }

        Ok(self.snapshot())
    }

    /// Applies a raw client request.
    ///
    /// A finished game is reported before the coordinates are examined.
    #[instrument(skip(self, request))]
    pub fn submit(
        &mut self,
        request: &MoveRequest,
        parsing: CoordinateParsing,
    ) -> Result<Snapshot, GameError> {
        if !self.is_active() {
            warn!(status = ?self.status, "Move attempted after game over");
            return Err(GameError::GameOver);
        }
        let (row, col) = request.coordinates(parsing)?;
        self.apply_move(row, col)
    }

    /// Starts a new round: clears the board and gives X the first move.
    /// Scores are kept.
    #[instrument(skip(self))]
    pub fn reset(&mut self) -> Snapshot {
        self.board.initialize();
        self.current_player = Player::X;
        self.status = GameStatus::InProgress;
        info!(
            score_x = self.scores.of(Player::X),
            score_o = self.scores.of(Player::O),
            "Game reset"
        );
        self.snapshot()
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_messages() {
        assert_eq!(GameStatus::InProgress.message(), "");
        assert_eq!(GameStatus::Won(Player::O).message(), "Player O wins!");
        assert_eq!(GameStatus::Draw.message(), "It's a draw!");
    }

    #[test]
    fn test_turn_alternates() {
        let mut game = Game::new();
        assert_eq!(game.current_player(), Player::X);
        game.apply_move(0, 0).unwrap();
        assert_eq!(game.current_player(), Player::O);
        game.apply_move(1, 1).unwrap();
        assert_eq!(game.current_player(), Player::X);
    }

    #[test]
    fn test_winner_keeps_turn() {
        let mut game = Game::new();
        for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
            game.apply_move(row, col).unwrap();
        }
        assert_eq!(game.status(), GameStatus::Won(Player::X));
        assert_eq!(game.current_player(), Player::X);
        assert_eq!(game.scores().of(Player::X), 1);
        assert_eq!(game.scores().of(Player::O), 0);
    }

    #[test]
    fn test_win_on_last_cell_is_not_a_draw() {
        let mut game = Game::new();
        // X O X / O X O / O X X with X taking (2,2) last
        for (row, col) in [(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2), (2, 1), (2, 0), (2, 2)] {
            game.apply_move(row, col).unwrap();
        }
        assert!(game.board().is_full());
        assert_eq!(game.status(), GameStatus::Won(Player::X));
        assert_eq!(game.snapshot().message, "Player X wins!");
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let mut game = Game::new();
        for (row, col) in [(0, 0), (0, 2), (0, 1), (1, 0), (1, 2), (1, 1), (2, 0), (2, 1), (2, 2)] {
            game.apply_move(row, col).unwrap();
        }
        assert_eq!(game.status(), GameStatus::Draw);
        assert_eq!(game.current_player(), Player::X);
    }

    #[test]
    fn test_submit_reports_game_over_before_parsing() {
        let mut game = Game::new();
        for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
            game.apply_move(row, col).unwrap();
        }
        let result = game.submit(&MoveRequest::default(), CoordinateParsing::Strict);
        assert_eq!(result, Err(GameError::GameOver));
    }
}
