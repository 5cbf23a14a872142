//! Serializable view of the game returned after every operation.

use crate::types::{BOARD_SIZE, Player};
use serde::{Deserialize, Serialize};

/// Snapshot of the game state as sent to clients.
///
/// Field names follow the client's camelCase convention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    /// Cells as `"X"`, `"O"` or `" "`, indexed `[row][col]`.
    pub board: [[String; BOARD_SIZE]; BOARD_SIZE],
    /// Player to move, or the player who just finished the game.
    pub current_player: Player,
    /// Outcome message; empty while the game is in progress.
    pub message: String,
    /// Whether moves are accepted.
    pub game_active: bool,
    /// Games won by X.
    pub score_x: u32,
    /// Games won by O.
    pub score_o: u32,
}
