//! The one game shared by every client.

use shared_tictactoe::{CoordinateParsing, Game, GameError, MoveRequest, Snapshot};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, instrument};

/// Handle to the process-wide game.
///
/// Clones share the same game. Each operation runs start to finish under one
/// lock acquisition, so concurrent requests are applied one at a time.
#[derive(Debug, Clone, Default)]
pub struct SharedGame {
    game: Arc<Mutex<Game>>,
}

impl SharedGame {
    /// Creates a handle to a fresh game.
    #[instrument]
    pub fn new() -> Self {
        debug!("Creating shared game");
        Self::default()
    }

    // Transitions are all-or-nothing, so a poisoned game is still consistent.
    fn lock(&self) -> MutexGuard<'_, Game> {
        self.game.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns the current snapshot without changing anything.
    pub fn snapshot(&self) -> Snapshot {
        self.lock().snapshot()
    }

    /// Runs `f` against the game while holding the lock.
    pub fn inspect<R>(&self, f: impl FnOnce(&Game) -> R) -> R {
        f(&*self.lock())
    }

    /// Applies a raw move request.
    #[instrument(skip(self))]
    pub fn submit(
        &self,
        request: &MoveRequest,
        parsing: CoordinateParsing,
    ) -> Result<Snapshot, GameError> {
        self.lock().submit(request, parsing)
    }

    /// Starts a new round, keeping scores.
    #[instrument(skip(self))]
    pub fn reset(&self) -> Snapshot {
        self.lock().reset()
    }
}
