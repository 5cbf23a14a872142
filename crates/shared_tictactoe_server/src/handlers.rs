//! Request handlers.

use crate::app::AppState;
use crate::error::ApiError;
use crate::render::render_page;
use axum::Json;
use axum::extract::{Query, State};
use axum::response::Html;
use shared_tictactoe::{MoveRequest, Snapshot};
use tracing::{debug, info, instrument};

/// `GET /` - the board as an HTML page.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let page = state.game().inspect(render_page)?;
    Ok(Html(page))
}

/// `GET /makeMove?row=&col=` - place the current player's mark.
///
/// Only the first `row` and `col` values are read.
#[instrument(skip(state))]
pub async fn make_move(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<Snapshot>, ApiError> {
    let request: MoveRequest = pairs.into_iter().collect();
    let snapshot = state.game().submit(&request, *state.coordinate_parsing())?;
    info!(
        player = %snapshot.current_player,
        active = snapshot.game_active,
        message = %snapshot.message,
        "Move applied"
    );
    Ok(Json(snapshot))
}

/// `GET /reset` - start a new round, keeping scores.
#[instrument(skip(state))]
pub async fn reset(State(state): State<AppState>) -> Json<Snapshot> {
    Json(state.game().reset())
}

/// `GET /state` - current snapshot, no side effects.
#[instrument(skip(state))]
pub async fn current_state(State(state): State<AppState>) -> Json<Snapshot> {
    debug!("Serving current state");
    Json(state.game().snapshot())
}
