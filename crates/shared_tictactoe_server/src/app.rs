//! Router assembly and server lifecycle.

use crate::config::ServerConfig;
use crate::handlers;
use crate::state::SharedGame;
use axum::Router;
use axum::routing::get;
use derive_getters::Getters;
use derive_new::new;
use shared_tictactoe::CoordinateParsing;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{info, instrument, warn};

/// State handed to every handler.
#[derive(Debug, Clone, Getters, new)]
pub struct AppState {
    /// The shared game.
    game: SharedGame,
    /// How move coordinates are parsed.
    coordinate_parsing: CoordinateParsing,
}

impl AppState {
    /// Creates state for a fresh game using the configured parsing policy.
    pub fn from_config(config: &ServerConfig) -> Self {
        Self::new(SharedGame::new(), *config.coordinate_parsing())
    }
}

/// Builds the application router.
#[instrument(skip(state))]
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/makeMove", get(handlers::make_move))
        .route("/reset", get(handlers::reset))
        .route("/state", get(handlers::current_state))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Binds the configured address and serves until Ctrl-C.
#[instrument(skip(config), fields(host = %config.host(), port = config.port()))]
pub async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    let app = router(AppState::from_config(&config));

    let listener = TcpListener::bind((config.host().as_str(), *config.port())).await?;
    info!(
        addr = %listener.local_addr()?,
        coordinate_parsing = %config.coordinate_parsing(),
        "Server is running"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown requested"),
        Err(e) => warn!(error = %e, "Failed to listen for Ctrl-C"),
    }
}
