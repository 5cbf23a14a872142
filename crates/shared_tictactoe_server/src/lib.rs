//! HTTP front end for a single shared tic-tac-toe game.
//!
//! Every client sees and plays the same board. Moves and resets are
//! serialized through [`SharedGame`]; responses carry a
//! [`Snapshot`](shared_tictactoe::Snapshot) as JSON.
//!
//! # Routes
//!
//! - `GET /` - HTML page
//! - `GET /makeMove?row=<int>&col=<int>` - play a move
//! - `GET /reset` - new round, scores kept
//! - `GET /state` - current snapshot
//!
//! # Example
//!
//! ```no_run
//! use shared_tictactoe_server::{ServerConfig, serve};
//!
//! # async fn example() -> anyhow::Result<()> {
//! serve(ServerConfig::default()).await
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod config;
mod error;
mod handlers;
mod render;
mod state;

pub use app::{AppState, router, serve};
pub use cli::Cli;
pub use config::{ConfigError, PORT_ENV, ServerConfig};
pub use error::ApiError;
pub use render::{escape_html, render_page};
pub use state::SharedGame;
