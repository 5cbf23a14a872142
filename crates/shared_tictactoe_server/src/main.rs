//! Shared Tic-Tac-Toe server binary.

use anyhow::Result;
use clap::Parser;
use shared_tictactoe_server::{Cli, ServerConfig, serve};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,shared_tictactoe=debug,tower_http=info")),
        )
        .init();

    let config = ServerConfig::load(&cli)?;
    info!(?config, "Starting Shared Tic-Tac-Toe server");

    serve(config).await
}
