//! Command-line interface for the game server.

use clap::Parser;
use shared_tictactoe::CoordinateParsing;
use std::path::PathBuf;

/// Shared Tic-Tac-Toe - one board for everyone who opens the page
#[derive(Parser, Debug)]
#[command(name = "shared_tictactoe_server")]
#[command(about = "HTTP server hosting a single shared tic-tac-toe game", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Host to bind to [default: 127.0.0.1]
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind to [default: 5000, or $PORT]
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Handling of non-numeric coordinates: strict or lenient
    #[arg(long)]
    pub coordinate_parsing: Option<CoordinateParsing>,
}
