//! Server configuration: defaults, TOML file, environment and CLI overrides.

use crate::cli::Cli;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use shared_tictactoe::CoordinateParsing;
use std::path::Path;
use tracing::{debug, info, instrument, warn};

/// Environment variable consulted for the listening port.
pub const PORT_ENV: &str = "PORT";

/// Configuration for the game server.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    /// Address to bind to.
    host: String,

    /// Port to listen on.
    port: u16,

    /// How non-numeric move coordinates are handled.
    coordinate_parsing: CoordinateParsing,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
            coordinate_parsing: CoordinateParsing::default(),
        }
    }
}

impl ServerConfig {
    /// Loads configuration from a TOML file. Missing keys take their defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(host = %config.host, port = config.port, "Config loaded successfully");
        Ok(config)
    }

    /// Resolves the effective configuration for a command line.
    ///
    /// Precedence, lowest first: defaults, `--config` file, `PORT`, flags.
    #[instrument(skip(cli))]
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let config = match &cli.config {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        Ok(config
            .with_env_port(std::env::var(PORT_ENV).ok().as_deref())
            .with_cli(cli))
    }

    /// Applies a `PORT` value. Unparsable values are ignored.
    #[instrument(skip(self))]
    pub fn with_env_port(mut self, value: Option<&str>) -> Self {
        if let Some(raw) = value {
            match raw.trim().parse() {
                Ok(port) => {
                    debug!(port, "Using port from environment");
                    self.port = port;
                }
                Err(e) => warn!(value = raw, error = %e, "Ignoring invalid {}", PORT_ENV),
            }
        }
        self
    }

    /// Applies explicit command-line flags.
    #[instrument(skip(self, cli))]
    pub fn with_cli(mut self, cli: &Cli) -> Self {
        if let Some(host) = &cli.host {
            self.host = host.clone();
        }
        if let Some(port) = cli.port {
            self.port = port;
        }
        if let Some(parsing) = cli.coordinate_parsing {
            self.coordinate_parsing = parsing;
        }
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
